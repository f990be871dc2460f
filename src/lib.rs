//! Upload MP4 videos to a presign-driven video API.
//!
//! The server decides, per file, whether the client sends one PUT or a
//! multipart upload to object storage; [`upload::Uploader`] drives either
//! protocol and reports progress. [`api`] covers the rest of the video API
//! (list, show, edit, delete, transcode, login) and [`cli`] is the `vidup`
//! command line built on both.

pub mod api;
pub mod cli;
pub mod upload;

pub use api::{ApiClient, ApiError};
pub use upload::{UploadError, Uploaded, Uploader};
