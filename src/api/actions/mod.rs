//! Actions, one per API endpoint.

use reqwest::Method;
use std::collections::BTreeMap;

// POST /api/v1/videos/upload-url
mod createuploadurl;
pub use self::createuploadurl::CreateUploadUrl;

// POST /api/v1/videos/complete-upload
mod completeupload;
pub use self::completeupload::CompleteUpload;

// POST /api/v1/auth/login
mod login;
pub use self::login::Login;

// GET /api/v1/videos
mod listvideos;
pub use self::listvideos::{ListQuery, ListVideos};

// GET /api/v1/videos/{videoId}
mod getvideo;
pub use self::getvideo::GetVideo;

// PATCH /api/v1/videos/{videoId}
mod updatevideo;
pub use self::updatevideo::{UpdateVideo, VideoPatch};

// DELETE /api/v1/videos/{videoId}
mod deletevideo;
pub use self::deletevideo::DeleteVideo;

// POST /api/v1/videos/{videoId}/transcode
mod starttranscode;
pub use self::starttranscode::StartTranscode;

pub const CONTENT_TYPE_MP4: &str = "video/mp4";

pub trait Action {
    // method to use GET/POST...
    fn http_method(&self) -> Method;

    // URL path below /api/v1
    fn path(&self) -> Vec<&str>;

    // URL query pairs
    fn query_pairs(&self) -> Option<BTreeMap<&str, String>> {
        None
    }

    /// JSON body to send, if any.
    ///
    /// # Errors
    /// Will return `Err` if the body can not be serialized
    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        Ok(None)
    }
}
