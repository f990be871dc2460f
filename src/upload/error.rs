use crate::api::ApiError;
use thiserror::Error;

/// Terminal failure of one upload. The orchestrator never retries; the caller
/// decides whether to start over with a fresh presign.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("presign failed: {0}")]
    PresignFailed(String),

    #[error("upload failed with HTTP status {0}")]
    SingleUploadFailed(u16),

    #[error("part {part_number} failed with HTTP status {status}")]
    PartUploadFailed { part_number: u32, status: u16 },

    #[error("missing ETag for part {0}")]
    MissingETag(u32),

    #[error("complete upload failed: {0}")]
    CompletionFailed(String),

    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("could not read the file: {0}")]
    Io(#[from] std::io::Error),

    #[error("upload cancelled")]
    Cancelled,
}

impl UploadError {
    pub(crate) fn presign(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::Unauthorized,
            ApiError::Network(e) => Self::Network(e),
            other => Self::PresignFailed(other.to_string()),
        }
    }

    pub(crate) fn completion(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::Unauthorized,
            ApiError::Network(e) => Self::Network(e),
            other => Self::CompletionFailed(other.to_string()),
        }
    }
}
