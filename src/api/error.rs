use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("{status} {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("URL can not be a base: {0}")]
    CannotBeABase(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}
