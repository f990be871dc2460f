use crate::api::{ApiClient, ApiError, actions::Action, request};
use reqwest::Method;
use serde::Serialize;

/// Ask the backend to (re)produce the variants of a video.
#[derive(Serialize, Debug, Clone)]
pub struct StartTranscode<'a> {
    #[serde(skip)]
    video_id: &'a str,
    pub force: bool,
}

impl<'a> StartTranscode<'a> {
    #[must_use]
    pub const fn new(video_id: &'a str) -> Self {
        Self {
            video_id,
            force: true,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request(&self, api: &ApiClient) -> Result<serde_json::Value, ApiError> {
        let response = request::request(api, self).await?;
        request::json(response).await
    }
}

impl Action for StartTranscode<'_> {
    fn http_method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<&str> {
        vec!["videos", self.video_id, "transcode"]
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        serde_json::to_vec(self).map(Some)
    }
}
