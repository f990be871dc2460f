use crate::api::{ApiClient, ApiError, actions::Action, request, responses::VideoItem};
use reqwest::Method;
use serde::Serialize;

/// Editable metadata; unset fields are left untouched by the server.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct VideoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VideoPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateVideo<'a> {
    video_id: &'a str,
    patch: VideoPatch,
}

impl<'a> UpdateVideo<'a> {
    #[must_use]
    pub const fn new(video_id: &'a str, patch: VideoPatch) -> Self {
        Self { video_id, patch }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request(&self, api: &ApiClient) -> Result<VideoItem, ApiError> {
        let response = request::request(api, self).await?;
        request::json(response).await
    }
}

impl Action for UpdateVideo<'_> {
    fn http_method(&self) -> Method {
        Method::PATCH
    }

    fn path(&self) -> Vec<&str> {
        vec!["videos", self.video_id]
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        serde_json::to_vec(&self.patch).map(Some)
    }
}
