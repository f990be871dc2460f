use crate::api::{ApiClient, ApiError, actions::Action, request, responses::VideoItem};
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct GetVideo<'a> {
    video_id: &'a str,
}

impl<'a> GetVideo<'a> {
    #[must_use]
    pub const fn new(video_id: &'a str) -> Self {
        Self { video_id }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request(&self, api: &ApiClient) -> Result<VideoItem, ApiError> {
        let response = request::request(api, self).await?;
        request::json(response).await
    }
}

impl Action for GetVideo<'_> {
    fn http_method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> Vec<&str> {
        vec!["videos", self.video_id]
    }
}
