use crate::api::{ApiClient, ApiError, actions::Action, request, responses::DeleteResponse};
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct DeleteVideo<'a> {
    video_id: &'a str,
}

impl<'a> DeleteVideo<'a> {
    #[must_use]
    pub const fn new(video_id: &'a str) -> Self {
        Self { video_id }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request(&self, api: &ApiClient) -> Result<DeleteResponse, ApiError> {
        let response = request::request(api, self).await?;
        request::json(response).await
    }
}

impl Action for DeleteVideo<'_> {
    fn http_method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> Vec<&str> {
        vec!["videos", self.video_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_video() {
        let action = DeleteVideo::new("v1");
        assert_eq!(action.http_method(), Method::DELETE);
        assert_eq!(action.path(), vec!["videos", "v1"]);
    }
}
