use crate::api::{
    ApiClient, ApiError,
    actions::{Action, CONTENT_TYPE_MP4},
    request,
    responses::PresignResponse,
};
use reqwest::Method;
use serde::Serialize;

/// Ask the server for presigned upload URLs; the server picks the strategy.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUploadUrl<'a> {
    file_name: &'a str,
    size_bytes: u64,
    content_type: &'a str,
}

impl<'a> CreateUploadUrl<'a> {
    #[must_use]
    pub const fn new(file_name: &'a str, size_bytes: u64) -> Self {
        Self {
            file_name,
            size_bytes,
            content_type: CONTENT_TYPE_MP4,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the response is not a known strategy
    pub async fn request(&self, api: &ApiClient) -> Result<PresignResponse, ApiError> {
        let response = request::request(api, self).await?;
        request::json(response).await
    }
}

impl Action for CreateUploadUrl<'_> {
    fn http_method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<&str> {
        vec!["videos", "upload-url"]
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        serde_json::to_vec(self).map(Some)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_and_path() {
        let action = CreateUploadUrl::new("a.mp4", 1024);
        assert_eq!(action.http_method(), Method::POST);
        assert_eq!(action.path(), vec!["videos", "upload-url"]);
        assert!(action.query_pairs().is_none());
    }

    #[test]
    fn test_body() {
        let action = CreateUploadUrl::new("a.mp4", 1024);
        let body: serde_json::Value =
            serde_json::from_slice(&action.body().unwrap().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"fileName": "a.mp4", "sizeBytes": 1024, "contentType": "video/mp4"})
        );
    }
}
