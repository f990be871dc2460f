use crate::api::{
    ApiClient, ApiError, actions::Action, request, responses::CompletionManifest,
};
use reqwest::Method;

/// Hand the completion manifest to the server so it can assemble and register
/// the object. Only the status matters; the response body is ignored.
#[derive(Debug, Clone)]
pub struct CompleteUpload<'a> {
    manifest: &'a CompletionManifest,
}

impl<'a> CompleteUpload<'a> {
    #[must_use]
    pub const fn new(manifest: &'a CompletionManifest) -> Self {
        Self { manifest }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the status is not a success
    pub async fn request(&self, api: &ApiClient) -> Result<(), ApiError> {
        request::request(api, self).await?;
        Ok(())
    }
}

impl Action for CompleteUpload<'_> {
    fn http_method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<&str> {
        vec!["videos", "complete-upload"]
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        serde_json::to_vec(self.manifest).map(Some)
    }
}
