use crate::api::{ApiClient, ApiError, actions::Action, request, responses::LoginResponse};
use reqwest::Method;
use serde::Serialize;

/// Exchange username and password for a bearer token.
#[derive(Serialize, Clone)]
pub struct Login<'a> {
    username: &'a str,
    password: &'a str,
}

impl<'a> Login<'a> {
    #[must_use]
    pub const fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the credentials are rejected
    pub async fn request(&self, api: &ApiClient) -> Result<LoginResponse, ApiError> {
        let response = request::request(api, self).await?;
        request::json(response).await
    }
}

impl Action for Login<'_> {
    fn http_method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<&str> {
        vec!["auth", "login"]
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        serde_json::to_vec(self).map(Some)
    }
}
