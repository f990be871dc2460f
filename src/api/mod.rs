//! Client for the video API (`/api/v1/*`).
//!
//! Every request carries `Content-Type: application/json` and, when a token is
//! known, `Authorization: Bearer <token>`. A `401` from any endpoint surfaces as
//! [`ApiError::Unauthorized`].

pub mod actions;
pub mod request;
pub mod responses;

mod error;
pub use self::error::ApiError;

use reqwest::Client;
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

const API_PREFIX: [&str; 2] = ["api", "v1"];

#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ApiClient {
    /// # Errors
    /// Will return `Err` if the base URL is invalid or the HTTP client can not be built
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::CannotBeABase(base_url.to_string()));
        }

        let mut builder = Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            token: None,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }

    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// `<base url>/api/v1/<segments>`, each segment percent-encoded.
    ///
    /// # Errors
    /// Will return `Err` if the base URL can not have path segments
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| ApiError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);

        Ok(url)
    }
}
