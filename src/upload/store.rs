//! Object store client: plain PUTs to presigned URLs.
//!
//! The URL carries all authorization, so nothing is signed, retried or
//! redirected here.

use crate::upload::file::Chunk;
use reqwest::{
    Client, StatusCode,
    header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG, HeaderMap},
    redirect::Policy,
};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PutResponse {
    pub status: StatusCode,
    /// `ETag` header, verbatim; `None` when absent or empty.
    pub etag: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ObjectStore {
    client: Client,
}

impl ObjectStore {
    /// # Errors
    /// Will return `Err` if the HTTP client can not be built
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().redirect(Policy::none());

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// # Errors
    /// Will return `Err` on transport failure only; the status is left to the caller
    pub async fn put(
        &self,
        url: &str,
        content_type: &str,
        chunk: Chunk,
    ) -> Result<PutResponse, reqwest::Error> {
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, chunk.len)
            .body(chunk.body)
            .send()
            .await?;

        Ok(PutResponse {
            status: response.status(),
            etag: etag(response.headers()),
        })
    }
}

/// `ETag` kept verbatim, quotes included; an empty value counts as missing.
fn etag(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ETAG)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_etag_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("\"e1\""));
        assert_eq!(etag(&headers).as_deref(), Some("\"e1\""));
    }

    #[test]
    fn test_etag_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert!(etag(&headers).is_none());

        headers.insert(ETAG, HeaderValue::from_static(""));
        assert!(etag(&headers).is_none());
    }

    #[test]
    fn test_etag_not_visible_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_bytes(b"\"caf\xe9\"").unwrap());

        assert_eq!(etag(&headers).as_deref(), Some("\"caf\u{fffd}\""));
    }
}
