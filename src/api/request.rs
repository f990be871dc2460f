use crate::api::{ApiClient, ApiError, actions::Action};
use reqwest::{
    Response,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

/// Send an action and check the response status.
///
/// # Errors
///
/// Will return `Err` on transport failure, `401` or any other non-2xx status
pub async fn request<A: Action>(api: &ApiClient, action: &A) -> Result<Response, ApiError> {
    let mut url = api.endpoint(&action.path())?;

    if let Some(pairs) = action.query_pairs() {
        let mut query = url.query_pairs_mut();
        for (k, v) in &pairs {
            query.append_pair(k, v);
        }
    }

    let method = action.http_method();

    log::debug!("{method} {url}");

    let mut request = api
        .client()
        .request(method, url)
        .header(CONTENT_TYPE, "application/json");

    if let Some(token) = api.token() {
        request = request.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
    }

    if let Some(body) = action.body()? {
        request = request.body(body);
    }

    let response = request.send().await?;

    check_status(response).await
}

/// # Errors
///
/// Will return `Err` if the status is not a success
pub async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        log::warn!("401 Unauthorized: {}", response.url());
        return Err(ApiError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();

    log::error!("HTTP Status Code: {status}, Response: {body}");

    Err(ApiError::Status { status, body })
}

/// Decode a JSON response body.
///
/// # Errors
///
/// Will return `Err` if the body can not be read or is not the expected JSON
pub async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
