//! Common test helpers for the integration tests
//!
//! - `api`: an `ApiClient` pointed at a mockito server
//! - `Recorder`: a progress sink that keeps every event
//! - presign bodies for both strategies

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation
)]

use mockito::{Matcher, Mock, ServerGuard};
use secrecy::SecretString;
use serde_json::{Value, json};
use std::sync::Mutex;
use std::time::Duration;
use vidup::{
    ApiClient, UploadError,
    upload::{Uploader, progress::ProgressSink, store::ObjectStore},
};

pub const TOKEN: &str = "test-token";

pub const PRESIGN_PATH: &str = "/api/v1/videos/upload-url";

pub const COMPLETE_PATH: &str = "/api/v1/videos/complete-upload";

/// `ApiClient` for the mock server, authenticated with [`TOKEN`]
pub fn api(server: &ServerGuard) -> ApiClient {
    ApiClient::new(&server.url(), Some(Duration::from_secs(10)))
        .unwrap()
        .with_token(Some(SecretString::new(TOKEN.into())))
}

pub fn uploader(server: &ServerGuard) -> Uploader {
    Uploader::new(
        api(server),
        ObjectStore::new(Some(Duration::from_secs(10))).unwrap(),
    )
}

/// Deterministic file content, so a misplaced byte range changes the body
pub fn data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

pub fn single_presign(server: &ServerGuard, path: &str) -> Value {
    json!({
        "strategy": "single",
        "url": format!("{}{path}", server.url()),
        "key": "k",
        "videoId": "v1",
    })
}

pub fn multipart_presign(server: &ServerGuard, part_size: u64, parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts
        .iter()
        .enumerate()
        .map(|(i, path)| json!({"partNumber": i + 1, "url": format!("{}{path}", server.url())}))
        .collect();

    json!({
        "strategy": "multipart",
        "key": "k",
        "uploadId": "up1",
        "videoId": "v1",
        "partSizeBytes": part_size,
        "parts": parts,
    })
}

/// Mock the presign endpoint for a file
pub async fn mock_presign(
    server: &mut ServerGuard,
    file_name: &str,
    size: u64,
    response: &Value,
) -> Mock {
    server
        .mock("POST", PRESIGN_PATH)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "fileName": file_name,
            "sizeBytes": size,
            "contentType": "video/mp4",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .create_async()
        .await
}

/// Mock the completion endpoint, expecting `manifest` exactly `hits` times
pub async fn mock_complete(server: &mut ServerGuard, manifest: Value, hits: usize) -> Mock {
    server
        .mock("POST", COMPLETE_PATH)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_body(Matcher::Json(manifest))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .expect(hits)
        .create_async()
        .await
}

/// Any completion call at all
pub async fn mock_no_complete(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", COMPLETE_PATH)
        .with_status(200)
        .expect(0)
        .create_async()
        .await
}

/// Mock a part or single PUT with the exact body and an optional `ETag`
pub async fn mock_put(
    server: &mut ServerGuard,
    path: &str,
    content_type: &str,
    body: Vec<u8>,
    etag: Option<&str>,
) -> Mock {
    let len = body.len().to_string();

    let mut mock = server
        .mock("PUT", path)
        .match_header("content-type", content_type)
        .match_header("content-length", len.as_str())
        .match_header("authorization", Matcher::Missing)
        .match_body(body)
        .with_status(200);

    if let Some(etag) = etag {
        mock = mock.with_header("etag", etag);
    }

    mock.expect(1).create_async().await
}

/// Progress sink that keeps every event
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<u8>>,
    completed: Mutex<Option<String>>,
    failed: Mutex<Option<String>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<u8> {
        self.events.lock().unwrap().clone()
    }

    pub fn completed_video(&self) -> Option<String> {
        self.completed.lock().unwrap().clone()
    }

    pub fn failure(&self) -> Option<String> {
        self.failed.lock().unwrap().clone()
    }
}

impl ProgressSink for Recorder {
    fn progress(&self, pct: u8) {
        self.events.lock().unwrap().push(pct);
    }

    fn completed(&self, video_id: &str) {
        *self.completed.lock().unwrap() = Some(video_id.to_string());
    }

    fn failed(&self, error: &UploadError) {
        *self.failed.lock().unwrap() = Some(error.to_string());
    }
}
