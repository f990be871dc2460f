//! Integration tests for the video API actions

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

mod common;

use common::{TOKEN, api};
use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::json;
use vidup::api::{
    ApiError,
    actions::{
        DeleteVideo, GetVideo, ListQuery, ListVideos, Login, StartTranscode, UpdateVideo,
        VideoPatch,
    },
    responses::TranscodeStatus,
};

fn video() -> serde_json::Value {
    json!({
        "videoId": "v1",
        "fileName": "a.mp4",
        "title": "Holidays",
        "createdAt": "2025-01-01T00:00:00Z",
        "createdBy": "u1",
        "variants": [
            {
                "variantId": "r1",
                "format": "mp4",
                "resolution": "1280x720",
                "url": "https://cdn.example.com/v1/720.mp4",
                "transcode_status": "completed",
                "size": 1024
            }
        ]
    })
}

#[tokio::test]
async fn test_login() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/v1/auth/login")
        .match_body(Matcher::Json(json!({"username": "alice", "password": "secret"})))
        .with_status(200)
        .with_body(r#"{"token":"t1"}"#)
        .create_async()
        .await;

    let client = vidup::ApiClient::new(&server.url(), None).unwrap();
    let rs = Login::new("alice", "secret").request(&client).await.unwrap();

    assert_eq!(rs.token, "t1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_rejected() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/api/v1/auth/login")
        .with_status(401)
        .with_body(r#"{"error":"invalid credentials"}"#)
        .create_async()
        .await;

    let client = vidup::ApiClient::new(&server.url(), None).unwrap();
    let err = Login::new("alice", "wrong").request(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_list_videos() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/videos")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("sort".into(), "createdAt:desc".into()),
            Matcher::UrlEncoded("createdBy".into(), "me".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "videos": [video()],
                "total": 3,
                "pagination": {"cursor": {"createdAt": "2025-01-01T00:00:00Z", "id": "v1"}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let query = ListQuery {
        limit: Some(2),
        sort: Some("createdAt:desc".to_string()),
        created_by: Some("me".to_string()),
        ..ListQuery::default()
    };

    let rs = ListVideos::new(query).request(&api(&server)).await.unwrap();

    assert_eq!(rs.videos.len(), 1);
    assert_eq!(rs.total, Some(3));
    assert_eq!(
        rs.next_cursor().as_deref(),
        Some(r#"{"createdAt":"2025-01-01T00:00:00Z","id":"v1"}"#)
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_videos_unauthorized() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/api/v1/videos")
        .with_status(401)
        .create_async()
        .await;

    let err = ListVideos::new(ListQuery::default())
        .request(&api(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_get_video() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/videos/v1")
        .with_status(200)
        .with_body(video().to_string())
        .create_async()
        .await;

    let video = GetVideo::new("v1").request(&api(&server)).await.unwrap();

    assert_eq!(video.video_id, "v1");
    assert_eq!(video.title.as_deref(), Some("Holidays"));
    assert_eq!(video.variants.len(), 1);
    assert_eq!(video.variants[0].transcode_status, TranscodeStatus::Completed);
    assert_eq!(video.variants[0].size, Some(1024));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_video_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/api/v1/videos/nope")
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let err = GetVideo::new("nope").request(&api(&server)).await.unwrap_err();

    assert!(matches!(
        &err,
        ApiError::Status { status, body } if *status == StatusCode::NOT_FOUND && body == "not found"
    ));
}

#[tokio::test]
async fn test_get_video_invalid_json() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/api/v1/videos/v1")
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;

    let err = GetVideo::new("v1").request(&api(&server)).await.unwrap_err();

    assert!(matches!(err, ApiError::Json(_)));
}

#[tokio::test]
async fn test_update_video() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("PATCH", "/api/v1/videos/v1")
        .match_body(Matcher::Json(json!({"title": "Beach"})))
        .with_status(200)
        .with_body(video().to_string())
        .create_async()
        .await;

    let patch = VideoPatch {
        title: Some("Beach".to_string()),
        description: None,
    };

    UpdateVideo::new("v1", patch)
        .request(&api(&server))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_video() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("DELETE", "/api/v1/videos/v1")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let rs = DeleteVideo::new("v1").request(&api(&server)).await.unwrap();

    assert!(rs.ok);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_start_transcode() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/v1/videos/v1/transcode")
        .match_body(Matcher::Json(json!({"force": true})))
        .with_status(202)
        .with_body(r#"{"ok":true,"queued":2}"#)
        .create_async()
        .await;

    let rs = StartTranscode::new("v1")
        .request(&api(&server))
        .await
        .unwrap();

    assert_eq!(rs, json!({"ok": true, "queued": 2}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_video_id_is_path_encoded() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/videos/a%2Fb")
        .with_status(200)
        .with_body(video().to_string())
        .create_async()
        .await;

    GetVideo::new("a/b").request(&api(&server)).await.unwrap();

    mock.assert_async().await;
}
