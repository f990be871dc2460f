//! JSON documents exchanged with the video API.

use serde::{Deserialize, Serialize};

/// Upload strategy chosen by the server, tagged by `strategy`. Unknown tags are
/// rejected instead of defaulting to either branch.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum PresignResponse {
    Single(SinglePresign),
    Multipart(MultipartPresign),
}

impl PresignResponse {
    #[must_use]
    pub fn video_id(&self) -> &str {
        match self {
            Self::Single(p) => &p.video_id,
            Self::Multipart(p) => &p.video_id,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SinglePresign {
    /// Presigned PUT URL, opaque.
    pub url: String,
    /// Storage key.
    pub key: String,
    pub video_id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultipartPresign {
    pub key: String,
    pub upload_id: String,
    pub video_id: String,
    pub part_size_bytes: u64,
    pub parts: Vec<PresignPart>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PresignPart {
    pub part_number: u32,
    pub url: String,
}

/// ETag returned by the object store for one part, kept verbatim (quotes included).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartReceipt {
    pub part_number: u32,
    pub e_tag: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SingleCompletion {
    pub video_id: String,
    pub key: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultipartCompletion {
    pub video_id: String,
    pub key: String,
    pub upload_id: String,
    pub parts: Vec<PartReceipt>,
}

/// Body of `complete-upload`; the form follows the strategy that ran.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CompletionManifest {
    Single(SingleCompletion),
    Multipart(MultipartCompletion),
}

impl CompletionManifest {
    #[must_use]
    pub const fn single(video_id: String, key: String) -> Self {
        Self::Single(SingleCompletion { video_id, key })
    }

    #[must_use]
    pub const fn multipart(
        video_id: String,
        key: String,
        upload_id: String,
        parts: Vec<PartReceipt>,
    ) -> Self {
        Self::Multipart(MultipartCompletion {
            video_id,
            key,
            upload_id,
            parts,
        })
    }

    #[must_use]
    pub fn video_id(&self) -> &str {
        match self {
            Self::Single(c) => &c.video_id,
            Self::Multipart(c) => &c.video_id,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranscodeStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl std::fmt::Display for TranscodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// A transcoded derivative of a video.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoVariant {
    pub variant_id: String,
    pub format: String,
    pub resolution: String,
    pub url: String,
    #[serde(rename = "transcode_status")]
    pub transcode_status: TranscodeStatus,
    pub size: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub video_id: String,
    pub file_name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    #[serde(default)]
    pub variants: Vec<VideoVariant>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Pagination {
    /// Opaque; sent back verbatim as the `cursor` query parameter.
    pub cursor: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VideoList {
    pub videos: Vec<VideoItem>,
    pub total: Option<u64>,
    pub pagination: Option<Pagination>,
}

impl VideoList {
    /// Cursor for the next page as the raw JSON string the API expects.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        self.pagination
            .as_ref()
            .and_then(|p| p.cursor.as_ref())
            .filter(|c| !c.is_null())
            .map(|c| match c {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DeleteResponse {
    pub ok: bool,
}
