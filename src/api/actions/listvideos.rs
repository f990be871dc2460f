use crate::api::{ApiClient, ApiError, actions::Action, request, responses::VideoList};
use reqwest::Method;
use std::collections::BTreeMap;

/// Filters for listing videos; only the fields that are set are sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: Option<usize>,
    /// e.g. `createdAt:desc`
    pub sort: Option<String>,
    /// `me` or a user id
    pub created_by: Option<String>,
    /// e.g. `transcode_status:completed`
    pub filter: Option<String>,
    /// free text, if the server supports it
    pub q: Option<String>,
    /// raw JSON cursor from a previous page
    pub cursor: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ListVideos {
    query: ListQuery,
}

impl ListVideos {
    #[must_use]
    pub const fn new(query: ListQuery) -> Self {
        Self { query }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request(&self, api: &ApiClient) -> Result<VideoList, ApiError> {
        let response = request::request(api, self).await?;
        request::json(response).await
    }
}

impl Action for ListVideos {
    fn http_method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> Vec<&str> {
        vec!["videos"]
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, String>> {
        let mut map: BTreeMap<&str, String> = BTreeMap::new();

        if let Some(limit) = self.query.limit {
            map.insert("limit", limit.to_string());
        }

        let optional = [
            ("sort", &self.query.sort),
            ("createdBy", &self.query.created_by),
            ("filter", &self.query.filter),
            ("q", &self.query.q),
            ("cursor", &self.query.cursor),
        ];

        for (k, v) in optional {
            if let Some(v) = v.as_deref().filter(|v| !v.is_empty()) {
                map.insert(k, v.to_string());
            }
        }

        if map.is_empty() { None } else { Some(map) }
    }
}
