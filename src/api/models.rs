use super::resource::{Job, PageMeta};
use serde::Deserialize;

/// Envelope returned by the search endpoint. Both `data` and `meta` may be
/// missing on an otherwise successful response.
///
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SearchData>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Payload of a search response.
///
#[derive(Debug, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub jobs: Option<Vec<Job>>,
}
