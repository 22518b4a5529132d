//! Job search API access.
//!
//! This module owns the remote job fetch: query building, the HTTP client,
//! the freshness cache and the transformation of responses into job pages.

mod cache;
mod client;
mod error;
mod models;
mod query;
mod resource;

pub use cache::FetchCache;
pub use error::ApiError;
pub use query::JobQuery;
pub use resource::*;

use client::Client;
use log::*;
use std::time::Duration;

/// Responsible for asynchronous interaction with the job search API including
/// transformation of response data into explicitly-defined types.
///
pub struct JobBoard {
    client: Client,
    cache: FetchCache,
}

impl JobBoard {
    /// Returns a new instance for the given API key and base URL.
    ///
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout: Duration,
        freshness: Duration,
    ) -> Result<JobBoard, ApiError> {
        debug!("Initializing job search client for {}...", base_url);
        Ok(JobBoard {
            client: Client::new(api_key, base_url, timeout)?,
            cache: FetchCache::new(freshness),
        })
    }

    /// Returns the page of jobs for the query. A fresh cached page for an
    /// identical query is returned without a network call.
    ///
    pub async fn fetch_jobs(&mut self, query: &JobQuery) -> Result<JobPage, ApiError> {
        if let Some(page) = self.cache.get(query) {
            debug!("Serving page {} from cache.", query.page);
            return Ok(page);
        }

        debug!(
            "Requesting page {} (limit {}) for {} board(s)...",
            query.page,
            query.limit,
            query.board_keys.len()
        );
        let response = self.client.search(query).await?;
        if let (Some(code), Some(message)) = (response.code, response.message.as_deref()) {
            debug!("Search responded with code {}: {}", code, message);
        }

        let jobs = response
            .data
            .and_then(|data| data.jobs)
            .unwrap_or_default();
        let page = JobPage {
            jobs,
            meta: response.meta,
        };
        debug!("Retrieved {} jobs for page {}", page.jobs.len(), query.page);

        self.cache.insert(query.clone(), page.clone());
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use httpmock::MockServer;
    use serde_json::json;
    use uuid::Uuid;

    fn board(server: &MockServer, key: &str, timeout: Duration) -> JobBoard {
        JobBoard::new(key, &server.base_url(), timeout, Duration::from_secs(5)).unwrap()
    }

    fn query(page: u32) -> JobQuery {
        JobQuery::new(vec!["board-1".to_string()], page, 10)
    }

    #[tokio::test]
    async fn fetch_jobs_success() -> Result<(), ApiError> {
        let key: Uuid = UUIDv4.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/jobs/searching")
                    .header("x-api-key", &key.to_string())
                    .header("accept", "application/json")
                    .query_param("board_keys[]", "board-1")
                    .query_param("page", "2")
                    .query_param("limit", "10");
                then.status(200).json_body(json!({
                    "code": 200,
                    "message": "Job search results",
                    "data": {
                        "jobs": [
                            {
                                "id": 1,
                                "name": "Backend Engineer",
                                "created_at": "2024-01-10T09:00:00+0000",
                                "tags": [{ "name": "category", "value": "Engineering" }]
                            },
                            { "id": 2, "name": "Data Analyst" }
                        ]
                    },
                    "meta": { "count": 2, "maxPage": 3, "page": 2, "total": 22 }
                }));
            })
            .await;

        let mut jobs = board(&server, &key.to_string(), Duration::from_secs(5));
        let page = jobs.fetch_jobs(&query(2)).await?;
        mock.assert_async().await;
        assert_eq!(page.jobs.len(), 2);
        assert_eq!(page.jobs[0].category(), Some("Engineering"));
        assert_eq!(page.meta.and_then(|m| m.max_page), Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_jobs_missing_data_and_meta() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/jobs/searching");
                then.status(200)
                    .json_body(json!({ "code": 200, "message": "No results" }));
            })
            .await;

        let mut jobs = board(&server, "key", Duration::from_secs(5));
        let page = jobs.fetch_jobs(&query(1)).await?;
        mock.assert_async().await;
        assert!(page.jobs.is_empty());
        assert!(page.meta.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn fetch_jobs_unauthorized() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/jobs/searching");
                then.status(401)
                    .json_body(json!({ "code": 401, "message": "Invalid API key" }));
            })
            .await;

        let mut jobs = board(&server, "", Duration::from_secs(5));
        let result = jobs.fetch_jobs(&query(1)).await;
        mock.assert_async().await;
        assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
    }

    #[tokio::test]
    async fn fetch_jobs_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/jobs/searching");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!({ "code": 200, "message": "late" }));
            })
            .await;

        let mut jobs = board(&server, "key", Duration::from_millis(50));
        let result = jobs.fetch_jobs(&query(1)).await;
        assert!(matches!(result, Err(ApiError::Timeout)));
    }

    #[tokio::test]
    async fn fetch_jobs_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/jobs/searching");
                then.status(200).body("<html>");
            })
            .await;

        let mut jobs = board(&server, "key", Duration::from_secs(5));
        let result = jobs.fetch_jobs(&query(1)).await;
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }

    #[tokio::test]
    async fn fetch_jobs_identical_query_is_cached() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/jobs/searching");
                then.status(200).json_body(json!({
                    "code": 200,
                    "message": "ok",
                    "data": { "jobs": [{ "id": 1, "name": "Backend Engineer" }] }
                }));
            })
            .await;

        let mut jobs = board(&server, "key", Duration::from_secs(5));
        let first = jobs.fetch_jobs(&query(1)).await?;
        let second = jobs.fetch_jobs(&query(1)).await?;
        assert_eq!(first, second);
        assert_eq!(mock.hits_async().await, 1);

        jobs.fetch_jobs(&query(2)).await?;
        assert_eq!(mock.hits_async().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_jobs_errors_are_not_cached() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/jobs/searching");
                then.status(500);
            })
            .await;

        let mut jobs = board(&server, "key", Duration::from_secs(5));
        assert!(jobs.fetch_jobs(&query(1)).await.is_err());
        assert!(jobs.fetch_jobs(&query(1)).await.is_err());
        assert_eq!(mock.hits_async().await, 2);
    }
}
