//! HTTP client for job search API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the job search API, handling the API key header, the request timeout,
//! and response parsing.

use super::error::ApiError;
use super::models::SearchResponse;
use super::query::JobQuery;
use log::*;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

const API_KEY_HEADER: &str = "x-api-key";
const SEARCH_ENDPOINT: &str = "jobs/searching";

/// Makes requests to the job search API and tries to conform response data to
/// the search response model.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given API key, base URL and timeout.
    ///
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| ApiError::ClientBuild(format!("invalid API key header: {}", e)))?;
        headers.insert(API_KEY_HEADER, key);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// Issue the search request for the query and return the decoded body.
    ///
    pub async fn search(&self, query: &JobQuery) -> Result<SearchResponse, ApiError> {
        let request_url = format!("{}/{}", self.base_url, SEARCH_ENDPOINT);
        let response = self
            .http_client
            .get(&request_url)
            .query(&query.to_params())
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let response_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            error!(
                "API request failed with status {}: {}",
                status, response_text
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<SearchResponse>(&response_bytes) {
            Ok(body) => Ok(body),
            Err(e) => {
                error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(e.into())
            }
        }
    }
}
