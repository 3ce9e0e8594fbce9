// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backlog API client.
//!
//! Thin wrapper over reqwest: builds the space URL, merges the API key into
//! the query string, and decodes the JSON body. No retry, no caching, no
//! timeout beyond the transport default.

use crate::error::AppError;
use serde_json::Value;

/// Backlog API client.
#[derive(Clone)]
pub struct BacklogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BacklogClient {
    /// Create a client for `https://{space_id}.backlog.com/api/v2`.
    pub fn new(space_id: &str, api_key: String) -> Self {
        Self::with_base_url(format!("https://{}.backlog.com/api/v2", space_id), api_key)
    }

    /// Create a client against an explicit base URL (used by tests).
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// GET an endpoint and decode the body as an array of raw activities.
    ///
    /// The API key is merged into the query parameters. Fails on a
    /// non-success HTTP status or a body that is not valid JSON.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Value>, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("apiKey", self.api_key.as_str()));

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::BacklogApi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::BacklogApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::BacklogApi(format!("JSON parse error: {}", e)))
    }
}
