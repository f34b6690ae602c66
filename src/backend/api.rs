//! HTTP client for the movie backend search endpoint

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::{SearchResponse, SearchResult};

/// Path of the incremental search endpoint
pub const SEARCH_PATH: &str = "/ajax-search/";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    Decode(String),
}

/// Client for the backend `ajax-search` endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a query. Everything but `A-Z a-z 0-9 - _ . ~` is
    /// percent-encoded, which decodes to the same value server-side.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}?query={}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(query)
        )
    }

    /// Run one search. Only `200 OK` counts as success.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.search_url(query);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let payload: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(payload.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: &str) -> SearchClient {
        SearchClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = client("http://localhost:8000/");
        assert_eq!(
            client.search_url("Брат 2 & co"),
            "http://localhost:8000/ajax-search/?query=%D0%91%D1%80%D0%B0%D1%82%202%20%26%20co"
        );
        assert_eq!(
            client.search_url("(Don't) stop!*"),
            "http://localhost:8000/ajax-search/?query=%28Don%27t%29%20stop%21%2A"
        );
    }

    #[tokio::test]
    async fn test_search_echoes_decoded_query() {
        let router = Router::new().route(
            "/ajax-search/",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let query = params.get("query").cloned().unwrap_or_default();
                Json(json!({"results": [{
                    "title": query,
                    "rating": 7.5,
                    "director": "Someone",
                    "year": 2001,
                    "genre": "Drama"
                }]}))
            }),
        );
        let base = spawn_backend(router).await;

        let results = client(&base).search("Брат 2").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Брат 2");
    }

    #[tokio::test]
    async fn test_search_empty_results() {
        let router = Router::new().route(
            "/ajax-search/",
            get(|| async { Json(json!({"results": []})) }),
        );
        let base = spawn_backend(router).await;

        let results = client(&base).search("zz").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_non_ok_status() {
        let router = Router::new().route(
            "/ajax-search/",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_backend(router).await;

        let err = client(&base).search("matrix").await.unwrap_err();
        assert_eq!(err, SearchError::Status(500));
    }

    #[tokio::test]
    async fn test_search_other_success_status_is_dropped() {
        let router = Router::new().route(
            "/ajax-search/",
            get(|| async { (AxumStatus::ACCEPTED, Json(json!({"results": []}))) }),
        );
        let base = spawn_backend(router).await;

        let err = client(&base).search("matrix").await.unwrap_err();
        assert_eq!(err, SearchError::Status(202));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let router = Router::new().route("/ajax-search/", get(|| async { "<html>oops</html>" }));
        let base = spawn_backend(router).await;

        let err = client(&base).search("matrix").await.unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_unreachable_backend() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .search("matrix")
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }
}
