use reqwest::Client;
use tracing::{debug, warn};

use super::types::{SearchResponse, SearchResultItem};
use crate::config::{Config, Secret};

const API_URL: &str = "https://www.googleapis.com/customsearch/v1";
/// Upper bound on results requested per query (`num`).
pub const RESULT_LIMIT: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Keyword search returning ranked result records.
/// Implemented by `GoogleSearchClient` for production; mock implementations used in tests.
pub trait WebSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError>;
}

#[derive(Clone)]
pub struct GoogleSearchClient {
    http: Client,
    api_key: Secret,
    engine_id: String,
    base_url: String,
}

impl GoogleSearchClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            api_key: config.google_api_key.clone(),
            engine_id: config.search_engine_id.clone(),
            base_url: API_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: Secret::new("test-key"),
            engine_id: "test-engine".to_string(),
            base_url: base_url.to_string(),
        }
    }
}

impl WebSearch for GoogleSearchClient {
    /// Non-success statuses are logged and reported as an empty result set.
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        let num = RESULT_LIMIT.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.expose()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "search request failed, continuing without results");
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let mut items = serde_json::from_str::<SearchResponse>(&body)?.items;
        items.truncate(RESULT_LIMIT);

        debug!(results = items.len(), "search complete");
        Ok(items)
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GoogleSearchClient {
        GoogleSearchClient::with_base_url(Client::new(), &format!("{}/customsearch/v1", server.uri()))
    }

    #[tokio::test]
    async fn sends_expected_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("key", "test-key"))
            .and(query_param("cx", "test-engine"))
            .and(query_param("q", "Acme Corp"))
            .and(query_param("num", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {
                        "title": "Acme Corp - Official Site",
                        "snippet": "Acme makes everything",
                        "link": "https://acme.example"
                    },
                    {
                        "title": "Acme News",
                        "snippet": "Acme releases new widget",
                        "link": "https://news.example/acme"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let items = client_for(&server).search("Acme Corp").await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Acme Corp - Official Site");
        assert_eq!(items[1].link, "https://news.example/acme");
    }

    #[tokio::test]
    async fn non_success_status_yields_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {"code": 403, "message": "API key not valid"}
            })))
            .mount(&server)
            .await;

        let items = client_for(&server).search("Acme").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn response_without_items_yields_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "customsearch#search"
            })))
            .mount(&server)
            .await;

        let items = client_for(&server).search("nothing matches").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn empty_query_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let items = client_for(&server).search("").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn caps_results_at_limit() {
        let server = MockServer::start().await;
        let many: Vec<_> = (0..8)
            .map(|i| serde_json::json!({"title": format!("R{i}")}))
            .collect();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": many })))
            .mount(&server)
            .await;

        let items = client_for(&server).search("Acme").await.unwrap();
        assert_eq!(items.len(), RESULT_LIMIT);
        assert_eq!(items[4].title, "R4");
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).search("Acme").await;
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }
}
