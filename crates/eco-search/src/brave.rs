//! Brave Web Search API client.

use std::time::Duration;

use eco_config::SearchConfig;

use crate::{SearchError, SearchHit, SearchProvider, http::check_response};

/// Largest page size the Brave web endpoint accepts.
const MAX_COUNT: usize = 20;

#[derive(serde::Deserialize)]
struct BraveResponse {
    #[serde(default)]
    web: Option<WebResults>,
}

#[derive(serde::Deserialize)]
struct WebResults {
    #[serde(default)]
    results: Vec<WebResult>,
}

#[derive(serde::Deserialize)]
struct WebResult {
    title: String,
    url: String,
    #[serde(default)]
    description: String,
}

impl From<WebResult> for SearchHit {
    fn from(result: WebResult) -> Self {
        Self {
            title: result.title,
            url: result.url,
            description: result.description,
        }
    }
}

/// HTTP client for the Brave Web Search API.
#[derive(Clone)]
pub struct BraveSearch {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl std::fmt::Debug for BraveSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveSearch")
            .field("endpoint", &self.endpoint)
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

impl BraveSearch {
    /// Build a client from the `[search]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ecolens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            endpoint: config.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn request_url(&self, query: &str, limit: usize) -> String {
        format!(
            "{}?q={}&count={}",
            self.endpoint,
            urlencoding::encode(query),
            limit.clamp(1, MAX_COUNT)
        )
    }
}

impl SearchProvider for BraveSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
        if !self.is_configured() {
            return Err(SearchError::NotConfigured);
        }

        let url = self.request_url(query, limit);
        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        let data: BraveResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        let mut hits: Vec<SearchHit> = data
            .web
            .map(|web| web.results)
            .unwrap_or_default()
            .into_iter()
            .map(SearchHit::from)
            .collect();
        hits.truncate(limit);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "type": "search",
        "web": {
            "type": "search",
            "results": [
                {
                    "title": "LCA of bamboo textiles",
                    "url": "https://example.org/bamboo.pdf",
                    "description": "Cradle-to-gate assessment of bamboo viscose."
                },
                {
                    "title": "Cotton water footprint",
                    "url": "https://example.org/cotton.pdf"
                }
            ]
        }
    }"#;

    fn client(api_key: &str) -> BraveSearch {
        BraveSearch::from_config(&SearchConfig {
            api_key: api_key.into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn parse_web_results() {
        let data: BraveResponse = serde_json::from_str(FIXTURE).unwrap();
        let hits: Vec<SearchHit> = data
            .web
            .unwrap()
            .results
            .into_iter()
            .map(SearchHit::from)
            .collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "LCA of bamboo textiles");
        assert_eq!(hits[0].url, "https://example.org/bamboo.pdf");
        assert!(hits[1].description.is_empty());
    }

    #[test]
    fn missing_web_section_is_empty() {
        let data: BraveResponse = serde_json::from_str(r#"{"type":"search"}"#).unwrap();
        assert!(data.web.is_none());
    }

    #[test]
    fn request_url_encodes_query_and_clamps_count() {
        let brave = client("token");
        let url = brave.request_url("bamboo vs cotton filetype:pdf", 50);
        assert_eq!(
            url,
            "https://api.search.brave.com/res/v1/web/search?q=bamboo%20vs%20cotton%20filetype%3Apdf&count=20"
        );
    }

    #[test]
    fn debug_hides_key() {
        let debug = format!("{:?}", client("very-secret"));
        assert!(!debug.contains("very-secret"));
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let err = client("").search("anything", 5).await.unwrap_err();
        assert!(matches!(err, SearchError::NotConfigured));
    }
}
