//! HTTP backend for the semantic memory service.
//!
//! `POST {base_url}{search_path}` with `{query, limit, threshold}`,
//! answered by `{results: [{id, content, similarity}]}`.

use std::time::Duration;

use async_trait::async_trait;
use atelier_core::config::MemoryConfig;
use atelier_core::errors::MemoryError;
use atelier_core::traits::{IMemoryBackend, SearchRequest};
use atelier_core::RetrievalResult;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RetrievalResult>,
}

/// reqwest-based memory backend.
#[derive(Debug, Clone)]
pub struct HttpMemoryBackend {
    client: reqwest::Client,
    search_url: String,
    health_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpMemoryBackend {
    /// Create a backend from the `[memory]` config section.
    pub fn new(config: &MemoryConfig) -> Result<Self, MemoryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(|e| MemoryError::Transport {
                reason: format!("client build failed: {e}"),
            })?;

        Ok(Self {
            client,
            search_url: config.search_url(),
            health_url: format!("{}/health", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
        })
    }

    /// Check if the memory service is reachable. Never fails.
    pub async fn health_check(&self) -> bool {
        let mut req = self.client.get(&self.health_url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }

        match req.send().await {
            Ok(resp) if resp.status().is_success() => {
                debug!(url = %self.health_url, "memory health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "memory health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "memory service unreachable");
                false
            }
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> MemoryError {
        if e.is_timeout() {
            MemoryError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            MemoryError::Transport {
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl IMemoryBackend for HttpMemoryBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RetrievalResult>, MemoryError> {
        let mut req = self.client.post(&self.search_url).json(request);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MemoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| MemoryError::Decode {
                reason: e.to_string(),
            })?;

        debug!(
            query = %request.query,
            results = parsed.results.len(),
            "memory search returned"
        );
        Ok(parsed.results)
    }

    fn name(&self) -> &str {
        "http"
    }
}
