//! HTTP-backed content source - thin proxy over an AI text-generation API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use penmaster_core::ports::{ContentError, ContentSource};

/// Configuration for the upstream text-generation endpoint.
#[derive(Debug, Clone)]
pub struct ContentApiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

#[derive(Serialize)]
struct VariantsRequest<'a> {
    prompt: &'a str,
    count: usize,
}

#[derive(Deserialize)]
struct VariantsResponse {
    variants: Vec<String>,
}

/// Content source that POSTs the prompt and desired count upstream and
/// expects a JSON list of variants back.
pub struct HttpContentSource {
    client: reqwest::Client,
    config: ContentApiConfig,
}

impl HttpContentSource {
    pub fn new(config: ContentApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn variants(&self, prompt: &str, count: usize) -> Result<Vec<String>, ContentError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&VariantsRequest { prompt, count });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ContentError::Upstream(format!(
                "status {}",
                response.status()
            )));
        }

        let body: VariantsResponse = response
            .json()
            .await
            .map_err(|e| ContentError::BadResponse(e.to_string()))?;

        if body.variants.is_empty() {
            return Err(ContentError::BadResponse("empty variant list".into()));
        }

        tracing::debug!(count = body.variants.len(), "Content variants received");
        Ok(body.variants)
    }
}
