//! HTTP-backed image source - thin proxy over an AI image API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use penmaster_core::ports::{ContentError, ImageSource};

#[derive(Debug, Clone)]
pub struct ImageApiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct ImageResponse {
    url: String,
}

/// Image source that POSTs a prompt and expects `{ "url": ... }` back.
/// Callers substitute the placeholder reference on any failure.
pub struct HttpImageSource {
    client: reqwest::Client,
    config: ImageApiConfig,
}

impl HttpImageSource {
    pub fn new(config: ImageApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn image_url(&self, prompt: &str) -> Result<String, ContentError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&ImageRequest { prompt });
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

        let body: ImageResponse = response
            .json()
            .await
            .map_err(|e| ContentError::BadResponse(e.to_string()))?;

        Ok(body.url)
    }
}
