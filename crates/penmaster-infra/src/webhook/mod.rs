//! n8n webhook sink - pushes generated batches to an automation pipeline.

use async_trait::async_trait;
use serde::Serialize;

use penmaster_core::domain::Post;
use penmaster_core::ports::{WebhookError, WebhookSink};

#[derive(Serialize)]
struct WebhookPayload<'a> {
    event: &'static str,
    posts: &'a [Post],
}

/// Posts the generated batch as JSON to a configured n8n webhook URL.
pub struct N8nWebhook {
    client: reqwest::Client,
    url: String,
}

impl N8nWebhook {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl WebhookSink for N8nWebhook {
    async fn push(&self, posts: &[Post]) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload {
                event: "posts.scheduled",
                posts,
            })
            .send()
            .await
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WebhookError::Rejected(response.status().as_u16()));
        }

        tracing::debug!(count = posts.len(), "Batch pushed to webhook");
        Ok(())
    }
}
