//! Webhook port - push generated batches to an external automation pipeline.

use async_trait::async_trait;

use crate::domain::Post;

/// Sink for freshly generated post batches (n8n or similar).
///
/// Delivery is best-effort. Callers log failures and continue; a webhook
/// outage must never fail schedule generation.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn push(&self, posts: &[Post]) -> Result<(), WebhookError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Webhook request failed: {0}")]
    Request(String),

    #[error("Webhook rejected the payload: status {0}")]
    Rejected(u16),
}
