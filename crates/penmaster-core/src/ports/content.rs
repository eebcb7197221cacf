//! Content and image source ports - the AI collaborators.

use async_trait::async_trait;

/// Supplies candidate text variants for a batch of posts.
///
/// Contract: given a prompt and a desired count, returns at least one
/// string (possibly fewer than requested; the caller cycles to pad).
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn variants(&self, prompt: &str, count: usize) -> Result<Vec<String>, ContentError>;
}

/// Supplies a single image reference applied uniformly to a batch.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn image_url(&self, prompt: &str) -> Result<String, ContentError>;
}

/// Errors from the content/image collaborators. The caller substitutes
/// deterministic fallbacks; these never abort schedule generation.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream returned an unusable response: {0}")]
    BadResponse(String),

    #[error("No content source configured")]
    NotConfigured,
}
