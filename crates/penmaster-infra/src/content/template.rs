//! Deterministic template content source.
//!
//! Used when no AI endpoint is configured, and as the fallback when the
//! upstream call fails. Always returns exactly `count` strings.

use async_trait::async_trait;

use penmaster_core::ports::{ContentError, ContentSource};

const TEMPLATES: [&str; 4] = [
    "{topic}: here's what we've been working on this week.",
    "A quick look at {topic} and why it matters to you.",
    "Behind the scenes: {topic} at our company.",
    "Three things to know about {topic} today.",
];

/// Fallback content source filling static templates with the prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateContentSource;

#[async_trait]
impl ContentSource for TemplateContentSource {
    async fn variants(&self, prompt: &str, count: usize) -> Result<Vec<String>, ContentError> {
        let count = count.max(1);
        Ok((0..count)
            .map(|i| TEMPLATES[i % TEMPLATES.len()].replace("{topic}", prompt))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fills_the_topic_into_each_template() {
        let source = TemplateContentSource;
        let variants = source.variants("spring sale", 3).await.unwrap();

        assert_eq!(variants.len(), 3);
        assert!(variants.iter().all(|v| v.contains("spring sale")));
        assert_ne!(variants[0], variants[1]);
    }

    #[tokio::test]
    async fn zero_count_still_returns_one_variant() {
        let source = TemplateContentSource;
        assert_eq!(source.variants("x", 0).await.unwrap().len(), 1);
    }
}
