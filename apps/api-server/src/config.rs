//! Application configuration loaded from environment variables.

use std::env;

use penmaster_infra::{ContentApiConfig, ImageApiConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// AI text-generation endpoint; template fallback when unset.
    pub content_api: Option<ContentApiConfig>,
    /// AI image endpoint; placeholder reference when unset.
    pub image_api: Option<ImageApiConfig>,
    /// n8n automation webhook; push skipped when unset.
    pub webhook_url: Option<String>,
    /// Cron expression for the overdue sweep.
    pub sweep_schedule: String,
    pub sweep_enabled: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let api_key = env::var("AI_API_KEY").ok();

        let content_api = env::var("CONTENT_API_URL").ok().map(|endpoint| ContentApiConfig {
            endpoint,
            api_key: api_key.clone(),
        });

        let image_api = env::var("IMAGE_API_URL").ok().map(|endpoint| ImageApiConfig {
            endpoint,
            api_key: api_key.clone(),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            content_api,
            image_api,
            webhook_url: env::var("N8N_WEBHOOK_URL").ok(),
            sweep_schedule: env::var("SWEEP_SCHEDULE")
                .unwrap_or_else(|_| "0 0 * * * *".to_string()),
            sweep_enabled: env::var("SWEEP_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        // Env-dependent test kept to keys this suite does not set elsewhere.
        let config = AppConfig::from_env();
        assert!(!config.host.is_empty());
        assert!(config.port > 0);
        assert_eq!(config.sweep_schedule, "0 0 * * * *");
    }
}
