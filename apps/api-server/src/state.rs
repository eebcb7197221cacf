//! Application state - shared across all handlers.

use std::sync::Arc;

use penmaster_core::ports::{
    ContentSource, ImageSource, PasswordService, PostRepository, TokenService, UserRepository,
    WebhookSink,
};
use penmaster_infra::{
    Argon2PasswordService, HttpContentSource, HttpImageSource, InMemoryPostStore,
    InMemoryUserStore, JwtTokenService, N8nWebhook, TemplateContentSource,
};

use crate::config::AppConfig;

/// Shared application state, everything behind port trait objects.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub content: Arc<dyn ContentSource>,
    /// Fallback content source used when the primary upstream fails.
    pub fallback_content: Arc<dyn ContentSource>,
    pub images: Option<Arc<dyn ImageSource>>,
    pub webhook: Option<Arc<dyn WebhookSink>>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Wire the adapters selected by configuration.
    pub fn new(config: &AppConfig) -> Self {
        let fallback_content: Arc<dyn ContentSource> = Arc::new(TemplateContentSource);

        let content: Arc<dyn ContentSource> = match &config.content_api {
            Some(api) => Arc::new(HttpContentSource::new(api.clone())),
            None => {
                tracing::info!("CONTENT_API_URL not set, using template content source");
                fallback_content.clone()
            }
        };

        let images: Option<Arc<dyn ImageSource>> = config
            .image_api
            .as_ref()
            .map(|api| Arc::new(HttpImageSource::new(api.clone())) as Arc<dyn ImageSource>);

        let webhook: Option<Arc<dyn WebhookSink>> = config
            .webhook_url
            .as_ref()
            .map(|url| Arc::new(N8nWebhook::new(url.clone())) as Arc<dyn WebhookSink>);
        if webhook.is_none() {
            tracing::info!("N8N_WEBHOOK_URL not set, webhook push disabled");
        }

        tracing::info!("Application state initialized");

        Self {
            users: Arc::new(InMemoryUserStore::new()),
            posts: Arc::new(InMemoryPostStore::new()),
            content,
            fallback_content,
            images,
            webhook,
            tokens: Arc::new(JwtTokenService::from_env()),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
