//! # Pen Master Infrastructure
//!
//! Concrete implementations of the ports defined in `penmaster-core`:
//! in-memory stores, AI content/image proxies, auth services, and the
//! n8n webhook sink.
//!
//! ## Feature Flags
//!
//! - `auth` (default) - JWT + Argon2 authentication

pub mod content;
pub mod store;
pub mod webhook;

#[cfg(feature = "auth")]
pub mod auth;

pub use content::{
    ContentApiConfig, HttpContentSource, HttpImageSource, ImageApiConfig, TemplateContentSource,
};
pub use store::{InMemoryPostStore, InMemoryUserStore};
pub use webhook::N8nWebhook;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
