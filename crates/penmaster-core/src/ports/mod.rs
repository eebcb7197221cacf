//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod content;
mod repository;
mod webhook;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use content::{ContentError, ContentSource, ImageSource};
pub use repository::{PostRepository, UserRepository};
pub use webhook::{WebhookError, WebhookSink};
