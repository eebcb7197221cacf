//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use penmaster_core::domain::{Platform, Post, PostStatus};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Company profile name, captured during onboarding.
    #[serde(default)]
    pub company: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Response containing a user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub company: Option<String>,
}

/// Request to generate a schedule batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub frequency_per_week: u32,
    pub platforms: Vec<Platform>,
    /// Topic fed to the content source.
    pub topic: String,
    /// Pre-written variants; when empty, the content source supplies them.
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Prompt for the image source when no `image_url` is given.
    #[serde(default)]
    pub image_prompt: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// One scheduled post, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub platform: Platform,
    pub content: String,
    pub image_url: Option<String>,
    pub scheduled_at: String,
    pub status: PostStatus,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            platform: post.platform,
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            scheduled_at: post.scheduled_at.to_rfc3339(),
            status: post.status,
        }
    }
}

/// Batch result of a schedule generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub requested: usize,
    pub created: usize,
    pub posts: Vec<PostResponse>,
}
