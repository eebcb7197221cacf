use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Platform;

/// Lifecycle of a scheduled post.
///
/// Starts at `Scheduled`. Moves to `Posted` when an external system confirms
/// publication, or to `Failed` when the scheduled time has passed by more
/// than one day without confirmation (overdue sweep).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Scheduled,
    Posted,
    Failed,
}

/// Post entity - one dated, platform-tagged unit of scheduled content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub platform: Platform,
    pub content: String,
    pub image_url: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new scheduled post.
    pub fn new(
        user_id: Uuid,
        platform: Platform,
        content: String,
        image_url: Option<String>,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            platform,
            content,
            image_url,
            scheduled_at,
            status: PostStatus::Scheduled,
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the post is still `Scheduled` and its slot passed more than
    /// one day ago.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == PostStatus::Scheduled && self.scheduled_at + Duration::days(1) < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_post_starts_scheduled() {
        let post = Post::new(
            Uuid::new_v4(),
            Platform::Facebook,
            "hello".into(),
            None,
            Utc::now(),
        );
        assert_eq!(post.status, PostStatus::Scheduled);
    }

    #[test]
    fn overdue_requires_more_than_one_day() {
        let slot = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut post = Post::new(Uuid::new_v4(), Platform::Instagram, "x".into(), None, slot);

        assert!(!post.is_overdue(slot + Duration::hours(23)));
        assert!(post.is_overdue(slot + Duration::hours(25)));

        post.status = PostStatus::Posted;
        assert!(!post.is_overdue(slot + Duration::days(30)));
    }
}
