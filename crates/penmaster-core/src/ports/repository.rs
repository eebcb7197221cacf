use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostStatus, User};
use crate::error::RepoError;

/// Persistence port for scheduled posts.
///
/// The backing store keeps one ordered post list per user. The schedule
/// generator never touches this port directly; callers pass it existing
/// posts for dedupe context and merge the generated batch back through
/// `save_all`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts owned by a user, in stored order.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Append a batch of posts to the user's list.
    async fn save_all(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError>;

    /// Remove a single post. `RepoError::NotFound` when absent.
    async fn delete(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepoError>;

    /// Transition a post's status. Returns the updated post.
    async fn update_status(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        status: PostStatus,
    ) -> Result<Post, RepoError>;

    /// User ids with at least one stored post. Used by the overdue sweep.
    async fn user_ids(&self) -> Result<Vec<Uuid>, RepoError>;
}

/// Persistence port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn save(&self, user: User) -> Result<User, RepoError>;
}
