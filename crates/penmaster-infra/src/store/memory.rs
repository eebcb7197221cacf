//! In-memory key-value stores, one ordered post list per user.
//!
//! This mirrors the storage model the product started with (a browser
//! key-value store keyed by user id) behind the repository ports, so the
//! rest of the system can be tested without any storage backend.
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use penmaster_core::domain::{Post, PostStatus, User};
use penmaster_core::error::RepoError;
use penmaster_core::ports::{PostRepository, UserRepository};

/// Post store backed by a HashMap with an async RwLock.
#[derive(Default)]
pub struct InMemoryPostStore {
    store: RwLock<HashMap<Uuid, Vec<Post>>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&user_id).cloned().unwrap_or_default())
    }

    async fn save_all(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError> {
        let mut store = self.store.write().await;
        for post in &posts {
            store.entry(post.user_id).or_default().push(post.clone());
        }
        Ok(posts)
    }

    async fn delete(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let posts = store.get_mut(&user_id).ok_or(RepoError::NotFound)?;
        let before = posts.len();
        posts.retain(|p| p.id != post_id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn update_status(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        status: PostStatus,
    ) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let posts = store.get_mut(&user_id).ok_or(RepoError::NotFound)?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(RepoError::NotFound)?;
        post.status = status;
        post.updated_at = chrono::Utc::now();
        Ok(post.clone())
    }

    async fn user_ids(&self) -> Result<Vec<Uuid>, RepoError> {
        let store = self.store.read().await;
        Ok(store.keys().copied().collect())
    }
}

/// User store backed by a HashMap with an async RwLock.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use penmaster_core::domain::Platform;

    fn post_for(user_id: Uuid) -> Post {
        Post::new(user_id, Platform::Facebook, "hi".into(), None, Utc::now())
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let store = InMemoryPostStore::new();
        let user_id = Uuid::new_v4();

        store
            .save_all(vec![post_for(user_id), post_for(user_id)])
            .await
            .unwrap();

        let posts = store.find_by_user(user_id).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(store.find_by_user(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = InMemoryPostStore::new();
        let user_id = Uuid::new_v4();
        let keep = post_for(user_id);
        let gone = post_for(user_id);
        store.save_all(vec![keep.clone(), gone.clone()]).await.unwrap();

        store.delete(user_id, gone.id).await.unwrap();

        let posts = store.find_by_user(user_id).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, keep.id);

        let missing = store.delete(user_id, gone.id).await;
        assert!(matches!(missing, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn update_status_transitions_the_post() {
        let store = InMemoryPostStore::new();
        let user_id = Uuid::new_v4();
        let post = post_for(user_id);
        store.save_all(vec![post.clone()]).await.unwrap();

        let updated = store
            .update_status(user_id, post.id, PostStatus::Posted)
            .await
            .unwrap();

        assert_eq!(updated.status, PostStatus::Posted);
    }

    #[tokio::test]
    async fn users_are_found_by_email_case_insensitively() {
        let store = InMemoryUserStore::new();
        let user = User::new("Owner@Example.com".into(), "hash".into());
        store.save(user.clone()).await.unwrap();

        let found = store.find_by_email("owner@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }
}
