//! Post management handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use penmaster_core::domain::PostStatus;
use penmaster_shared::dto::PostResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts - the user's posts sorted by scheduled time.
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let mut posts = state.posts.find_by_user(identity.user_id).await?;
    posts.sort_by_key(|p| p.scheduled_at);

    let body: Vec<PostResponse> = posts.iter().map(PostResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    state.posts.delete(identity.user_id, post_id).await?;

    tracing::info!(user_id = %identity.user_id, %post_id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/posts/{id}/posted - external "mark as posted" confirmation.
pub async fn mark_posted(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = state
        .posts
        .update_status(identity.user_id, post_id, PostStatus::Posted)
        .await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(&post)))
}
