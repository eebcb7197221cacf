//! Schedule generation handler - the orchestration around the core
//! generator: resolve content variants, dedupe against stored posts,
//! resolve the batch image, generate, persist, push to the webhook.

use actix_web::{HttpResponse, web};

use penmaster_core::schedule::{
    self, PLACEHOLDER_IMAGE, ScheduleRequest, dedupe_variants, existing_fingerprints,
};
use penmaster_shared::dto::{GenerateScheduleRequest, PostResponse, ScheduleResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_FREQUENCY_PER_WEEK: u32 = 20;

/// POST /api/schedule
pub async fn generate(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<GenerateScheduleRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.platforms.is_empty() {
        return Err(AppError::BadRequest(
            "At least one platform is required".to_string(),
        ));
    }
    if req.frequency_per_week == 0 || req.frequency_per_week > MAX_FREQUENCY_PER_WEEK {
        return Err(AppError::BadRequest(format!(
            "frequency_per_week must be between 1 and {MAX_FREQUENCY_PER_WEEK}"
        )));
    }
    if req.topic.trim().is_empty() && req.variants.is_empty() {
        return Err(AppError::BadRequest(
            "Either a topic or explicit variants are required".to_string(),
        ));
    }

    let mut request = ScheduleRequest {
        user_id: identity.user_id,
        start_date: req.start_date,
        end_date: req.end_date,
        frequency_per_week: req.frequency_per_week,
        platforms: req.platforms,
        variants: req.variants,
        image_url: req.image_url,
        link: req.link,
    };

    let target =
        request.frequency_per_week as usize * request.platforms.len() * request.weeks() as usize;

    // Resolve content variants, falling back to templates when the AI
    // upstream is down. The generator cycles when the pool runs short.
    if request.variants.is_empty() {
        request.variants = match state.content.variants(&req.topic, target).await {
            Ok(variants) => variants,
            Err(e) => {
                tracing::warn!(error = %e, "Content source failed, using fallback templates");
                state
                    .fallback_content
                    .variants(&req.topic, target)
                    .await
                    .map_err(|e| AppError::Internal(e.to_string()))?
            }
        };
    }

    // Rework variants that duplicate content the user already has stored.
    let existing = state.posts.find_by_user(identity.user_id).await?;
    let stored_fingerprints =
        existing_fingerprints(existing.iter().map(|p| p.content.as_str()));
    request.variants = dedupe_variants(request.variants, &stored_fingerprints);

    // Resolve the batch image: explicit URL, then the image source, then
    // the placeholder.
    if request.image_url.is_none() {
        if let (Some(images), Some(prompt)) = (&state.images, &req.image_prompt) {
            request.image_url = match images.image_url(prompt).await {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!(error = %e, "Image source failed, using placeholder");
                    Some(PLACEHOLDER_IMAGE.to_string())
                }
            };
        }
    }

    let batch = schedule::generate(&request, &mut rand::rng());
    let saved = state.posts.save_all(batch).await?;

    tracing::info!(
        user_id = %identity.user_id,
        requested = target,
        created = saved.len(),
        "Schedule generated"
    );

    // Best-effort automation push; an outage never fails the request.
    if let Some(webhook) = &state.webhook {
        if let Err(e) = webhook.push(&saved).await {
            tracing::warn!(error = %e, "Webhook push failed");
        }
    }

    Ok(HttpResponse::Created().json(ScheduleResponse {
        requested: target,
        created: saved.len(),
        posts: saved.iter().map(PostResponse::from).collect(),
    }))
}
