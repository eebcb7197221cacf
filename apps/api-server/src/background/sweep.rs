//! Overdue sweep job - fails scheduled posts whose slot passed more than
//! a day ago without being marked posted.

use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use penmaster_core::domain::PostStatus;

use crate::state::AppState;

/// Run one sweep pass over every stored user.
pub async fn run_sweep(state: &AppState) {
    let now = Utc::now();

    let user_ids = match state.posts.user_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!(error = %e, "Sweep could not list users");
            return;
        }
    };

    let mut swept = 0usize;
    for user_id in user_ids {
        let posts = match state.posts.find_by_user(user_id).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!(%user_id, error = %e, "Sweep could not load posts");
                continue;
            }
        };

        for post in posts.iter().filter(|p| p.is_overdue(now)) {
            match state
                .posts
                .update_status(user_id, post.id, PostStatus::Failed)
                .await
            {
                Ok(_) => swept += 1,
                Err(e) => {
                    tracing::error!(post_id = %post.id, error = %e, "Sweep transition failed")
                }
            }
        }
    }

    if swept > 0 {
        tracing::info!(swept, "Overdue posts marked failed");
    }
}

/// Register the sweep as a cron job and start the scheduler.
pub async fn start(state: AppState, schedule: &str) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let state = state.clone();
        Box::pin(async move {
            run_sweep(&state).await;
        })
    })?;
    let id = scheduler.add(job).await?;

    scheduler.start().await?;
    tracing::info!(schedule = %schedule, job_id = %id, "Overdue sweep scheduled");
    Ok(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use chrono::Duration;
    use penmaster_core::domain::{Platform, Post};
    use uuid::Uuid;

    #[tokio::test]
    async fn sweep_fails_only_overdue_posts() {
        let state = AppState::new(&AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            content_api: None,
            image_api: None,
            webhook_url: None,
            sweep_schedule: "0 0 * * * *".into(),
            sweep_enabled: true,
        });

        let user_id = Uuid::new_v4();
        let overdue = Post::new(
            user_id,
            Platform::Facebook,
            "late".into(),
            None,
            Utc::now() - Duration::days(3),
        );
        let upcoming = Post::new(
            user_id,
            Platform::Instagram,
            "soon".into(),
            None,
            Utc::now() + Duration::days(1),
        );
        state
            .posts
            .save_all(vec![overdue.clone(), upcoming.clone()])
            .await
            .unwrap();

        run_sweep(&state).await;

        let posts = state.posts.find_by_user(user_id).await.unwrap();
        let by_id = |id| posts.iter().find(|p| p.id == id).unwrap();
        assert_eq!(by_id(overdue.id).status, PostStatus::Failed);
        assert_eq!(by_id(upcoming.id).status, PostStatus::Scheduled);
    }
}
