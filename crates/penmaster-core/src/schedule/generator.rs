//! Schedule generation - distributes a campaign's posts across a date range.
//!
//! Given a campaign window, a weekly frequency, a platform set and a pool of
//! content variants, produces a deduplicated batch of dated, platform-tagged
//! posts. Pure computation: no storage, no network, no clock beyond the
//! entity timestamps. Randomness (posting times) comes through an injected
//! `Rng` so tests can seed it.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::fingerprint::fingerprint;
use crate::domain::{DEFAULT_WEEKDAYS, Platform, Post};

/// Image reference used when a batch has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder-post.png";

/// Everything the generator needs for one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Intended posts per platform per week. Callers constrain the range.
    pub frequency_per_week: u32,
    pub platforms: Vec<Platform>,
    /// Candidate content strings, reused cyclically when short.
    pub variants: Vec<String>,
    pub image_url: Option<String>,
    /// Optional URL appended to each post body on a new paragraph.
    pub link: Option<String>,
}

impl ScheduleRequest {
    /// Campaign length in days. An inverted range clamps to a one-day
    /// window anchored at `start_date` rather than failing.
    pub fn total_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(1)
    }

    /// Campaign length in whole weeks, minimum one.
    pub fn weeks(&self) -> i64 {
        ((self.total_days() + 6) / 7).max(1)
    }

    fn effective_end(&self) -> NaiveDate {
        self.end_date.max(self.start_date)
    }

    /// Platforms as a set, preserving first-seen order.
    fn platform_set(&self) -> Vec<Platform> {
        let mut seen = HashSet::new();
        self.platforms
            .iter()
            .copied()
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

/// Generate a deduplicated post batch for the request.
///
/// Returns an empty batch when `platforms` or `variants` is empty; empty
/// input sets are a caller-side validation concern, not an error here.
pub fn generate<R: Rng>(request: &ScheduleRequest, rng: &mut R) -> Vec<Post> {
    let platforms = request.platform_set();
    if platforms.is_empty() || request.variants.is_empty() {
        return Vec::new();
    }

    let total_target = request.frequency_per_week as usize * platforms.len() * request.weeks() as usize;
    if total_target == 0 {
        return Vec::new();
    }
    let per_platform = total_target.div_ceil(platforms.len());

    // Skeleton: (platform, timestamp) pairs across all platforms, sorted
    // and capped at the originally requested total.
    let mut skeleton = Vec::with_capacity(per_platform * platforms.len());
    for platform in &platforms {
        for date in select_dates(request, *platform, per_platform) {
            let hour: u32 = rng.random_range(9..=18);
            let minute: u32 = rng.random_range(0..59);
            let slot = Utc.from_utc_datetime(
                &date
                    .and_hms_opt(hour, minute, 0)
                    .expect("hour and minute are range-checked"),
            );
            skeleton.push((*platform, slot));
        }
    }
    skeleton.sort_by_key(|(_, slot)| *slot);
    skeleton.truncate(total_target);

    // Attach content, cycling through the variant pool in skeleton order.
    let image_url = request
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let mut posts = Vec::with_capacity(skeleton.len());
    for (i, (platform, slot)) in skeleton.into_iter().enumerate() {
        let mut content = request.variants[i % request.variants.len()].clone();
        if let Some(link) = &request.link {
            content.push_str("\n\n");
            content.push_str(link);
        }
        posts.push(Post::new(
            request.user_id,
            platform,
            content,
            Some(image_url.clone()),
            slot,
        ));
    }

    dedupe(posts)
}

/// Candidate days for a platform: every in-range date on an allowed
/// weekday. Falls back to the full window when the policy matches nothing
/// in range.
fn candidate_days(request: &ScheduleRequest, platform: Platform) -> Vec<NaiveDate> {
    let allowed = platform.allowed_weekdays();
    let allowed: &[chrono::Weekday] = if allowed.is_empty() {
        &DEFAULT_WEEKDAYS
    } else {
        allowed
    };

    let days: Vec<NaiveDate> = request
        .start_date
        .iter_days()
        .take(request.total_days() as usize)
        .take_while(|d| *d <= request.effective_end())
        .filter(|d| allowed.contains(&d.weekday()))
        .collect();

    if days.is_empty() {
        // Pathological window/policy combination: spread over every day.
        request
            .start_date
            .iter_days()
            .take(request.total_days() as usize)
            .collect()
    } else {
        days
    }
}

/// Pick `count` dates from the candidates by evenly-spaced index sampling,
/// spreading selections across the whole range instead of clustering at
/// the start.
fn select_dates(request: &ScheduleRequest, platform: Platform, count: usize) -> Vec<NaiveDate> {
    let candidates = candidate_days(request, platform);
    (0..count)
        .map(|i| candidates[i * candidates.len() / count])
        .collect()
}

/// Drop posts that repeat `(platform, calendar-day, fingerprint)`, keeping
/// the first occurrence. No re-placement of dropped slots.
fn dedupe(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    posts
        .into_iter()
        .filter(|post| {
            seen.insert((
                post.platform,
                post.scheduled_at.date_naive(),
                fingerprint(&post.content),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostStatus;
    use chrono::{Timelike, Weekday};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn request() -> ScheduleRequest {
        ScheduleRequest {
            user_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            frequency_per_week: 3,
            platforms: vec![Platform::Facebook, Platform::Instagram],
            variants: vec!["Post A".into(), "Post B".into()],
            image_url: None,
            link: None,
        }
    }

    #[test]
    fn one_week_two_platform_scenario() {
        let req = request();
        let posts = generate(&req, &mut StdRng::seed_from_u64(7));

        // 3 per week x 2 platforms x 1 week
        assert_eq!(posts.len(), 6);

        for post in &posts {
            assert_eq!(post.status, PostStatus::Scheduled);
            match post.platform {
                Platform::Facebook => assert!(matches!(
                    post.scheduled_at.date_naive().day(),
                    1 | 3 | 5
                )),
                Platform::Instagram => assert!(matches!(
                    post.scheduled_at.date_naive().day(),
                    2 | 4 | 6
                )),
                Platform::LinkedIn => panic!("linkedin was not requested"),
            }
        }

        // Content cycles through the variants in date order.
        assert_eq!(posts[0].content, "Post A");
        assert_eq!(posts[1].content, "Post B");
        assert_eq!(posts[2].content, "Post A");
    }

    #[test]
    fn scheduled_times_stay_in_bounds() {
        let mut req = request();
        req.end_date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        req.platforms = vec![
            Platform::Facebook,
            Platform::Instagram,
            Platform::LinkedIn,
        ];
        let posts = generate(&req, &mut StdRng::seed_from_u64(99));

        assert!(!posts.is_empty());
        for post in &posts {
            let day = post.scheduled_at.date_naive();
            assert!(day >= req.start_date && day <= req.end_date);
            assert!((9..=18).contains(&post.scheduled_at.hour()));
            assert!(post.scheduled_at.minute() < 59);
        }
    }

    #[test]
    fn weekday_policy_is_respected() {
        let mut req = request();
        req.end_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        req.platforms = vec![Platform::LinkedIn];
        let posts = generate(&req, &mut StdRng::seed_from_u64(3));

        for post in &posts {
            assert!(matches!(
                post.scheduled_at.date_naive().weekday(),
                Weekday::Tue | Weekday::Wed | Weekday::Thu
            ));
        }
    }

    #[test]
    fn total_never_exceeds_target() {
        let mut req = request();
        req.frequency_per_week = 10;
        req.variants = vec!["Only one".into()];
        let posts = generate(&req, &mut StdRng::seed_from_u64(1));

        // 10 x 2 platforms x 1 week, dedup can only shrink
        assert!(posts.len() <= 20);
    }

    #[test]
    fn no_duplicate_platform_day_content_tuples() {
        let mut req = request();
        req.frequency_per_week = 12;
        req.variants = vec!["Same text".into()];
        let posts = generate(&req, &mut StdRng::seed_from_u64(5));

        let mut seen = HashSet::new();
        for post in &posts {
            assert!(seen.insert((
                post.platform,
                post.scheduled_at.date_naive(),
                fingerprint(&post.content)
            )));
        }
    }

    #[test]
    fn skeleton_is_deterministic_under_a_fixed_seed() {
        let req = request();
        let a = generate(&req, &mut StdRng::seed_from_u64(42));
        let b = generate(&req, &mut StdRng::seed_from_u64(42));

        let days_a: Vec<_> = a
            .iter()
            .map(|p| (p.platform, p.scheduled_at.date_naive()))
            .collect();
        let days_b: Vec<_> = b
            .iter()
            .map(|p| (p.platform, p.scheduled_at.date_naive()))
            .collect();
        assert_eq!(days_a, days_b);
    }

    #[test]
    fn inverted_range_clamps_to_one_day() {
        let mut req = request();
        req.end_date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let posts = generate(&req, &mut StdRng::seed_from_u64(11));

        assert_eq!(req.total_days(), 1);
        for post in &posts {
            assert_eq!(post.scheduled_at.date_naive(), req.start_date);
        }
    }

    #[test]
    fn empty_variants_yield_empty_batch() {
        let mut req = request();
        req.variants = Vec::new();
        assert!(generate(&req, &mut StdRng::seed_from_u64(0)).is_empty());
    }

    #[test]
    fn empty_platforms_yield_empty_batch() {
        let mut req = request();
        req.platforms = Vec::new();
        assert!(generate(&req, &mut StdRng::seed_from_u64(0)).is_empty());
    }

    #[test]
    fn duplicate_platforms_collapse_to_a_set() {
        let mut req = request();
        req.platforms = vec![Platform::Facebook, Platform::Facebook];
        let posts = generate(&req, &mut StdRng::seed_from_u64(2));

        assert!(posts.iter().all(|p| p.platform == Platform::Facebook));
        // One real platform, so the target is freq x 1 x weeks.
        assert!(posts.len() <= 3);
    }

    #[test]
    fn link_is_appended_as_a_new_paragraph() {
        let mut req = request();
        req.link = Some("https://example.com/offer".into());
        let posts = generate(&req, &mut StdRng::seed_from_u64(8));

        assert!(!posts.is_empty());
        for post in &posts {
            assert!(post.content.ends_with("\n\nhttps://example.com/offer"));
        }
    }

    #[test]
    fn missing_image_defaults_to_placeholder() {
        let posts = generate(&request(), &mut StdRng::seed_from_u64(4));
        assert!(
            posts
                .iter()
                .all(|p| p.image_url.as_deref() == Some(PLACEHOLDER_IMAGE))
        );
    }

    #[test]
    fn weekday_fallback_spreads_across_window() {
        // Two-day window containing no Facebook posting days (Sat-Sun).
        let mut req = request();
        req.start_date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        req.end_date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        req.platforms = vec![Platform::Facebook];
        let posts = generate(&req, &mut StdRng::seed_from_u64(6));

        assert!(!posts.is_empty());
        for post in &posts {
            let day = post.scheduled_at.date_naive();
            assert!(day >= req.start_date && day <= req.end_date);
        }
    }
}
