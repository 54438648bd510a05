use crate::config::Config;
use crate::data::RecordStore;
use crate::sessions::{EngagementOverlay, NotificationInbox, QuizAttempts, RecentSearches};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// The Record Store is immutable and shared as-is. Everything a user can
/// change lives in the session stores, each an `Arc<DashMap>` keyed by
/// user id.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub config: Arc<Config>,
    pub recent_searches: RecentSearches,
    pub notifications: NotificationInbox,
    pub engagement: EngagementOverlay,
    pub attempts: QuizAttempts,
    pub write_limiter: Arc<DefaultDirectRateLimiter>,
}

impl AppState {
    pub fn new(store: RecordStore, config: Config) -> Self {
        let rate = NonZeroU32::new(config.write_rate_per_second).unwrap_or(NonZeroU32::MIN);
        let notifications = NotificationInbox::new(store.notifications.clone());

        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            recent_searches: RecentSearches::new(),
            notifications,
            engagement: EngagementOverlay::new(),
            attempts: QuizAttempts::new(),
            write_limiter: Arc::new(RateLimiter::direct(Quota::per_second(rate))),
        }
    }
}
