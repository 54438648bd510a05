//! Per-user mutable state layered over the read-only Record Store.
//!
//! Every store is a cheap `Clone` handle around an `Arc<DashMap>` keyed by
//! user id, so handlers for different users never contend on one lock.
//! Nothing here is written to disk.

pub mod attempts;
pub mod engagement;
pub mod notifications;
pub mod recent_searches;

pub use attempts::QuizAttempts;
pub use engagement::{EngagementOverlay, EngagementTarget, Reaction, ReactionFlags, Toggled};
pub use notifications::NotificationInbox;
pub use recent_searches::{MAX_RECENT_SEARCHES, RecentSearches};
