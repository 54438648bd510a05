use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementTarget {
    Problem,
    Solution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Upvote,
    Bookmark,
    FacingThisToo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReactionFlags {
    pub upvoted: bool,
    pub bookmarked: bool,
    pub facing_this_too: bool,
}

impl ReactionFlags {
    fn flag_mut(&mut self, reaction: Reaction) -> &mut bool {
        match reaction {
            Reaction::Upvote => &mut self.upvoted,
            Reaction::Bookmark => &mut self.bookmarked,
            Reaction::FacingThisToo => &mut self.facing_this_too,
        }
    }

    pub fn is_set(&self, reaction: Reaction) -> bool {
        match reaction {
            Reaction::Upvote => self.upvoted,
            Reaction::Bookmark => self.bookmarked,
            Reaction::FacingThisToo => self.facing_this_too,
        }
    }
}

type OverlayKey = (String, EngagementTarget, String);

#[derive(Debug, Clone, Copy, Default)]
struct OverlayEntry {
    flags: ReactionFlags,
    /// Reactions that have been switched on at least once.
    activated: ReactionFlags,
}

/// Outcome of one toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    pub active: bool,
    /// True only the first time this user switches this reaction on.
    pub first_activation: bool,
}

/// Per-user reactions over the seed counters.
///
/// The seed record is never touched; a displayed counter is the seed value
/// plus one when the caller's flag is set.
#[derive(Debug, Clone, Default)]
pub struct EngagementOverlay {
    entries: Arc<DashMap<OverlayKey, OverlayEntry>>,
}

impl EngagementOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one reaction and return its new state.
    pub fn toggle(
        &self,
        user_id: &str,
        target: EngagementTarget,
        target_id: &str,
        reaction: Reaction,
    ) -> Toggled {
        let key = (user_id.to_string(), target, target_id.to_string());
        let mut entry = self.entries.entry(key).or_default();

        let flag = entry.flags.flag_mut(reaction);
        *flag = !*flag;
        let active = *flag;

        let seen = entry.activated.flag_mut(reaction);
        let first_activation = active && !*seen;
        *seen |= active;

        Toggled {
            active,
            first_activation,
        }
    }

    pub fn flags(&self, user_id: &str, target: EngagementTarget, target_id: &str) -> ReactionFlags {
        let key = (user_id.to_string(), target, target_id.to_string());
        self.entries
            .get(&key)
            .map(|entry| entry.flags)
            .unwrap_or_default()
    }
}

/// Seed counter as seen by a user whose flag is `active`.
pub fn displayed_count(seed_count: u32, active: bool) -> u32 {
    seed_count + u32::from(active)
}
