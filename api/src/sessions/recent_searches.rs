use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::Arc;

pub const MAX_RECENT_SEARCHES: usize = 5;

/// Most-recent-first search history per user.
#[derive(Debug, Clone, Default)]
pub struct RecentSearches {
    by_user: Arc<DashMap<String, VecDeque<String>>>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a query. Blank queries are ignored and a repeated query
    /// moves to the front instead of appearing twice.
    pub fn record(&self, user_id: &str, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        let mut history = self.by_user.entry(user_id.to_string()).or_default();
        history.retain(|previous| previous != query);
        history.push_front(query.to_string());
        history.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn list(&self, user_id: &str) -> Vec<String> {
        self.by_user
            .get(user_id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self, user_id: &str) {
        self.by_user.remove(user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_and_capped() {
        let searches = RecentSearches::new();
        for query in ["a", "b", "c", "d", "e", "f"] {
            searches.record("u1", query);
        }
        assert_eq!(searches.list("u1"), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_duplicates_move_to_front() {
        let searches = RecentSearches::new();
        searches.record("u1", "pricing");
        searches.record("u1", "plg");
        searches.record("u1", "  pricing ");
        assert_eq!(searches.list("u1"), vec!["pricing", "plg"]);
    }

    #[test]
    fn test_blank_queries_are_ignored() {
        let searches = RecentSearches::new();
        assert!(!searches.record("u1", "   "));
        assert!(searches.list("u1").is_empty());
    }

    #[test]
    fn test_users_are_independent_and_clear_is_scoped() {
        let searches = RecentSearches::new();
        searches.record("u1", "cac");
        searches.record("u2", "ltv");
        searches.clear("u1");
        assert!(searches.list("u1").is_empty());
        assert_eq!(searches.list("u2"), vec!["ltv"]);
    }
}
