use crate::models::{Role, User};
use crate::query::params::lenient_enum;
use crate::query::predicate::{equals, text_search};
use crate::query::{Comparator, ListQuery, PredicateSet, Selection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// GET /leaderboard?board=&search=&role=&limit=
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardFilters {
    pub search: String,
    pub role: Selection<Role>,
}

/// Which leaderboard tab is ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Board {
    #[default]
    TopSolvers,
    RisingStars,
    TopContributors,
}

/// `?board=`, falling back to top solvers.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BoardParam {
    #[serde(default, deserialize_with = "lenient_enum")]
    pub board: Board,
}

impl Comparator<User> for Board {
    fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            Board::TopSolvers => b.stats.accepted_solutions.cmp(&a.stats.accepted_solutions),
            Board::RisingStars => b.stats.upvotes_received.cmp(&a.stats.upvotes_received),
            Board::TopContributors => b.reputation.cmp(&a.reputation),
        }
    }
}

impl ListQuery for LeaderboardFilters {
    type Record = User;
    type Sort = Board;

    fn predicates(&self) -> PredicateSet<'_, User> {
        PredicateSet::new()
            .and_maybe(text_search(&self.search))
            .and_maybe(equals(&self.role, |u: &User| &u.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RecordStore;
    use crate::query::{ListView, truncate};

    fn usernames(results: &[&User]) -> Vec<String> {
        results.iter().map(|u| u.username.clone()).collect()
    }

    #[test]
    fn test_boards_rank_by_their_stat() {
        let store = RecordStore::load_seed().unwrap();
        let mut view: ListView<LeaderboardFilters> = ListView::new(&store.users);

        assert_eq!(
            usernames(&truncate(view.results(), 3)),
            vec!["alex_kumar", "sarah_chen", "mike_rodriguez"]
        );

        view.set_sort(Board::TopContributors);
        assert_eq!(usernames(&view.results())[0], "alex_kumar");
        assert_eq!(usernames(&view.results())[5], "gtm_match_team");
    }

    #[test]
    fn test_search_matches_name_or_username() {
        let store = RecordStore::load_seed().unwrap();
        let view: ListView<LeaderboardFilters> =
            ListView::new(&store.users).with_filters(LeaderboardFilters {
                search: "PARK".into(),
                ..Default::default()
            });
        assert_eq!(usernames(&view.results()), vec!["emily_park"]);
    }
}
