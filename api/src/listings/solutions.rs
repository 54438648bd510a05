use crate::models::{Difficulty, Solution};
use crate::query::params::lenient;
use crate::query::predicate::{equals, text_search};
use crate::query::{Comparator, ListQuery, Predicate, PredicateSet, Selection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// GET /problems/{id}/solutions?search=&difficulty=&accepted=
///
/// `problem_id` comes from the path, never from the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionFilters {
    #[serde(skip)]
    pub problem_id: Option<String>,
    pub search: String,
    pub difficulty: Selection<Difficulty>,
    #[serde(deserialize_with = "lenient")]
    pub accepted: Option<bool>,
}

impl SolutionFilters {
    pub fn for_problem(mut self, problem_id: impl Into<String>) -> Self {
        self.problem_id = Some(problem_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolutionSort {
    /// Accepted first, then by upvotes.
    #[default]
    Top,
    Recent,
    MostUpvoted,
    MostHelpful,
}

impl Comparator<Solution> for SolutionSort {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        match self {
            SolutionSort::Top => b
                .is_accepted
                .cmp(&a.is_accepted)
                .then(b.upvotes.cmp(&a.upvotes)),
            SolutionSort::Recent => b.created_at.cmp(&a.created_at),
            SolutionSort::MostUpvoted => b.upvotes.cmp(&a.upvotes),
            SolutionSort::MostHelpful => b.helpful_count.cmp(&a.helpful_count),
        }
    }
}

impl ListQuery for SolutionFilters {
    type Record = Solution;
    type Sort = SolutionSort;

    fn predicates(&self) -> PredicateSet<'_, Solution> {
        let scope = self.problem_id.as_deref().map(|problem_id| {
            Box::new(move |s: &Solution| s.problem_id == problem_id)
                as Predicate<'_, Solution>
        });
        let accepted = self.accepted.map(|wanted| {
            Box::new(move |s: &Solution| s.is_accepted == wanted)
                as Predicate<'_, Solution>
        });

        PredicateSet::new()
            .and_maybe(scope)
            .and_maybe(text_search(&self.search))
            .and_maybe(equals(&self.difficulty, |s: &Solution| &s.implementation.difficulty))
            .and_maybe(accepted)
    }
}
