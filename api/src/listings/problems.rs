use crate::models::{Category, CompanyStage, GtmMotion, Problem, ProblemStatus};
use crate::query::params::comma_list;
use crate::query::predicate::{any_of, equals, intersects, text_search};
use crate::query::{Comparator, ListQuery, PredicateSet, Selection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// GET /problems?search=&categories=&status=&industries=&stages=&motions=&tags=
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemFilters {
    pub search: String,
    #[serde(deserialize_with = "comma_list")]
    pub categories: Vec<Category>,
    pub status: Selection<ProblemStatus>,
    #[serde(deserialize_with = "comma_list")]
    pub industries: Vec<String>,
    #[serde(deserialize_with = "comma_list")]
    pub stages: Vec<CompanyStage>,
    #[serde(deserialize_with = "comma_list")]
    pub motions: Vec<GtmMotion>,
    #[serde(deserialize_with = "comma_list")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemSort {
    /// Store order; the seed is kept in trending order.
    #[default]
    Trending,
    Recent,
    MostUpvoted,
    MostViewed,
}

impl Comparator<Problem> for ProblemSort {
    fn compare(&self, a: &Problem, b: &Problem) -> Ordering {
        match self {
            ProblemSort::Trending => Ordering::Equal,
            ProblemSort::Recent => b.created_at.cmp(&a.created_at),
            ProblemSort::MostUpvoted => b.engagement.upvotes.cmp(&a.engagement.upvotes),
            ProblemSort::MostViewed => b.engagement.views.cmp(&a.engagement.views),
        }
    }
}

impl ListQuery for ProblemFilters {
    type Record = Problem;
    type Sort = ProblemSort;

    fn predicates(&self) -> PredicateSet<'_, Problem> {
        PredicateSet::new()
            .and_maybe(text_search(&self.search))
            .and_maybe(any_of(&self.categories, |p: &Problem| &p.category))
            .and_maybe(equals(&self.status, |p: &Problem| &p.status))
            .and_maybe(any_of(&self.industries, |p: &Problem| &p.context.industry))
            .and_maybe(any_of(&self.stages, |p: &Problem| &p.context.company_stage))
            .and_maybe(any_of(&self.motions, |p: &Problem| &p.context.gtm_motion))
            .and_maybe(intersects(&self.tags, |p: &Problem| p.tags.as_slice()))
    }
}
