use super::desc_f64;
use crate::models::{Tool, ToolPricing};
use crate::query::predicate::{contains, equals, text_search};
use crate::query::{Comparator, ListQuery, PredicateSet, Selection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// GET /tools?search=&category=&pricing=
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolFilters {
    pub search: String,
    pub category: Selection<String>,
    pub pricing: Selection<ToolPricing>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolSort {
    #[default]
    Name,
    MostUsed,
    TopRated,
}

impl Comparator<Tool> for ToolSort {
    fn compare(&self, a: &Tool, b: &Tool) -> Ordering {
        match self {
            ToolSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ToolSort::MostUsed => b.stats.usage_count.cmp(&a.stats.usage_count),
            ToolSort::TopRated => desc_f64(a.stats.avg_rating, b.stats.avg_rating),
        }
    }
}

impl ListQuery for ToolFilters {
    type Record = Tool;
    type Sort = ToolSort;

    fn predicates(&self) -> PredicateSet<'_, Tool> {
        PredicateSet::new()
            .and_maybe(text_search(&self.search))
            .and_maybe(contains(&self.category, |t: &Tool| t.categories.as_slice()))
            .and_maybe(equals(&self.pricing, |t: &Tool| &t.pricing))
    }
}
