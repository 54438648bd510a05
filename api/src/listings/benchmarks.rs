use crate::models::Benchmark;
use crate::query::predicate::{equals, text_search};
use crate::query::{Comparator, ListQuery, PredicateSet, Selection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// GET /benchmarks?search=&metric=&industry=&company_stage=&company_size=
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkFilters {
    pub search: String,
    pub metric: Selection<String>,
    pub industry: Selection<String>,
    pub company_stage: Selection<String>,
    pub company_size: Selection<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchmarkSort {
    #[default]
    Recent,
    ValueHigh,
    ValueLow,
}

impl Comparator<Benchmark> for BenchmarkSort {
    fn compare(&self, a: &Benchmark, b: &Benchmark) -> Ordering {
        match self {
            BenchmarkSort::Recent => b.date.cmp(&a.date),
            BenchmarkSort::ValueHigh => b.value.total_cmp(&a.value),
            BenchmarkSort::ValueLow => a.value.total_cmp(&b.value),
        }
    }
}

impl ListQuery for BenchmarkFilters {
    type Record = Benchmark;
    type Sort = BenchmarkSort;

    fn predicates(&self) -> PredicateSet<'_, Benchmark> {
        PredicateSet::new()
            .and_maybe(text_search(&self.search))
            .and_maybe(equals(&self.metric, |b: &Benchmark| &b.metric))
            .and_maybe(equals(&self.industry, |b: &Benchmark| &b.industry))
            .and_maybe(equals(&self.company_stage, |b: &Benchmark| &b.company_stage))
            .and_maybe(equals(&self.company_size, |b: &Benchmark| &b.company_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RecordStore;
    use crate::query::ListView;

    fn ids(results: &[&Benchmark]) -> Vec<String> {
        results.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_metric_and_value_sorts() {
        let store = RecordStore::load_seed().unwrap();
        let mut view: ListView<BenchmarkFilters> = ListView::new(&store.benchmarks);
        view.update(|f| f.metric = Selection::Only("CAC".into()));

        view.set_sort(BenchmarkSort::ValueHigh);
        assert_eq!(ids(&view.results()), vec!["bm-4", "bm-3", "bm-2", "bm-1"]);

        view.set_sort(BenchmarkSort::ValueLow);
        assert_eq!(ids(&view.results()), vec!["bm-1", "bm-2", "bm-3", "bm-4"]);
    }

    #[test]
    fn test_recent_is_date_desc_with_stable_ties() {
        let store = RecordStore::load_seed().unwrap();
        let mut view: ListView<BenchmarkFilters> = ListView::new(&store.benchmarks);
        view.update(|f| f.industry = Selection::Only("Developer Tools".into()));
        assert_eq!(ids(&view.results()), vec!["bm-12", "bm-14"]);
    }
}
