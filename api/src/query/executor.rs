use super::PredicateSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One ordering rule over records of type `T`.
///
/// Returning `Equal` for every pair keeps store order, which is how the
/// "trending" style sorts are expressed.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Keeps records in the order the store holds them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOrder;

impl<T> Comparator<T> for StoreOrder {
    fn compare(&self, _: &T, _: &T) -> Ordering {
        Ordering::Equal
    }
}

/// Filter in store order, then stable-sort.
///
/// `slice::sort_by` is stable, so ties keep their store order.
pub fn execute<'r, T, C>(records: &'r [T], predicate: &PredicateSet<'_, T>, sort: &C) -> Vec<&'r T>
where
    C: Comparator<T> + ?Sized,
{
    let mut results: Vec<&'r T> = records
        .iter()
        .filter(|record| predicate.matches(record))
        .collect();
    results.sort_by(|a, b| sort.compare(a, b));
    results
}

/// Keep the first `limit` results (summary displays such as "top 3").
pub fn truncate<T>(mut results: Vec<T>, limit: usize) -> Vec<T> {
    results.truncate(limit);
    results
}

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}
fn default_limit() -> usize {
    10
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageParams {
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Maximum 100 per page, minimum 1
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }
}

/// Pagination metadata. `total` is the full Result Set length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}

/// Slice one page out of a Result Set. Pages past the end are empty.
pub fn paginate<T>(results: Vec<T>, params: &PageParams) -> (Vec<T>, PageMeta) {
    let total = results.len();
    let meta = PageMeta::new(params.page(), params.limit(), total);
    let start = (meta.page - 1).saturating_mul(meta.limit);

    let data = if start < total {
        results
            .into_iter()
            .skip(start)
            .take(meta.limit)
            .collect()
    } else {
        Vec::new()
    };

    (data, meta)
}
