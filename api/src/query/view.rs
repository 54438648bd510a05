use super::{Comparator, PredicateSet, execute};

/// A list's Filter State: knows which records it queries and how it sorts.
pub trait ListQuery: Default + Clone {
    type Record;
    type Sort: Comparator<Self::Record> + Default + Copy;

    /// One clause per active filter dimension.
    fn predicates(&self) -> PredicateSet<'_, Self::Record>;
}

/// Filter State plus Sort Specification bound to a slice of records.
///
/// The Result Set and its count are recomputed on every read, so they can
/// never drift from the state that produced them.
pub struct ListView<'s, Q: ListQuery> {
    records: &'s [Q::Record],
    filters: Q,
    sort: Q::Sort,
}

impl<'s, Q: ListQuery> ListView<'s, Q> {
    pub fn new(records: &'s [Q::Record]) -> Self {
        Self {
            records,
            filters: Q::default(),
            sort: Q::Sort::default(),
        }
    }

    pub fn with_filters(mut self, filters: Q) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: Q::Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Change one control, e.g. `view.update(|f| f.search = "plg".into())`.
    pub fn update(&mut self, change: impl FnOnce(&mut Q)) {
        change(&mut self.filters);
    }

    pub fn set_sort(&mut self, sort: Q::Sort) {
        self.sort = sort;
    }

    /// Reset every filter dimension (search included) and the sort.
    pub fn clear_filters(&mut self) {
        *self = Self::new(self.records);
    }

    pub fn filters(&self) -> &Q {
        &self.filters
    }

    pub fn sort(&self) -> Q::Sort {
        self.sort
    }

    pub fn results(&self) -> Vec<&'s Q::Record> {
        execute(self.records, &self.filters.predicates(), &self.sort)
    }

    pub fn count(&self) -> usize {
        self.results().len()
    }
}
