use super::Selection;
use crate::models::Searchable;

/// A boolean test over one record.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Logical AND over the active filter dimensions.
///
/// Dimensions whose selection is at its "no filter" sentinel never make it
/// into the set, so an empty set matches every record.
pub struct PredicateSet<'a, T> {
    clauses: Vec<Predicate<'a, T>>,
}

impl<T> Default for PredicateSet<'_, T> {
    fn default() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }
}

impl<'a, T> PredicateSet<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unconditional clause.
    pub fn and(mut self, clause: impl Fn(&T) -> bool + 'a) -> Self {
        self.clauses.push(Box::new(clause));
        self
    }

    /// Add a clause when the dimension is active.
    pub fn and_maybe(mut self, clause: Option<Predicate<'a, T>>) -> Self {
        if let Some(clause) = clause {
            self.clauses.push(clause);
        }
        self
    }

    pub fn matches(&self, record: &T) -> bool {
        self.clauses.iter().all(|clause| clause(record))
    }

    /// Number of active dimensions.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Case-insensitive substring match over the record's searchable fields.
/// Blank queries disable the dimension.
pub fn text_search<'a, T: Searchable + 'a>(query: &str) -> Option<Predicate<'a, T>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    Some(Box::new(move |record: &T| {
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }))
}

/// Scalar field is one of the selected values. Empty selection disables.
pub fn any_of<'a, T, V>(selected: &'a [V], field: fn(&T) -> &V) -> Option<Predicate<'a, T>>
where
    T: 'a,
    V: PartialEq,
{
    if selected.is_empty() {
        return None;
    }
    Some(Box::new(move |record: &T| selected.contains(field(record))))
}

/// Array field shares at least one value with the selection.
pub fn intersects<'a, T, V>(selected: &'a [V], field: fn(&T) -> &[V]) -> Option<Predicate<'a, T>>
where
    T: 'a,
    V: PartialEq,
{
    if selected.is_empty() {
        return None;
    }
    Some(Box::new(move |record: &T| {
        field(record).iter().any(|value| selected.contains(value))
    }))
}

/// Exact equality unless the selection is `All`.
pub fn equals<'a, T, V>(selection: &'a Selection<V>, field: fn(&T) -> &V) -> Option<Predicate<'a, T>>
where
    T: 'a,
    V: PartialEq,
{
    match selection {
        Selection::All => None,
        Selection::Only(wanted) => Some(Box::new(move |record: &T| field(record) == wanted)),
    }
}

/// Array field contains the selected value unless the selection is `All`.
pub fn contains<'a, T, V>(selection: &'a Selection<V>, field: fn(&T) -> &[V]) -> Option<Predicate<'a, T>>
where
    T: 'a,
    V: PartialEq,
{
    match selection {
        Selection::All => None,
        Selection::Only(wanted) => {
            Some(Box::new(move |record: &T| field(record).contains(wanted)))
        }
    }
}

/// Inclusive lower bound. Records without the field are excluded once a
/// threshold is set.
pub fn at_least<'a, T, V>(threshold: Option<V>, field: fn(&T) -> Option<V>) -> Option<Predicate<'a, T>>
where
    T: 'a,
    V: PartialOrd + Copy + 'a,
{
    let threshold = threshold?;
    Some(Box::new(move |record: &T| {
        field(record).is_some_and(|value| value >= threshold)
    }))
}
