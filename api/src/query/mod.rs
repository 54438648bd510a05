//! In-memory list queries: predicates, execution and view binding.
//!
//! Every list endpoint runs the same three steps over a slice of records:
//! keep the records matching every active filter dimension, stable-sort by
//! one comparator, then truncate or page the result.

pub mod executor;
pub mod params;
pub mod predicate;
pub mod view;

pub use executor::{Comparator, PageMeta, PageParams, StoreOrder, execute, paginate, truncate};
pub use params::Selection;
pub use predicate::{Predicate, PredicateSet};
pub use view::{ListQuery, ListView};
