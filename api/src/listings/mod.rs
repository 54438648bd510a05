//! Filter States and Sort Specifications for every list the API serves.
//!
//! Each `*Filters` struct binds straight from the query string and
//! implements [`ListQuery`](crate::query::ListQuery); each `*Sort` enum is
//! that list's single active ordering rule.

pub mod benchmarks;
pub mod jobs;
pub mod leaderboard;
pub mod problems;
pub mod solutions;
pub mod tools;

pub use benchmarks::{BenchmarkFilters, BenchmarkSort};
pub use jobs::{JobFilters, JobSort};
pub use leaderboard::{Board, BoardParam, LeaderboardFilters};
pub use problems::{ProblemFilters, ProblemSort};
pub use solutions::{SolutionFilters, SolutionSort};
pub use tools::{ToolFilters, ToolSort};

use crate::query::params::lenient_enum;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::cmp::Ordering;

/// `?sort=` for any list. Unknown values fall back to the list default.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(bound(deserialize = "S: DeserializeOwned + Default"))]
pub struct SortParam<S> {
    #[serde(default, deserialize_with = "lenient_enum")]
    pub sort: S,
}

/// Descending order for floats, missing values counted as zero.
pub(crate) fn desc_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
}
