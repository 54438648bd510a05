use super::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmark {
    pub id: String,
    pub metric: String,
    pub value: f64,
    /// e.g. "$", "%", "days", "x"
    pub unit: String,
    pub industry: String,
    pub company_stage: String,
    pub company_size: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Searchable for Benchmark {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.metric.as_str()]
    }
}
