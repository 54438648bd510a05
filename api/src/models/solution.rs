use super::{Searchable, UserPreview};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricComparison {
    pub name: String,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Implementation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    pub tools_used: Vec<String>,
    pub time_to_implement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size_needed: Option<u32>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionResults {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics_before_after: Vec<MetricComparison>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_saved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_savings: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_metrics: BTreeMap<String, String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub id: String,
    pub problem_id: String,
    pub title: String,
    pub description: String,
    pub author: UserPreview,
    pub approach: String,
    pub implementation: Implementation,
    pub results: SolutionResults,
    pub upvotes: u32,
    pub helpful_count: u32,
    pub comments_count: u32,
    #[serde(default)]
    pub is_accepted: bool,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Solution {
    pub fn uses_tool(&self, tool_name: &str) -> bool {
        self.implementation
            .tools_used
            .iter()
            .any(|used| used.eq_ignore_ascii_case(tool_name))
    }
}

impl Searchable for Solution {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}
