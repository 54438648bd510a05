use super::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolPricing {
    Free,
    Freemium,
    Paid,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ToolStats {
    /// How many solutions use the tool.
    pub usage_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub website: String,
    pub categories: Vec<String>,
    pub pricing: ToolPricing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_details: Option<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub stats: ToolStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Searchable for Tool {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.categories.iter().map(String::as_str));
        fields
    }
}
