use super::{Searchable, UserPreview};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Lead Generation")]
    LeadGeneration,
    #[serde(rename = "Conversion Optimization")]
    ConversionOptimization,
    #[serde(rename = "Sales Enablement")]
    SalesEnablement,
    #[serde(rename = "Product-Market Fit")]
    ProductMarketFit,
    #[serde(rename = "Pricing & Packaging")]
    PricingAndPackaging,
    #[serde(rename = "Attribution & Analytics")]
    AttributionAndAnalytics,
    #[serde(rename = "Customer Onboarding")]
    CustomerOnboarding,
    #[serde(rename = "Content Distribution")]
    ContentDistribution,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::LeadGeneration,
        Category::ConversionOptimization,
        Category::SalesEnablement,
        Category::ProductMarketFit,
        Category::PricingAndPackaging,
        Category::AttributionAndAnalytics,
        Category::CustomerOnboarding,
        Category::ContentDistribution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LeadGeneration => "Lead Generation",
            Category::ConversionOptimization => "Conversion Optimization",
            Category::SalesEnablement => "Sales Enablement",
            Category::ProductMarketFit => "Product-Market Fit",
            Category::PricingAndPackaging => "Pricing & Packaging",
            Category::AttributionAndAnalytics => "Attribution & Analytics",
            Category::CustomerOnboarding => "Customer Onboarding",
            Category::ContentDistribution => "Content Distribution",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    Open,
    InProgress,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyStage {
    #[serde(rename = "Pre-seed")]
    PreSeed,
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    SeriesB,
    #[serde(rename = "Series C")]
    SeriesC,
    #[serde(rename = "Series D+")]
    SeriesDPlus,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GtmMotion {
    #[serde(rename = "PLG")]
    Plg,
    #[serde(rename = "Sales-led")]
    SalesLed,
    Hybrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemContext {
    pub industry: String,
    pub company_stage: CompanyStage,
    pub company_size: String,
    pub team_size: u32,
    pub gtm_motion: GtmMotion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icp: Option<String>,
    #[serde(default)]
    pub current_tools: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_needed_by: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemMetrics {
    pub current: Vec<MetricValue>,
    pub target: Vec<MetricValue>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub upvotes: u32,
    pub views: u32,
    pub solutions_count: u32,
    pub comments_count: u32,
    pub facing_this_too_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    /// Rich text HTML, stored and returned as-is.
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub author: UserPreview,
    pub status: ProblemStatus,
    pub context: ProblemContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ProblemConstraints>,
    pub metrics: ProblemMetrics,
    pub engagement: Engagement,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_trending: bool,
}

impl Searchable for Problem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}
