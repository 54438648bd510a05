use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentBadge {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub badge: AssessmentBadge,
    /// Percentage needed to earn the badge.
    pub passing_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub category_id: String,
    pub question: String,
    pub order: u32,
}
