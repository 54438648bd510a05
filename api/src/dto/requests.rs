use crate::models::{Category, CompanyStage, Difficulty, GtmMotion};
use crate::query::params::lenient;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Validate, Serialize, Deserialize)]
pub struct MetricInput {
    #[validate(length(min = 1, message = "Metric name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Metric value is required"))]
    pub value: String,
}

#[derive(Debug, Validate, Serialize, Deserialize)]
pub struct MetricComparisonInput {
    #[validate(length(min = 1, message = "Metric name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Before value is required"))]
    pub before: String,
    #[validate(length(min = 1, message = "After value is required"))]
    pub after: String,
}

/// POST /problems body. Enum fields reject unknown values at parse time.
#[derive(Debug, Validate, Deserialize)]
pub struct CreateProblemRequest {
    pub category: Category,
    #[validate(length(min = 20, max = 150, message = "Title must be 20-150 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 5, message = "Add between 1 and 5 tags"))]
    pub tags: Vec<String>,
    #[validate(length(
        min = 100,
        max = 5000,
        message = "Description must be 100-5000 characters"
    ))]
    pub description: String,
    #[validate(
        length(min = 1, max = 10, message = "Add between 1 and 10 current metrics"),
        nested
    )]
    pub current_metrics: Vec<MetricInput>,
    #[validate(
        length(min = 1, max = 10, message = "Add between 1 and 10 target metrics"),
        nested
    )]
    pub target_metrics: Vec<MetricInput>,
    #[validate(length(min = 1, message = "Industry is required"))]
    pub industry: String,
    pub company_stage: CompanyStage,
    #[validate(length(min = 1, message = "Company size is required"))]
    pub company_size: String,
    #[validate(range(min = 1, max = 10000, message = "Team size must be 1-10000"))]
    pub team_size: u32,
    pub gtm_motion: GtmMotion,
    pub target_market: Option<String>,
    pub icp: Option<String>,
    #[validate(length(min = 1, message = "Add at least one tool you're currently using"))]
    pub current_tools: Vec<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// POST /problems/{id}/solutions body
#[derive(Debug, Validate, Deserialize)]
pub struct CreateSolutionRequest {
    #[validate(length(min = 20, max = 150, message = "Title must be 20-150 characters"))]
    pub title: String,
    #[validate(length(
        min = 100,
        max = 10000,
        message = "Description must be 100-10000 characters"
    ))]
    pub description: String,
    #[validate(length(min = 50, max = 5000, message = "Approach must be 50-5000 characters"))]
    pub approach: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[validate(length(min = 1, message = "Add at least one tool you used"))]
    pub tools_used: Vec<String>,
    #[validate(length(min = 1, message = "Time to implement is required"))]
    pub time_to_implement: String,
    pub difficulty: Difficulty,
    pub budget: Option<String>,
    #[validate(range(min = 1, max = 1000, message = "Team size must be 1-1000"))]
    pub team_size_needed: Option<u32>,
    #[serde(default)]
    #[validate(length(max = 10, message = "Maximum 10 metrics allowed"), nested)]
    pub metrics_before_after: Vec<MetricComparisonInput>,
    #[validate(length(
        min = 50,
        max = 5000,
        message = "Results description must be 50-5000 characters"
    ))]
    pub results_description: String,
}

/// PUT /assessments/{id}/attempt/answer body
#[derive(Debug, Validate, Deserialize)]
pub struct AnswerRequest {
    #[validate(length(max = 10000, message = "Answer is too long"))]
    pub answer: String,
}

/// `?limit=` for top-N summaries. A malformed limit falls back to the default.
#[derive(Debug, Default, Deserialize)]
pub struct TopParams {
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<usize>,
}

impl TopParams {
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default).clamp(1, 100)
    }
}

/// GET /search?q=
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem_json() -> serde_json::Value {
        serde_json::json!({
            "category": "Lead Generation",
            "title": "Outbound reply rates fell off a cliff",
            "tags": ["outbound"],
            "description": "d".repeat(120),
            "current_metrics": [{"name": "Reply rate", "value": "1%"}],
            "target_metrics": [{"name": "Reply rate", "value": "4%"}],
            "industry": "B2B SaaS",
            "company_stage": "Seed",
            "company_size": "11-50",
            "team_size": 3,
            "gtm_motion": "Sales-led",
            "current_tools": ["Apollo"]
        })
    }

    #[test]
    fn test_valid_problem_passes() {
        let request: CreateProblemRequest = serde_json::from_value(problem_json()).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_problem_rules() {
        let mut body = problem_json();
        body["title"] = "Too short".into();
        body["tags"] = serde_json::json!(["a", "b", "c", "d", "e", "f"]);
        body["current_metrics"] = serde_json::json!([{"name": "", "value": "1"}]);
        let request: CreateProblemRequest = serde_json::from_value(body).unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("tags"));
        assert!(fields.contains_key("current_metrics"));
    }

    #[test]
    fn test_solution_team_size_range() {
        let request: CreateSolutionRequest = serde_json::from_value(serde_json::json!({
            "title": "Rebuilt the onboarding checklist end to end",
            "description": "x".repeat(150),
            "approach": "y".repeat(60),
            "tools_used": ["Appcues"],
            "time_to_implement": "3 weeks",
            "difficulty": "medium",
            "team_size_needed": 5000,
            "results_description": "z".repeat(60)
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("team_size_needed"));
    }
}
