use crate::models::{
    AssessmentCategory, AssessmentQuestion, Category, Notification, Problem, Solution, Tool, User,
};
use crate::query::{ListQuery, ListView, PageMeta, PageParams, paginate};
use crate::quiz::{Quiz, QuizScore, QuizState};
use crate::sessions::{Reaction, ReactionFlags};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One page of a list view, with the state that produced it.
#[derive(Debug, Serialize)]
pub struct ListResponse<T, F, S> {
    pub data: Vec<T>,
    /// Size of the whole Result Set, not of this page.
    pub count: usize,
    pub filters: F,
    pub sort: S,
    pub pagination: PageMeta,
}

impl<Q> ListResponse<Q::Record, Q, Q::Sort>
where
    Q: ListQuery,
    Q::Record: Clone,
{
    pub fn from_view(view: &ListView<'_, Q>, page: &PageParams) -> Self {
        let (data, pagination) = paginate(view.results(), page);
        Self {
            data: data.into_iter().cloned().collect(),
            count: pagination.total,
            filters: view.filters().clone(),
            sort: view.sort(),
            pagination,
        }
    }
}

/// Problem with the caller's reactions folded into its counters.
#[derive(Debug, Serialize)]
pub struct ProblemDetail {
    #[serde(flatten)]
    pub problem: Problem,
    pub solutions: Vec<Solution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<ReactionFlags>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftKind {
    Problem,
    Solution,
}

/// Acknowledgement for a validated submission. Drafts are not stored.
#[derive(Debug, Serialize)]
pub struct DraftReceipt {
    pub id: Uuid,
    pub kind: DraftKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<String>,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub target_id: String,
    pub reaction: Reaction,
    pub active: bool,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct ToolDetail {
    #[serde(flatten)]
    pub tool: Tool,
    pub related_solutions: Vec<Solution>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub problems: Vec<Problem>,
    pub solutions: Vec<Solution>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub problems: Vec<Problem>,
    pub solutions: Vec<Solution>,
    pub users: Vec<User>,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
pub struct RecentSearchesResponse {
    pub searches: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentSummary {
    #[serde(flatten)]
    pub category: AssessmentCategory,
    pub question_count: usize,
}

#[derive(Debug, Serialize)]
pub struct AssessmentDetail {
    #[serde(flatten)]
    pub category: AssessmentCategory,
    pub questions: Vec<AssessmentQuestion>,
}

/// GET /assessments/{id}/attempt
#[derive(Debug, Serialize)]
pub struct AttemptView {
    pub category_id: String,
    #[serde(flatten)]
    pub state: QuizState,
    pub question_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<AssessmentQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_answer: Option<String>,
    pub answered_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_score: Option<QuizScore>,
    pub badge_earned: bool,
}

impl AttemptView {
    pub fn new(category_id: &str, quiz: &Quiz, questions: &[&AssessmentQuestion]) -> Self {
        let index = match quiz.state() {
            QuizState::InProgress { index } => Some(index),
            _ => None,
        };

        Self {
            category_id: category_id.to_string(),
            state: quiz.state(),
            question_count: quiz.question_count(),
            current_question: index.and_then(|i| questions.get(i)).map(|q| (*q).clone()),
            current_answer: index.and_then(|i| quiz.answers().get(i)).cloned(),
            answered_count: quiz.answered_count(),
            last_score: quiz.last_score(),
            badge_earned: quiz.badge_earned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryProgress {
    pub category_id: String,
    pub answered: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_score: Option<u8>,
    pub completed: bool,
    pub badge_earned: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressSummary {
    pub categories: Vec<CategoryProgress>,
    pub badges_earned: usize,
    pub completed: usize,
    /// Sum of the last score of every completed category.
    pub points: u32,
}

impl ProgressSummary {
    pub fn new(categories: Vec<CategoryProgress>) -> Self {
        let badges_earned = categories.iter().filter(|c| c.badge_earned).count();
        let completed = categories.iter().filter(|c| c.completed).count();
        let points = categories
            .iter()
            .filter(|c| c.completed)
            .filter_map(|c| c.last_score)
            .map(u32::from)
            .sum();

        Self {
            categories,
            badges_earned,
            completed,
            points,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InboxResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct Totals {
    pub users: usize,
    pub problems: usize,
    pub solutions: usize,
    pub jobs: usize,
    pub tools: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Problem,
    Solution,
    Job,
}

#[derive(Debug, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub id: String,
    pub title: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AdminStats {
    pub totals: Totals,
    pub problems_by_category: Vec<CategoryCount>,
    pub recent_activity: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(completed: bool, score: Option<u8>, badge: bool) -> CategoryProgress {
        CategoryProgress {
            category_id: "c".into(),
            answered: 0,
            total: 5,
            last_score: score,
            completed,
            badge_earned: badge,
        }
    }

    #[test]
    fn test_progress_totals() {
        let summary = ProgressSummary::new(vec![
            progress(true, Some(80), true),
            progress(true, Some(40), false),
            progress(false, Some(90), true),
            progress(false, None, false),
        ]);
        assert_eq!(summary.badges_earned, 2);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.points, 120);
    }

    #[test]
    fn test_attempt_view_shows_current_question() {
        let questions = vec![
            AssessmentQuestion {
                id: "q1".into(),
                category_id: "c".into(),
                question: "Who is your ICP?".into(),
                order: 1,
            },
            AssessmentQuestion {
                id: "q2".into(),
                category_id: "c".into(),
                question: "Why now?".into(),
                order: 2,
            },
        ];
        let refs: Vec<&AssessmentQuestion> = questions.iter().collect();
        let mut quiz = Quiz::new(2, 70, 50);
        quiz.start().unwrap();
        quiz.next().unwrap();
        quiz.answer("because").unwrap();

        let view = AttemptView::new("c", &quiz, &refs);
        assert_eq!(view.current_question.map(|q| q.id), Some("q2".to_string()));
        assert_eq!(view.current_answer.as_deref(), Some("because"));

        let json = serde_json::to_value(AttemptView::new("c", &quiz, &refs)).unwrap();
        assert_eq!(json["state"], "in_progress");
        assert_eq!(json["index"], 1);
    }
}
