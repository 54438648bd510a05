use crate::{
    AppState,
    auth::{Claims, validate_token},
    dto::{
        AnswerRequest, AssessmentDetail, AssessmentSummary, AttemptView, CategoryProgress,
        ProgressSummary,
    },
    errors::ApiError,
    models::{AssessmentCategory, Notification, NotificationType},
    quiz::{Quiz, QuizError, QuizScore, QuizState},
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// GET /assessments
pub async fn list_assessments(State(state): State<AppState>) -> Json<Vec<AssessmentSummary>> {
    let store = &state.store;
    Json(
        store
            .assessment_categories
            .iter()
            .map(|category| AssessmentSummary {
                category: category.clone(),
                question_count: store.questions_for(&category.id).len(),
            })
            .collect(),
    )
}

/// GET /assessments/{id}
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssessmentDetail>, ApiError> {
    let category = state
        .store
        .assessment_category(&id)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(AssessmentDetail {
        category: category.clone(),
        questions: state.store.questions_for(&id).into_iter().cloned().collect(),
    }))
}

/// GET /assessments/progress
/// Headers: Authorization: Bearer <token>
pub async fn assessment_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProgressSummary>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;

    let categories = state
        .store
        .assessment_categories
        .iter()
        .map(|category| {
            let total = state.store.questions_for(&category.id).len();
            match state.attempts.get(&claims.sub, &category.id) {
                Some(quiz) => CategoryProgress {
                    category_id: category.id.clone(),
                    answered: quiz.answered_count(),
                    total,
                    last_score: quiz.last_score().map(|score| score.percent),
                    completed: matches!(quiz.state(), QuizState::Completed { .. }),
                    badge_earned: quiz.badge_earned(),
                },
                None => CategoryProgress {
                    category_id: category.id.clone(),
                    answered: 0,
                    total,
                    last_score: None,
                    completed: false,
                    badge_earned: false,
                },
            }
        })
        .collect();

    Ok(Json(ProgressSummary::new(categories)))
}

/// GET /assessments/{id}/attempt
/// Headers: Authorization: Bearer <token>
pub async fn get_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AttemptView>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    let category = state
        .store
        .assessment_category(&id)
        .ok_or(ApiError::NotFound)?;

    let questions = state.store.questions_for(&id);
    let quiz = state
        .attempts
        .get(&claims.sub, &id)
        .unwrap_or_else(|| new_quiz(&state, category, questions.len()));

    Ok(Json(AttemptView::new(&id, &quiz, &questions)))
}

/// POST /assessments/{id}/attempt/start
pub async fn start_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AttemptView>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    transition(&state, &claims, &id, Quiz::start)
}

/// PUT /assessments/{id}/attempt/answer
/// Body: { "answer": "..." }
pub async fn answer_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AttemptView>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let claims = validate_token(&headers, &state.config)?;
    transition(&state, &claims, &id, |quiz| quiz.answer(payload.answer))
}

/// POST /assessments/{id}/attempt/next
pub async fn next_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AttemptView>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    transition(&state, &claims, &id, Quiz::next)
}

/// POST /assessments/{id}/attempt/previous
pub async fn previous_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AttemptView>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    transition(&state, &claims, &id, Quiz::previous)
}

/// POST /assessments/{id}/attempt/submit
///
/// A passing score awards the category badge and notifies the user.
pub async fn submit_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AttemptView>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    let mut score: Option<QuizScore> = None;
    let view = transition(&state, &claims, &id, |quiz| {
        score = Some(quiz.submit()?);
        Ok(())
    })?;

    if let Some(score) = score.filter(|score| score.passed) {
        let category = state
            .store
            .assessment_category(&id)
            .ok_or(ApiError::NotFound)?;
        award_badge(&state, &claims.sub, category, score);
    }

    Ok(view)
}

/// POST /assessments/{id}/attempt/retake
pub async fn retake_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AttemptView>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    transition(&state, &claims, &id, Quiz::retake)
}

fn new_quiz(state: &AppState, category: &AssessmentCategory, question_count: usize) -> Quiz {
    Quiz::new(
        question_count,
        category.passing_score,
        state.config.quiz_min_answer_chars,
    )
}

/// Apply one quiz action to the caller's attempt and return the new view.
fn transition(
    state: &AppState,
    claims: &Claims,
    id: &str,
    action: impl FnOnce(&mut Quiz) -> Result<(), QuizError>,
) -> Result<Json<AttemptView>, ApiError> {
    let category = state
        .store
        .assessment_category(id)
        .ok_or(ApiError::NotFound)?;
    let questions = state.store.questions_for(id);

    let view = state.attempts.with_attempt(
        &claims.sub,
        id,
        || new_quiz(state, category, questions.len()),
        |quiz| {
            action(quiz)?;
            Ok::<_, QuizError>(AttemptView::new(id, quiz, &questions))
        },
    )?;

    info!("User {} assessment {} is now {:?}", claims.sub, id, view.state);

    Ok(Json(view))
}

fn award_badge(state: &AppState, user_id: &str, category: &AssessmentCategory, score: QuizScore) {
    info!(
        "User {} earned badge {} with {}%",
        user_id, category.badge.id, score.percent
    );

    state.notifications.push(Notification {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        kind: NotificationType::Badge,
        title: format!("{} {} earned", category.badge.icon, category.badge.name),
        message: format!("You scored {}% on {}.", score.percent, category.name),
        link: format!("/assessments/{}", category.id),
        is_read: false,
        created_at: Utc::now(),
        actor: None,
    });
}
