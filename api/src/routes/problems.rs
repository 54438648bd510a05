use crate::{
    AppState,
    auth::{optional_claims, validate_token},
    dto::{
        CreateProblemRequest, CreateSolutionRequest, DraftKind, DraftReceipt, ListResponse,
        ProblemDetail, ToggleResponse, TopParams,
    },
    errors::ApiError,
    listings::{ProblemFilters, ProblemSort, SolutionFilters, SolutionSort, SortParam},
    models::{
        CommentNode, CommentTargetType, Notification, NotificationType, Problem, Solution,
        UserPreview, comment::build_thread,
    },
    query::{ListView, PageParams, PredicateSet, execute, truncate},
    sessions::{EngagementTarget, Reaction, Toggled, engagement::displayed_count},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// GET /problems?search=plg&categories=Lead%20Generation&sort=recent&page=1&limit=10
pub async fn list_problems(
    State(state): State<AppState>,
    Query(filters): Query<ProblemFilters>,
    Query(sort): Query<SortParam<ProblemSort>>,
    Query(page): Query<PageParams>,
) -> Json<ListResponse<Problem, ProblemFilters, ProblemSort>> {
    let view = ListView::<ProblemFilters>::new(&state.store.problems)
        .with_filters(filters)
        .with_sort(sort.sort);

    Json(ListResponse::from_view(&view, &page))
}

/// GET /problems/trending?limit=3
pub async fn trending_problems(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Json<Vec<Problem>> {
    let trending = PredicateSet::new().and(|p: &Problem| p.is_trending);
    let results = execute(&state.store.problems, &trending, &ProblemSort::Trending);

    Json(truncate(results, params.limit_or(3)).into_iter().cloned().collect())
}

/// GET /problems/{id}
/// Headers (optional): Authorization: Bearer <token>
pub async fn get_problem(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ProblemDetail>, ApiError> {
    let claims = optional_claims(&headers, &state.config)?;
    let mut problem = state.store.problem(&id).ok_or(ApiError::NotFound)?.clone();

    let reactions = claims.map(|claims| {
        state
            .engagement
            .flags(&claims.sub, EngagementTarget::Problem, &problem.id)
    });
    if let Some(flags) = reactions {
        let engagement = &mut problem.engagement;
        engagement.upvotes = displayed_count(engagement.upvotes, flags.upvoted);
        engagement.facing_this_too_count =
            displayed_count(engagement.facing_this_too_count, flags.facing_this_too);
    }

    let scope = SolutionFilters::default().for_problem(&id);
    let solutions = ListView::<SolutionFilters>::new(&state.store.solutions)
        .with_filters(scope)
        .results()
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ProblemDetail {
        problem,
        solutions,
        reactions,
    }))
}

/// POST /problems
/// Headers: Authorization: Bearer <token>
///
/// Validates the draft and acknowledges it. The Record Store is not changed.
pub async fn create_problem(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProblemRequest>,
) -> Result<(StatusCode, Json<DraftReceipt>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let claims = validate_token(&headers, &state.config)?;

    let receipt = DraftReceipt {
        id: Uuid::new_v4(),
        kind: DraftKind::Problem,
        title: payload.title,
        problem_id: None,
        received_at: Utc::now(),
    };

    info!("Problem draft {} accepted from user {}", receipt.id, claims.sub);

    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// GET /problems/{id}/solutions?sort=top&difficulty=easy
pub async fn list_problem_solutions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(filters): Query<SolutionFilters>,
    Query(sort): Query<SortParam<SolutionSort>>,
    Query(page): Query<PageParams>,
) -> Result<Json<ListResponse<Solution, SolutionFilters, SolutionSort>>, ApiError> {
    state.store.problem(&id).ok_or(ApiError::NotFound)?;

    let view = ListView::<SolutionFilters>::new(&state.store.solutions)
        .with_filters(filters.for_problem(id))
        .with_sort(sort.sort);

    Ok(Json(ListResponse::from_view(&view, &page)))
}

/// POST /problems/{id}/solutions
/// Headers: Authorization: Bearer <token>
pub async fn create_solution(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<CreateSolutionRequest>,
) -> Result<(StatusCode, Json<DraftReceipt>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let claims = validate_token(&headers, &state.config)?;
    let problem = state.store.problem(&id).ok_or(ApiError::NotFound)?;

    let receipt = DraftReceipt {
        id: Uuid::new_v4(),
        kind: DraftKind::Solution,
        title: payload.title,
        problem_id: Some(problem.id.clone()),
        received_at: Utc::now(),
    };

    info!(
        "Solution draft {} for problem {} accepted from user {}",
        receipt.id, problem.id, claims.sub
    );

    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// GET /problems/{id}/comments
pub async fn problem_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentNode>>, ApiError> {
    state.store.problem(&id).ok_or(ApiError::NotFound)?;
    let comments = state.store.comments_for(CommentTargetType::Problem, &id);

    Ok(Json(build_thread(&comments)))
}

/// POST /problems/{id}/upvote
/// Headers: Authorization: Bearer <token>
pub async fn upvote_problem(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    toggle_problem(&state, &headers, id, Reaction::Upvote)
}

/// POST /problems/{id}/bookmark
pub async fn bookmark_problem(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    toggle_problem(&state, &headers, id, Reaction::Bookmark)
}

/// POST /problems/{id}/facing-this-too
pub async fn facing_this_too(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    toggle_problem(&state, &headers, id, Reaction::FacingThisToo)
}

fn toggle_problem(
    state: &AppState,
    headers: &HeaderMap,
    id: String,
    reaction: Reaction,
) -> Result<Json<ToggleResponse>, ApiError> {
    let claims = validate_token(headers, &state.config)?;
    let problem = state.store.problem(&id).ok_or(ApiError::NotFound)?;

    let Toggled {
        active,
        first_activation,
    } = state
        .engagement
        .toggle(&claims.sub, EngagementTarget::Problem, &id, reaction);
    let seed_count = match reaction {
        Reaction::Upvote => problem.engagement.upvotes,
        Reaction::FacingThisToo => problem.engagement.facing_this_too_count,
        Reaction::Bookmark => 0,
    };

    info!("User {} set {:?}={} on problem {}", claims.sub, reaction, active, id);

    if first_activation && reaction != Reaction::Bookmark {
        notify_author(state, &claims.sub, problem, reaction);
    }

    Ok(Json(ToggleResponse {
        target_id: id,
        reaction,
        active,
        count: displayed_count(seed_count, active),
    }))
}

/// Tell the problem's author someone reacted. Self-reactions stay silent.
fn notify_author(state: &AppState, actor_id: &str, problem: &Problem, reaction: Reaction) {
    if problem.author.id == actor_id {
        return;
    }
    let actor = state.store.user(actor_id).map(UserPreview::from);
    let who = actor
        .as_ref()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Someone".to_string());

    let (kind, title, message) = match reaction {
        Reaction::FacingThisToo => (
            NotificationType::FacingThisToo,
            "Someone is facing this too",
            format!("{who} is facing the same problem: {}", problem.title),
        ),
        _ => (
            NotificationType::Upvote,
            "Your problem was upvoted",
            format!("{who} upvoted {}", problem.title),
        ),
    };

    state.notifications.push(Notification {
        id: Uuid::new_v4().to_string(),
        user_id: problem.author.id.clone(),
        kind,
        title: title.to_string(),
        message,
        link: format!("/problems/{}", problem.id),
        is_read: false,
        created_at: Utc::now(),
        actor,
    });
}
