use crate::{
    AppState,
    auth::validate_token,
    dto::{ToggleResponse, TopParams},
    errors::ApiError,
    listings::SolutionSort,
    models::{CommentNode, CommentTargetType, Solution, comment::build_thread},
    query::{PredicateSet, execute, truncate},
    sessions::{EngagementTarget, Reaction, engagement::displayed_count},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use tracing::info;

/// GET /solutions/top?limit=10
pub async fn top_solutions(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Json<Vec<Solution>> {
    let results = execute(
        &state.store.solutions,
        &PredicateSet::new(),
        &SolutionSort::MostUpvoted,
    );

    Json(truncate(results, params.limit_or(10)).into_iter().cloned().collect())
}

/// GET /solutions/{id}/comments
pub async fn solution_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentNode>>, ApiError> {
    state.store.solution(&id).ok_or(ApiError::NotFound)?;
    let comments = state.store.comments_for(CommentTargetType::Solution, &id);

    Ok(Json(build_thread(&comments)))
}

/// POST /solutions/{id}/upvote
/// Headers: Authorization: Bearer <token>
pub async fn upvote_solution(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    let solution = state.store.solution(&id).ok_or(ApiError::NotFound)?;

    let active = state
        .engagement
        .toggle(&claims.sub, EngagementTarget::Solution, &id, Reaction::Upvote)
        .active;

    info!("User {} set upvote={} on solution {}", claims.sub, active, id);

    Ok(Json(ToggleResponse {
        count: displayed_count(solution.upvotes, active),
        target_id: id,
        reaction: Reaction::Upvote,
        active,
    }))
}
