use crate::{
    AppState,
    auth::validate_token,
    dto::{ListResponse, ProfileResponse},
    errors::ApiError,
    listings::{Board, BoardParam, LeaderboardFilters, ProblemSort, SolutionSort},
    models::{Problem, Solution, User},
    query::{ListView, PageParams, PredicateSet, execute},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};

/// GET /leaderboard?board=rising-stars&limit=10
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(filters): Query<LeaderboardFilters>,
    Query(board): Query<BoardParam>,
    Query(page): Query<PageParams>,
) -> Json<ListResponse<User, LeaderboardFilters, Board>> {
    let view = ListView::<LeaderboardFilters>::new(&state.store.users)
        .with_filters(filters)
        .with_sort(board.board);

    Json(ListResponse::from_view(&view, &page))
}

/// GET /users/me
/// Headers: Authorization: Bearer <token>
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<User>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    let user = state.store.user(&claims.sub).ok_or(ApiError::NotFound)?;

    Ok(Json(user.clone()))
}

/// GET /users/{username}
///
/// Anonymous problems are left off the public profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .store
        .user_by_username(&username)
        .ok_or(ApiError::NotFound)?;

    let authored = PredicateSet::new()
        .and(|p: &Problem| p.author.id == user.id)
        .and(|p: &Problem| !p.is_anonymous);
    let problems = execute(&state.store.problems, &authored, &ProblemSort::Recent)
        .into_iter()
        .cloned()
        .collect();

    let authored = PredicateSet::new().and(|s: &Solution| s.author.id == user.id);
    let solutions = execute(&state.store.solutions, &authored, &SolutionSort::Recent)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ProfileResponse {
        user: user.clone(),
        problems,
        solutions,
    }))
}
