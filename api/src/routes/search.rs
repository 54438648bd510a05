use crate::{
    AppState,
    auth::{optional_claims, validate_token},
    dto::{RecentSearchesResponse, SearchParams, SearchResponse},
    errors::ApiError,
    models::Searchable,
    query::{PredicateSet, StoreOrder, execute, predicate::text_search, truncate},
};
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
};
use tracing::info;

const RESULTS_PER_KIND: usize = 3;

fn top_matches<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    // A blank query finds nothing here, unlike list filters.
    let Some(search) = text_search(query) else {
        return Vec::new();
    };
    let matches = PredicateSet::new().and_maybe(Some(search));
    truncate(execute(records, &matches, &StoreOrder), RESULTS_PER_KIND)
        .into_iter()
        .cloned()
        .collect()
}

/// GET /search?q=pricing
/// Headers (optional): Authorization: Bearer <token>
pub async fn global_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let claims = optional_claims(&headers, &state.config)?;
    let query = params.q.trim().to_string();

    if let Some(claims) = claims {
        if state.recent_searches.record(&claims.sub, &query) {
            info!("Recorded search for user {}", claims.sub);
        }
    }

    let store = &state.store;
    Ok(Json(SearchResponse {
        problems: top_matches(&store.problems, &query),
        solutions: top_matches(&store.solutions, &query),
        users: top_matches(&store.users, &query),
        tools: top_matches(&store.tools, &query),
        query,
    }))
}

/// GET /search/recent
/// Headers: Authorization: Bearer <token>
pub async fn recent_searches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RecentSearchesResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;

    Ok(Json(RecentSearchesResponse {
        searches: state.recent_searches.list(&claims.sub),
    }))
}

/// DELETE /search/recent
/// Headers: Authorization: Bearer <token>
pub async fn clear_recent_searches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    state.recent_searches.clear(&claims.sub);

    info!("Recent searches cleared for user {}", claims.sub);

    Ok(StatusCode::NO_CONTENT)
}
