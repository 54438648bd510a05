pub mod admin;
pub mod assessments;
pub mod benchmarks;
pub mod health;
pub mod jobs;
pub mod notifications;
pub mod problems;
pub mod search;
pub mod solutions;
pub mod tools;
pub mod users;

use crate::{AppState, errors::ApiError, rate_limit::limit_writes};
use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    middleware,
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower::{
    ServiceBuilder,
    limit::ConcurrencyLimitLayer,
    timeout::{TimeoutLayer, error::Elapsed},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the full application router over a shared [`AppState`].
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Problems
        .route(
            "/problems",
            get(problems::list_problems).post(problems::create_problem),
        )
        .route("/problems/trending", get(problems::trending_problems))
        .route("/problems/{id}", get(problems::get_problem))
        .route(
            "/problems/{id}/solutions",
            get(problems::list_problem_solutions).post(problems::create_solution),
        )
        .route("/problems/{id}/comments", get(problems::problem_comments))
        .route("/problems/{id}/upvote", post(problems::upvote_problem))
        .route("/problems/{id}/bookmark", post(problems::bookmark_problem))
        .route(
            "/problems/{id}/facing-this-too",
            post(problems::facing_this_too),
        )
        // Solutions
        .route("/solutions/top", get(solutions::top_solutions))
        .route("/solutions/{id}/comments", get(solutions::solution_comments))
        .route("/solutions/{id}/upvote", post(solutions::upvote_solution))
        // Directory
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/companies", get(jobs::job_companies))
        .route("/jobs/{id}", get(jobs::get_job))
        .route("/tools", get(tools::list_tools))
        .route("/tools/categories", get(tools::tool_categories))
        .route("/tools/{slug}", get(tools::get_tool))
        .route("/benchmarks", get(benchmarks::list_benchmarks))
        // People
        .route("/leaderboard", get(users::leaderboard))
        .route("/users/me", get(users::get_current_user))
        .route("/users/{username}", get(users::get_profile))
        // Search
        .route("/search", get(search::global_search))
        .route(
            "/search/recent",
            get(search::recent_searches).delete(search::clear_recent_searches),
        )
        // Assessments
        .route("/assessments", get(assessments::list_assessments))
        .route("/assessments/progress", get(assessments::assessment_progress))
        .route("/assessments/{id}", get(assessments::get_assessment))
        .route("/assessments/{id}/attempt", get(assessments::get_attempt))
        .route(
            "/assessments/{id}/attempt/start",
            post(assessments::start_attempt),
        )
        .route(
            "/assessments/{id}/attempt/answer",
            put(assessments::answer_question),
        )
        .route(
            "/assessments/{id}/attempt/next",
            post(assessments::next_question),
        )
        .route(
            "/assessments/{id}/attempt/previous",
            post(assessments::previous_question),
        )
        .route(
            "/assessments/{id}/attempt/submit",
            post(assessments::submit_attempt),
        )
        .route(
            "/assessments/{id}/attempt/retake",
            post(assessments::retake_attempt),
        )
        // Notifications
        .route(
            "/notifications",
            get(notifications::list_notifications).delete(notifications::clear_notifications),
        )
        .route("/notifications/read-all", post(notifications::mark_all_read))
        .route(
            "/notifications/{id}",
            delete(notifications::delete_notification),
        )
        .route("/notifications/{id}/read", post(notifications::mark_read))
        // Admin
        .route("/admin/stats", get(admin::admin_stats))
        .layer(middleware::from_fn_with_state(state.clone(), limit_writes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    state.config.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(state.config.max_concurrent_requests))
        .layer(cors)
        .with_state(state)
}

async fn handle_timeout(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn test_elapsed_maps_to_request_timeout() {
        let response = handle_timeout(Box::new(Elapsed::new())).await.into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_other_layer_errors_are_internal() {
        let err = std::io::Error::other("connection reset");
        let response = handle_timeout(Box::new(err)).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
