use crate::AppState;
use axum::{Json, extract::State};
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = &state.store;
    Json(serde_json::json!({
      "status": "healthy",
      "timestamp": Utc::now().timestamp(),
      "records": {
        "users": store.users.len(),
        "problems": store.problems.len(),
        "solutions": store.solutions.len(),
        "jobs": store.jobs.len(),
        "tools": store.tools.len(),
        "benchmarks": store.benchmarks.len(),
      }
    }))
}
