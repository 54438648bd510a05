use crate::{AppState, auth::validate_token, dto::InboxResponse, errors::ApiError};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use tracing::info;

fn inbox(state: &AppState, user_id: &str) -> InboxResponse {
    InboxResponse {
        notifications: state.notifications.list(user_id),
        unread_count: state.notifications.unread_count(user_id),
    }
}

/// GET /notifications
/// Headers: Authorization: Bearer <token>
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InboxResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;

    Ok(Json(inbox(&state, &claims.sub)))
}

/// POST /notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<InboxResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;

    if !state.notifications.mark_read(&claims.sub, &id) {
        return Err(ApiError::NotFound);
    }

    Ok(Json(inbox(&state, &claims.sub)))
}

/// POST /notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InboxResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    let marked = state.notifications.mark_all_read(&claims.sub);

    info!("Marked {} notifications read for user {}", marked, claims.sub);

    Ok(Json(inbox(&state, &claims.sub)))
}

/// DELETE /notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let claims = validate_token(&headers, &state.config)?;

    if !state.notifications.delete(&claims.sub, &id) {
        return Err(ApiError::NotFound);
    }

    info!("Notification {} deleted by user {}", id, claims.sub);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /notifications
pub async fn clear_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    state.notifications.clear(&claims.sub);

    info!("Notifications cleared for user {}", claims.sub);

    Ok(StatusCode::NO_CONTENT)
}
