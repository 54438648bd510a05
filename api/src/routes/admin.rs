use crate::{
    AppState,
    auth::validate_token,
    dto::{Activity, ActivityKind, AdminStats, CategoryCount, Totals},
    errors::ApiError,
    models::{Category, Role},
};
use axum::{Json, extract::State, http::HeaderMap};
use tracing::info;

const RECENT_ACTIVITY: usize = 5;

/// GET /admin/stats
/// Headers: Authorization: Bearer <token> (admin only)
pub async fn admin_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminStats>, ApiError> {
    let claims = validate_token(&headers, &state.config)?;
    let caller = state.store.user(&claims.sub).ok_or(ApiError::Forbidden)?;
    if caller.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }

    let store = &state.store;
    let totals = Totals {
        users: store.users.len(),
        problems: store.problems.len(),
        solutions: store.solutions.len(),
        jobs: store.jobs.len(),
        tools: store.tools.len(),
    };

    let problems_by_category = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: store
                .problems
                .iter()
                .filter(|problem| problem.category == category)
                .count(),
        })
        .collect();

    let problems = store.problems.iter().map(|p| Activity {
        kind: ActivityKind::Problem,
        id: p.id.clone(),
        title: p.title.clone(),
        at: p.created_at,
    });
    let solutions = store.solutions.iter().map(|s| Activity {
        kind: ActivityKind::Solution,
        id: s.id.clone(),
        title: s.title.clone(),
        at: s.created_at,
    });
    let jobs = store.jobs.iter().map(|j| Activity {
        kind: ActivityKind::Job,
        id: j.id.clone(),
        title: j.title.clone(),
        at: j.posted_at,
    });

    let mut recent_activity: Vec<Activity> = problems.chain(solutions).chain(jobs).collect();
    recent_activity.sort_by(|a, b| b.at.cmp(&a.at));
    recent_activity.truncate(RECENT_ACTIVITY);

    info!("Admin stats requested by {}", caller.username);

    Ok(Json(AdminStats {
        totals,
        problems_by_category,
        recent_activity,
    }))
}
