use crate::{
    AppState,
    dto::ListResponse,
    errors::ApiError,
    listings::{JobFilters, JobSort, SortParam},
    models::Job,
    query::{ListView, PageParams},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// GET /jobs?work_locations=Remote,Hybrid&salary_min=100000&sort=salary-high
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(filters): Query<JobFilters>,
    Query(sort): Query<SortParam<JobSort>>,
    Query(page): Query<PageParams>,
) -> Json<ListResponse<Job, JobFilters, JobSort>> {
    let view = ListView::<JobFilters>::new(&state.store.jobs)
        .with_filters(filters)
        .with_sort(sort.sort);

    Json(ListResponse::from_view(&view, &page))
}

/// GET /jobs/companies
pub async fn job_companies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .store
            .job_companies()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// GET /jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    let job = state.store.job(&id).ok_or(ApiError::NotFound)?;

    Ok(Json(job.clone()))
}
