use crate::{
    AppState,
    dto::ListResponse,
    listings::{BenchmarkFilters, BenchmarkSort, SortParam},
    models::Benchmark,
    query::{ListView, PageParams},
};
use axum::{
    Json,
    extract::{Query, State},
};

/// GET /benchmarks?metric=CAC&company_stage=Series%20A&sort=value-high
pub async fn list_benchmarks(
    State(state): State<AppState>,
    Query(filters): Query<BenchmarkFilters>,
    Query(sort): Query<SortParam<BenchmarkSort>>,
    Query(page): Query<PageParams>,
) -> Json<ListResponse<Benchmark, BenchmarkFilters, BenchmarkSort>> {
    let view = ListView::<BenchmarkFilters>::new(&state.store.benchmarks)
        .with_filters(filters)
        .with_sort(sort.sort);

    Json(ListResponse::from_view(&view, &page))
}
