use crate::{
    AppState,
    dto::{ListResponse, ToolDetail},
    errors::ApiError,
    listings::{SolutionSort, SortParam, ToolFilters, ToolSort},
    models::{Solution, Tool},
    query::{ListView, PageParams, PredicateSet, execute},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// GET /tools?category=CRM&pricing=freemium&sort=most-used
pub async fn list_tools(
    State(state): State<AppState>,
    Query(filters): Query<ToolFilters>,
    Query(sort): Query<SortParam<ToolSort>>,
    Query(page): Query<PageParams>,
) -> Json<ListResponse<Tool, ToolFilters, ToolSort>> {
    let view = ListView::<ToolFilters>::new(&state.store.tools)
        .with_filters(filters)
        .with_sort(sort.sort);

    Json(ListResponse::from_view(&view, &page))
}

/// GET /tools/categories
pub async fn tool_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .store
            .tool_categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// GET /tools/{slug}
pub async fn get_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ToolDetail>, ApiError> {
    let tool = state.store.tool_by_slug(&slug).ok_or(ApiError::NotFound)?;

    let uses_tool = PredicateSet::new().and(|s: &Solution| s.uses_tool(&tool.name));
    let related_solutions = execute(&state.store.solutions, &uses_tool, &SolutionSort::Top)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ToolDetail {
        tool: tool.clone(),
        related_solutions,
    }))
}
