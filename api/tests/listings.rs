mod common;

use axum::http::StatusCode;
use common::{ids, server};
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_record_counts() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"]["problems"], 6);
    assert_eq!(body["records"]["tools"], 8);
}

#[tokio::test]
async fn test_problems_default_to_store_order() {
    let server = server();

    let body: Value = server.get("/problems").await.json();
    assert_eq!(ids(&body), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(body["count"], 6);
    assert_eq!(body["sort"], "trending");
    assert_eq!(body["filters"]["status"], "all");
}

#[tokio::test]
async fn test_problems_most_upvoted_and_paginated() {
    let server = server();

    let body: Value = server
        .get("/problems")
        .add_query_param("sort", "most-upvoted")
        .add_query_param("limit", "2")
        .add_query_param("page", "2")
        .await
        .json();

    assert_eq!(ids(&body), vec!["1", "2"]);
    assert_eq!(body["count"], 6);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["pagination"]["has_next"], true);
    assert_eq!(body["pagination"]["has_prev"], true);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let server = server();

    let body: Value = server
        .get("/problems")
        .add_query_param("page", "99")
        .await
        .json();

    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["count"], 6);
    assert_eq!(body["pagination"]["has_next"], false);
}

#[tokio::test]
async fn test_problem_status_filter_and_unknown_tokens() {
    let server = server();

    let body: Value = server
        .get("/problems")
        .add_query_param("status", "solved")
        .await
        .json();
    assert_eq!(ids(&body), vec!["4"]);

    // Unknown filter tokens and sorts fall back to "no filter" and the default.
    let body: Value = server
        .get("/problems")
        .add_query_param("status", "archived")
        .add_query_param("sort", "loudest")
        .await
        .json();
    assert_eq!(body["count"], 6);
    assert_eq!(body["sort"], "trending");
}

#[tokio::test]
async fn test_problem_tags_from_comma_list() {
    let server = server();

    let body: Value = server
        .get("/problems")
        .add_query_param("tags", "onboarding,attribution")
        .await
        .json();

    assert_eq!(ids(&body), vec!["2", "5", "6"]);
    assert_eq!(body["filters"]["tags"], serde_json::json!(["onboarding", "attribution"]));
}

#[tokio::test]
async fn test_trending_problems_respect_limit() {
    let server = server();

    let body: Value = server.get("/problems/trending").await.json();
    let trending: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(trending, vec!["1", "2"]);

    let body: Value = server
        .get("/problems/trending")
        .add_query_param("limit", "1")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_problem_detail_and_missing_problem() {
    let server = server();

    let response = server.get("/problems/1").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], "1");
    assert_eq!(body["solutions"][0]["id"], "1");
    assert!(body.get("reactions").is_none());

    server
        .get("/problems/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_problem_comments_are_threaded() {
    let server = server();

    let body: Value = server.get("/problems/1/comments").await.json();
    let roots = body.as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["id"], "c1");
    assert_eq!(roots[0]["replies"][0]["id"], "c2");
    assert_eq!(roots[0]["replies"][0]["replies"][0]["id"], "c3");
}

#[tokio::test]
async fn test_top_solutions_by_upvotes() {
    let server = server();

    let body: Value = server
        .get("/solutions/top")
        .add_query_param("limit", "2")
        .await
        .json();
    let top: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(top, vec!["3", "2"]);
}

#[tokio::test]
async fn test_jobs_salary_floor_excludes_unsalaried_roles() {
    let server = server();

    let body: Value = server
        .get("/jobs")
        .add_query_param("salary_min", "100000")
        .await
        .json();

    assert_eq!(ids(&body), vec!["job-1", "job-2", "job-8"]);
}

#[tokio::test]
async fn test_jobs_by_work_location_and_salary_sort() {
    let server = server();

    let body: Value = server
        .get("/jobs")
        .add_query_param("work_locations", "Remote,Hybrid")
        .add_query_param("sort", "salary-low")
        .await
        .json();

    assert_eq!(body["count"], 6);
    assert_eq!(ids(&body)[0], "job-4");
    assert_eq!(ids(&body)[1], "job-5");
}

#[tokio::test]
async fn test_job_companies_and_detail() {
    let server = server();

    let body: Value = server.get("/jobs/companies").await.json();
    let companies = body.as_array().unwrap();
    assert_eq!(companies.len(), 5);
    assert!(companies.contains(&Value::from("Pipeline Labs")));

    server.get("/jobs/job-3").await.assert_status_ok();
    server
        .get("/jobs/job-99")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tools_sorted_by_name_and_filtered_by_category() {
    let server = server();

    let body: Value = server.get("/tools").await.json();
    assert_eq!(ids(&body).len(), 8);
    assert_eq!(body["data"][0]["slug"], "bizible");
    assert_eq!(body["data"][7]["slug"], "segment");

    let body: Value = server
        .get("/tools")
        .add_query_param("category", "Product Analytics")
        .await
        .json();
    let slugs: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["fullstory", "mixpanel", "segment"]);
}

#[tokio::test]
async fn test_tool_detail_lists_related_solutions() {
    let server = server();

    let body: Value = server.get("/tools/bizible").await.json();
    assert_eq!(body["name"], "Bizible");
    assert_eq!(body["related_solutions"][0]["id"], "1");

    server
        .get("/tools/unknown-tool")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_leaderboard_top_solvers() {
    let server = server();

    let body: Value = server
        .get("/leaderboard")
        .add_query_param("limit", "3")
        .await
        .json();

    assert_eq!(body["count"], 6);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["sort"], "top-solvers");
}

#[tokio::test]
async fn test_profile_by_username() {
    let server = server();

    let body: Value = server.get("/users/sarah_chen").await.json();
    assert_eq!(body["user"]["id"], "1");
    let problems: Vec<&str> = body["problems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(problems, vec!["6", "1"]);

    server
        .get("/users/nobody")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_benchmarks_list() {
    let server = server();

    let body: Value = server.get("/benchmarks").await.json();
    assert_eq!(body["count"], 14);
}
