mod common;

use axum::http::{HeaderValue, StatusCode, header};
use common::{bearer, server};
use serde_json::{Value, json};

fn problem_draft() -> Value {
    json!({
        "category": "Lead Generation",
        "title": "Outbound reply rates collapsed after domain change",
        "tags": ["outbound", "deliverability"],
        "description": "d".repeat(120),
        "current_metrics": [{ "name": "Reply rate", "value": "0.8%" }],
        "target_metrics": [{ "name": "Reply rate", "value": "3%" }],
        "industry": "B2B SaaS",
        "company_stage": "Series A",
        "company_size": "51-200",
        "team_size": 4,
        "gtm_motion": "Sales-led",
        "current_tools": ["Outreach"]
    })
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let server = server();

    server
        .get("/users/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = bearer("1");
    let body: Value = server.get("/users/me").add_header(name, value).await.json();
    assert_eq!(body["username"], "sarah_chen");
}

#[tokio::test]
async fn test_token_for_unknown_user_is_not_found() {
    let server = server();

    let (name, value) = bearer("999");
    server
        .get("/users/me")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_token_rejected_even_on_public_routes() {
    let server = server();

    server
        .get("/problems/1")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer garbage"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_problem_draft_is_acknowledged_not_stored() {
    let server = server();

    let (name, value) = bearer("2");
    let response = server
        .post("/problems")
        .add_header(name, value)
        .json(&problem_draft())
        .await;
    response.assert_status(StatusCode::ACCEPTED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "problem");

    let listing: Value = server.get("/problems").await.json();
    assert_eq!(listing["count"], 6);
}

#[tokio::test]
async fn test_invalid_problem_draft_is_rejected() {
    let server = server();

    let mut draft = problem_draft();
    draft["title"] = json!("Too short");

    let (name, value) = bearer("2");
    let response = server
        .post("/problems")
        .add_header(name, value)
        .json(&draft)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Title"));
}

#[tokio::test]
async fn test_problem_draft_without_token() {
    let server = server();

    server
        .post("/problems")
        .json(&problem_draft())
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_solution_draft_with_metric_comparisons() {
    let server = server();

    let draft = json!({
        "title": "Rebuilt the sequence around buyer triggers",
        "description": "d".repeat(120),
        "approach": "a".repeat(60),
        "steps": ["Audit sequences", "Rewrite openers"],
        "tools_used": ["Outreach", "Clay"],
        "time_to_implement": "6 weeks",
        "difficulty": "medium",
        "team_size_needed": 3,
        "metrics_before_after": [
            { "name": "Reply rate", "before": "0.8%", "after": "3.1%" },
            { "name": "Meetings per week", "before": "4", "after": "11" }
        ],
        "results_description": "r".repeat(60)
    });

    let (name, value) = bearer("2");
    let response = server
        .post("/problems/1/solutions")
        .add_header(name.clone(), value.clone())
        .json(&draft)
        .await;
    response.assert_status(StatusCode::ACCEPTED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "solution");
    assert_eq!(body["problem_id"], "1");

    let mut blank_metric = draft;
    blank_metric["metrics_before_after"][0]["after"] = json!("");
    server
        .post("/problems/1/solutions")
        .add_header(name, value)
        .json(&blank_metric)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_public_user_records_omit_email() {
    let server = server();

    let profile: Value = server.get("/users/sarah_chen").await.json();
    assert_eq!(profile["user"]["username"], "sarah_chen");
    assert!(profile["user"].get("email").is_none());

    let found: Value = server
        .get("/search")
        .add_query_param("q", "sarah")
        .await
        .json();
    let users = found["users"].as_array().unwrap();
    assert!(!users.is_empty());
    assert!(users.iter().all(|user| user.get("email").is_none()));
}

#[tokio::test]
async fn test_admin_stats_for_admin_only() {
    let server = server();

    server
        .get("/admin/stats")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = bearer("1");
    server
        .get("/admin/stats")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let (name, value) = bearer("6");
    let response = server.get("/admin/stats").add_header(name, value).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["totals"]["problems"], 6);
    assert_eq!(body["totals"]["jobs"], 8);
    assert_eq!(body["problems_by_category"].as_array().unwrap().len(), 8);
    assert_eq!(body["recent_activity"].as_array().unwrap().len(), 5);
    assert_eq!(body["recent_activity"][0]["kind"], "job");
    assert_eq!(body["recent_activity"][0]["id"], "job-1");
}
