#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use gtm_match_api::{AppState, config::Config, data::RecordStore, router};
use jsonwebtoken::{EncodingKey, Header, encode};

pub const SECRET: &str = "integration-secret";

pub fn server() -> TestServer {
    let mut config = Config::new(SECRET);
    config.write_rate_per_second = 1000;
    server_with(config)
}

pub fn server_with(config: Config) -> TestServer {
    let store = RecordStore::load_seed().unwrap();

    TestServer::new(router(AppState::new(store, config)))
}

pub fn token_for(user_id: &str) -> String {
    let claims = serde_json::json!({
        "sub": user_id,
        "email": format!("{user_id}@example.com"),
        "aud": "authenticated",
        "exp": (Utc::now() + Duration::hours(1)).timestamp(),
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(user_id: &str) -> (HeaderName, HeaderValue) {
    let value = format!("Bearer {}", token_for(user_id));
    (header::AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
}

pub fn ids(body: &serde_json::Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_str().unwrap().to_string())
        .collect()
}
