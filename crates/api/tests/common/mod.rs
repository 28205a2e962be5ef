//! Shared helpers for API integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) against a `#[sqlx::test]`-provisioned pool, plus request
//! and seeding helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use promohub_api::config::ServerConfig;
use promohub_api::router::build_app_router;
use promohub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Insert a user and return its id.
pub async fn insert_user(pool: &PgPool, username: &str, role: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO users (name, username, email, role) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(username)
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

/// Insert a creator profile for a user.
pub async fn insert_profile(
    pool: &PgPool,
    user_id: i64,
    city: Option<&str>,
    categories: &[&str],
    languages: &[&str],
) {
    let categories: Vec<String> = categories.iter().map(|s| s.to_string()).collect();
    let languages: Vec<String> = languages.iter().map(|s| s.to_string()).collect();
    sqlx::query(
        "INSERT INTO creator_profiles (user_id, city, categories, languages) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(city)
    .bind(categories)
    .bind(languages)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a social account with a raw follower string.
pub async fn insert_social(pool: &PgPool, user_id: i64, platform: &str, followers: &str) {
    sqlx::query(
        "INSERT INTO social_accounts (user_id, platform, handle, followers) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(platform)
    .bind(format!("@{platform}"))
    .bind(followers)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert an active campaign for a brand and return its id.
pub async fn insert_campaign(pool: &PgPool, brand_id: i64, title: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO campaigns (brand_id, title, status) \
         VALUES ($1, $2, 'active') RETURNING id",
    )
    .bind(brand_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

/// Attach a requirements row to a campaign.
pub async fn insert_requirements(
    pool: &PgPool,
    campaign_id: i64,
    categories: &[&str],
    languages: &[&str],
    locations: &[&str],
    min_followers: Option<i64>,
    max_followers: Option<i64>,
) {
    let categories: Vec<String> = categories.iter().map(|s| s.to_string()).collect();
    let languages: Vec<String> = languages.iter().map(|s| s.to_string()).collect();
    let locations: Vec<String> = locations.iter().map(|s| s.to_string()).collect();
    sqlx::query(
        "INSERT INTO campaign_requirements \
             (campaign_id, categories, languages, locations, min_followers, max_followers) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(campaign_id)
    .bind(categories)
    .bind(languages)
    .bind(locations)
    .bind(min_followers)
    .bind(max_followers)
    .execute(pool)
    .await
    .unwrap();
}
