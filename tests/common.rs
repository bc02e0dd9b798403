#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, Response, header};
use serde_json::Value;
use sqlx::types::Json;
use uuid::Uuid;

use setlist_api::app::{build_router, build_state};
use setlist_api::config::Config;
use setlist_api::repos::{
    album_repo::{AlbumRow, TrackRow},
    error::RepoError,
    event_repo::EventRow,
};
use setlist_api::services::auth::{AuthService, Principal};
use setlist_api::services::catalog::CatalogStore;
use setlist_api::state::AppState;

pub const SECRET: &str = "integration-secret";

/// In-memory catalog with one event and one album.
pub struct MemoryCatalog;

#[async_trait]
impl CatalogStore for MemoryCatalog {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_events(&self) -> Result<Vec<EventRow>, RepoError> {
        Ok(vec![EventRow {
            id: Uuid::from_u128(1),
            title: Some("Release Show".to_string()),
            date: None,
            city: Some("Portland".to_string()),
            state: Some("OR".to_string()),
            venue: Some("Doug Fir".to_string()),
            description: Some("All ages".to_string()),
            ticket_link: None,
        }])
    }

    async fn list_albums(&self) -> Result<Vec<AlbumRow>, RepoError> {
        Ok(vec![AlbumRow {
            id: Uuid::from_u128(2),
            title: Some("Debut".to_string()),
            artist: Some("The Examples".to_string()),
            release_date: None,
            genre: None,
            tracklist: Json(vec![TrackRow {
                track_number: Some(1),
                title: Some("Intro".to_string()),
            }]),
        }])
    }
}

pub fn config(policy: &str) -> Config {
    let policy = policy.to_string();
    Config::from_lookup(move |key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        "DATABASE_URL" => Some("postgres://unused".to_string()),
        "AUTH_FAILURE_POLICY" => Some(policy.clone()),
        _ => None,
    })
    .expect("test config")
}

/// Router built from the test secret plus `overrides` (e.g. `APP_ENV`, `STATIC_DIR`).
pub fn app_with(overrides: &[(&str, &str)]) -> Router {
    let overrides: Vec<(String, String)> = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(move |key| {
        if let Some((_, v)) = overrides.iter().find(|(k, _)| k == key) {
            return Some(v.clone());
        }
        match key {
            "JWT_SECRET" => Some(SECRET.to_string()),
            "DATABASE_URL" => Some("postgres://unused".to_string()),
            _ => None,
        }
    })
    .expect("test config");
    build_router(build_state(&config, Arc::new(MemoryCatalog)), &config)
}

pub fn state(policy: &str) -> (AppState, Config) {
    let config = config(policy);
    let state = build_state(&config, Arc::new(MemoryCatalog));
    (state, config)
}

pub fn app(policy: &str) -> (Router, Arc<AuthService>) {
    let (state, config) = state(policy);
    let auth = state.auth.clone();
    (build_router(state, &config), auth)
}

pub fn principal() -> Principal {
    Principal {
        email: "a@b.com".to_string(),
        username: "a".to_string(),
        id: "1".to_string(),
        is_admin: false,
    }
}

/// Token signed with a secret the app does not know.
pub fn foreign_token() -> String {
    let config = Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some("some-other-secret".to_string()),
        "DATABASE_URL" => Some("postgres://unused".to_string()),
        _ => None,
    })
    .expect("test config");
    AuthService::new(&config.auth)
        .sign_token(&principal())
        .expect("sign")
}

pub fn graphql_request(query: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    let body = serde_json::json!({ "query": query }).to_string();
    builder.body(Body::from(body)).expect("failed to build request")
}

pub fn get_request(path: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}
