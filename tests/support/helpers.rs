// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use fango::application::services::ApplicationServices;
use fango::domain::{
    pagination::OrderingSpec,
    user::{User, UserReadRepository},
};
use fango::infrastructure::repositories::InMemoryUserRepository;
use fango::presentation::http::{
    routes::build_router,
    state::{HttpState, LinkSettings},
};

pub const HOST: &str = "api.test";

pub fn make_router(users: Vec<User>, page_size: u64, secure: bool) -> Router {
    let user_repo: Arc<dyn UserReadRepository> = Arc::new(InMemoryUserRepository::new(users));
    let services = Arc::new(ApplicationServices::new(
        user_repo,
        page_size,
        OrderingSpec::parse("id").unwrap(),
    ));
    let state = HttpState {
        services,
        links: LinkSettings {
            secure,
            fallback_host: "127.0.0.1:8080".into(),
        },
    };
    build_router(state, &[])
}

pub fn make_test_router(page_size: u64) -> Router {
    make_router(super::fixture_users(), page_size, true)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header("host", HOST)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

/// Strip `scheme://host` from an absolute page link.
pub fn path_of(link: &str) -> String {
    let without_scheme = link.split_once("://").map(|(_, rest)| rest).unwrap_or(link);
    match without_scheme.find('/') {
        Some(index) => without_scheme[index..].to_string(),
        None => "/".to_string(),
    }
}

pub fn usernames(page: &Value) -> Vec<String> {
    page["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|item| item["username"].as_str().unwrap_or_default().to_string())
        .collect()
}

pub fn link(page: &Value, name: &str) -> Option<String> {
    page[name].as_str().map(str::to_owned)
}

/// Follow `next` links from `uri` and collect every page's usernames.
pub async fn walk_next(app: &Router, uri: &str) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    let mut current = Some(uri.to_string());
    while let Some(uri) = current {
        let (status, page) = get_json(app, &uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {page}");
        pages.push(usernames(&page));
        current = link(&page, "next").map(|next| path_of(&next));
    }
    pages
}

pub async fn assert_error_response(
    app: &Router,
    uri: &str,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    let (status, json) = get_json(app, uri).await;
    assert_eq!(status, expected_status, "{json}");
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message"
    );
    json
}
