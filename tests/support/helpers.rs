// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use articles_core::application::{ApplicationServices, ArticleUsecase};
use articles_core::domain::article::ArticleRepository;
use articles_core::presentation::http::{
    middleware::{API_KEY_HEADER, Chain, api_key_auth},
    response::ArticleListResponse,
    routes::build_router,
    state::HttpState,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use tower::util::ServiceExt as _;

pub const TEST_API_KEY: &str = "s3cr3t";

pub fn build_services(repo: Arc<dyn ArticleRepository>) -> Arc<dyn ArticleUsecase> {
    Arc::new(ApplicationServices::new(repo, Arc::new(mocks::FixedClock::later(60))))
}

pub fn make_router_with_usecase(usecase: Arc<dyn ArticleUsecase>) -> axum::Router {
    let interceptors = Chain::new([api_key_auth(TEST_API_KEY)]);
    build_router(HttpState { usecase }, &interceptors)
}

pub fn make_test_router(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    make_router_with_usecase(build_services(repo))
}

/// Sends a request carrying the test API key. `body` is sent as JSON.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, ArticleListResponse) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(API_KEY_HEADER, TEST_API_KEY);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    read_envelope(resp).await
}

pub async fn read_envelope(resp: axum::response::Response) -> (StatusCode, ArticleListResponse) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let envelope: ArticleListResponse = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "invalid envelope ({err}): {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    assert_eq!(envelope.header.code, status.as_u16(), "envelope code mirrors HTTP status");
    (status, envelope)
}
