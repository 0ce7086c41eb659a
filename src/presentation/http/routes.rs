// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::middleware::{Chain, Handle};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Every article route runs through `interceptors`, first registered
/// outermost. `/health` is left unguarded.
pub fn build_router(state: HttpState, interceptors: &Chain) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let guarded = |handle: Handle| interceptors.then(Some(handle));
    let get_all = guarded(Handle::from_handler(articles::get_all, ()));
    let get_by_id = guarded(Handle::from_handler(articles::get_by_id, ()));
    let store = guarded(Handle::from_handler(articles::store, ()));
    let update = guarded(Handle::from_handler(articles::update, ()));
    let delete = guarded(Handle::from_handler(articles::delete, ()));

    Router::new()
        .route("/health", get(health))
        .route("/api/articles", get(get_all).post(store.clone()))
        .route("/api/articles/", post(store))
        .route(
            "/api/articles/{article_id}",
            get(get_by_id).put(update).delete(delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
