// src/presentation/http/middleware/api_key.rs
use super::chain::{Constructor, Handle};
use crate::presentation::http::response::HeaderResponse;
use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Rejects requests whose `X-API-Key` header differs from `secret` with a
/// 401 envelope; the wrapped handle only sees requests that match.
pub fn api_key_auth(secret: impl Into<Arc<str>>) -> Constructor {
    let secret: Arc<str> = secret.into();
    Arc::new(move |next: Handle| {
        let secret = Arc::clone(&secret);
        Handle::new(move |req: Request| {
            let authorised = is_authorised(&req, &secret);
            let next = next.clone();
            async move {
                if authorised {
                    next.run(req).await
                } else {
                    unauthorized()
                }
            }
        })
    })
}

fn is_authorised(req: &Request, secret: &str) -> bool {
    req.headers()
        .get(API_KEY_HEADER)
        .is_some_and(|value| bool::from(value.as_bytes().ct_eq(secret.as_bytes())))
}

fn unauthorized() -> Response {
    tracing::debug!("rejected request with missing or invalid api key");
    HeaderResponse::new(StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
}
