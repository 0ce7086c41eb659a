// src/presentation/http/response.rs
use crate::application::dto::ArticleResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderResponse {
    pub code: u16,
    pub status: String,
}

impl HeaderResponse {
    pub fn new(code: StatusCode, status: impl Into<String>) -> Self {
        Self {
            code: code.as_u16(),
            status: status.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for HeaderResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Envelope shared by every article endpoint; `data` is empty on errors and
/// for operations that return nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListResponse {
    #[serde(flatten)]
    pub header: HeaderResponse,
    #[serde(default)]
    pub data: Vec<ArticleResponse>,
}

impl ArticleListResponse {
    pub fn ok(data: Vec<ArticleResponse>) -> Self {
        Self {
            header: HeaderResponse::new(StatusCode::OK, STATUS_OK),
            data,
        }
    }

    pub fn error(code: StatusCode, status: impl Into<String>) -> Self {
        Self {
            header: HeaderResponse::new(code, status),
            data: Vec::new(),
        }
    }
}

impl IntoResponse for ArticleListResponse {
    fn into_response(self) -> Response {
        (self.header.status_code(), Json(self)).into_response()
    }
}
