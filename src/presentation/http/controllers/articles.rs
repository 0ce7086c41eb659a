// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleCreateRequest, ArticleUpdateRequest},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::response::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    body::Bytes,
    extract::{
        Path,
        rejection::{BytesRejection, PathRejection},
    },
};
use serde::de::DeserializeOwned;
use validator::Validate;

type ArticleIdParam = Result<Path<i64>, PathRejection>;

type RawBody = Result<Bytes, BytesRejection>;

fn article_id(param: ArticleIdParam) -> HttpResult<i64> {
    param
        .map(|Path(id)| id)
        .map_err(|rejection| HttpError::bad_request(rejection.body_text()))
}

/// Decodes the body as JSON whatever `Content-Type` the client sent.
fn json_body<T: DeserializeOwned>(body: RawBody) -> HttpResult<T> {
    let bytes = body.map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
    serde_json::from_slice(&bytes).map_err(|err| HttpError::bad_request(err.to_string()))
}

pub async fn get_all(Extension(state): Extension<HttpState>) -> HttpResult<ArticleListResponse> {
    let articles = state.usecase.get_all().await.into_http()?;
    Ok(ArticleListResponse::ok(articles))
}

pub async fn get_by_id(
    Extension(state): Extension<HttpState>,
    param: ArticleIdParam,
) -> HttpResult<ArticleListResponse> {
    let id = article_id(param)?;

    let article = state
        .usecase
        .get_by_id(id)
        .await
        .into_http()?
        .ok_or_else(|| HttpError::not_found("data not found"))?;

    Ok(ArticleListResponse::ok(vec![article]))
}

pub async fn store(
    Extension(state): Extension<HttpState>,
    body: RawBody,
) -> HttpResult<ArticleListResponse> {
    let request: ArticleCreateRequest = json_body(body)?;
    request.validate().map_err(|errors| {
        HttpError::validation("ArticleCreateRequest", ArticleCreateRequest::FIELDS, &errors)
    })?;

    let article = state.usecase.store(request).await.into_http()?;
    Ok(ArticleListResponse::ok(vec![article]))
}

/// The id in the path always replaces whatever id the body carried.
pub async fn update(
    Extension(state): Extension<HttpState>,
    param: ArticleIdParam,
    body: RawBody,
) -> HttpResult<ArticleListResponse> {
    let id = article_id(param)?;
    let mut request: ArticleUpdateRequest = json_body(body)?;

    request.id = id;
    request.validate().map_err(|errors| {
        HttpError::validation("ArticleUpdateRequest", ArticleUpdateRequest::FIELDS, &errors)
    })?;

    let article = state.usecase.update(request).await.into_http()?;
    Ok(ArticleListResponse::ok(vec![article]))
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    param: ArticleIdParam,
) -> HttpResult<ArticleListResponse> {
    let id = article_id(param)?;
    if id == 0 {
        // Message kept as clients already match on it.
        return Err(HttpError::not_found("article_id was not zero"));
    }

    let deleted = state.usecase.delete(id).await.into_http()?;
    if !deleted {
        return Err(HttpError::from_error(ApplicationError::Unknown));
    }

    Ok(ArticleListResponse::ok(Vec::new()))
}
