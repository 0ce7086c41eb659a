use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use crate::presentation::http::response::ArticleListResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unknown => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        if err.is_storage() {
            tracing::error!(error = %err, "storage failure");
        }
        let status = match &err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Query(_) | DomainError::Scan(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into())
    }

    /// Renders one line per failed rule, e.g.
    /// `Key: 'ArticleCreateRequest.Title' Error:Field validation for 'Title' failed on the 'min' tag`.
    /// Lines follow `field_order`, the struct's declaration order.
    pub fn validation(type_name: &str, field_order: &[&str], errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| {
            let name: &str = field;
            let position = field_order
                .iter()
                .position(|known| *known == name)
                .unwrap_or(usize::MAX);
            (position, name.to_string())
        });

        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field_label(&field);
                errs.iter()
                    .map(move |e| (field.clone(), e.code.to_string()))
                    .collect::<Vec<_>>()
            })
            .map(|(field, tag)| {
                format!(
                    "Key: '{type_name}.{field}' Error:Field validation for '{field}' failed on the '{tag}' tag"
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Self::bad_request(message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

/// `title` -> `Title`, `id` -> `ID`.
fn field_label(field: &str) -> String {
    if field == "id" {
        return "ID".into();
    }
    field
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        ArticleListResponse::error(self.status, self.message).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
