// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// The statement could not be executed (driver, I/O or constraint failure).
    #[error("{0}")]
    Query(String),
    /// A row came back but could not be decoded into an article.
    #[error("{0}")]
    Scan(String),
}

impl DomainError {
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Query(_) | Self::Scan(_))
    }
}
