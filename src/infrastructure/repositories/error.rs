use crate::domain::errors::DomainError;

/// Splits driver failures into the two storage error kinds: problems reading
/// a returned row become `Scan`, everything else is a failed `Query`.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => DomainError::Scan(err.to_string()),
        sqlx::Error::Database(db_err) => DomainError::Query(db_err.message().to_string()),
        _ => DomainError::Query(err.to_string()),
    }
}
