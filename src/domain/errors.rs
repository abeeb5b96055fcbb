//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(_) => DomainError::NotFound,
            other => DomainError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_keep_their_message() {
        let err: DomainError = sea_orm::DbErr::Custom("UNIQUE constraint failed".into()).into();
        assert!(matches!(err, DomainError::Database(_)));
        assert!(err.to_string().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err: DomainError = sea_orm::DbErr::RecordNotFound("inventory".into()).into();
        assert!(matches!(err, DomainError::NotFound));
        assert_eq!(err.to_string(), "Resource not found");
    }
}
