//! Error types for the payment service.

/// Domain-level errors (validation of incoming payments).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Amount must be a valid number.")]
    InvalidAmount,

    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,
}

/// Store-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Storage(e) => AppError::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let err: AppError = DomainError::NonPositiveAmount.into();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("greater than zero")));
    }

    #[test]
    fn test_storage_errors_are_internal() {
        let err: AppError = RepoError::Storage("lock poisoned".into()).into();
        assert!(matches!(err, AppError::Internal(ref msg) if msg == "lock poisoned"));
    }
}
