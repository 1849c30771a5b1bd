/*
    errors.rs - Error types for the store subsystem

    Covers storage I/O, serialization of the persisted projection,
    draft validation, and lookups.
*/

use thiserror::Error;

/// Errors that can occur in the store subsystem
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization of the persisted projection failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Draft validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Action requires a signed-in principal
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Validation-specific errors
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid field value
    #[error("Invalid field value: {field} - {reason}")]
    InvalidField { field: String, reason: String },

    /// Collection exceeds its limit
    #[error("Too many {field}: at most {max} allowed")]
    LimitExceeded { field: String, max: usize },
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Validation(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("circle".to_string());
        assert_eq!(err.to_string(), "Not found: circle");
    }

    #[test]
    fn test_validation_error_conversion() {
        let val_err = ValidationError::MissingField("mood".to_string());
        let store_err: StoreError = val_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }

    #[test]
    fn test_limit_exceeded_message() {
        let err = ValidationError::LimitExceeded {
            field: "tags".to_string(),
            max: 5,
        };
        assert!(err.to_string().contains("tags"));
        assert!(err.to_string().contains("5"));
    }
}
