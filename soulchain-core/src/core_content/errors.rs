/*
    errors.rs - Error types for content addressing and encryption
*/

use thiserror::Error;

/// Errors from the content-addressing and encryption wrappers
#[derive(Debug, Error)]
pub enum ContentError {
    /// Encryption failed
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Decryption or authentication failed
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// No content behind the reference
    #[error("Content not found: {0}")]
    NotFound(String),

    /// Payload is malformed
    #[error("Corrupt content: {0}")]
    Corrupt(String),
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;
