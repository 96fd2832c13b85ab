//! Error types for password generation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A negative number of characters was requested.
    #[error("invalid password length: {0} (must be >= 0)")]
    InvalidLength(i64),
}
