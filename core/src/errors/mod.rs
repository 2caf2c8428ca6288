//! Domain-specific error types and error handling.
//!
//! Business failures are not errors here: an unknown token or a wrong
//! password is a normal outcome variant (see `domain::value_objects`).
//! `DomainError` covers the failures a store implementation can hit.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_displays_message() {
        let error = DomainError::Store {
            message: "backend unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Store error: backend unavailable");
    }
}
