//! Store error types
//!
//! Unknown-identifier mutations surface as explicit `NotFound` errors;
//! in every error case the store collection is left untouched.

use thiserror::Error;

/// Error type for record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for settings persistence.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings blob is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Equipment", "abc-123");
        assert_eq!(err.to_string(), "Not found: Equipment with id=abc-123");
    }
}
