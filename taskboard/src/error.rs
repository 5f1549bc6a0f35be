//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations.
///
/// The not-found and invalid-input variants only arise from wiring mistakes
/// in the surrounding glue; a board that reports one is left untouched.
#[derive(Debug, Error)]
pub enum BoardError {
    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Empty or otherwise unusable input
    #[error("invalid value for {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error for a blank title or card text
    pub fn blank(field: impl Into<String>) -> Self {
        Self::invalid_input(field, "must not be empty")
    }

    /// Whether this error points at a bug in the caller rather than the environment
    pub fn is_logic_error(&self) -> bool {
        matches!(
            self,
            Self::ListNotFound { .. } | Self::CardNotFound { .. } | Self::InvalidInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::CardNotFound { id: "c9".into() };
        assert_eq!(err.to_string(), "card not found: c9");

        let err = BoardError::ListNotFound { id: "later".into() };
        assert_eq!(err.to_string(), "list not found: later");
    }

    #[test]
    fn test_blank() {
        let err = BoardError::blank("title");
        assert_eq!(err.to_string(), "invalid value for title: must not be empty");
    }

    #[test]
    fn test_logic_errors() {
        assert!(BoardError::blank("text").is_logic_error());
        assert!(BoardError::CardNotFound { id: "x".into() }.is_logic_error());
        let io = BoardError::Io(std::io::Error::other("disk"));
        assert!(!io.is_logic_error());
    }
}
