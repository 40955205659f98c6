//! Unified error types for the domain layer
//!
//! Provides a common error type for model validation and session construction,
//! so callers get typed failures instead of strings.

use thiserror::Error;

use crate::model::GameKind;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for tag/value parsing)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The payload field required by the declared game kind is missing or empty
    #[error("Missing or empty {field} for {kind} game")]
    EmptyContent {
        kind: GameKind,
        field: &'static str,
    },

    /// The payload belongs to a different kind than the one declared
    #[error("Expected {expected} content but the payload is for {got}")]
    ContentMismatch { expected: GameKind, got: GameKind },

    /// Too few items to deal a playable round
    #[error("Insufficient content: need at least {needed} items, got {got}")]
    InsufficientContent { needed: usize, got: usize },
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an empty content error for a kind's payload field
    pub fn empty_content(kind: GameKind, field: &'static str) -> Self {
        Self::EmptyContent { kind, field }
    }

    /// Create a content mismatch error for a wrongly tagged payload
    pub fn content_mismatch(expected: GameKind, got: GameKind) -> Self {
        Self::ContentMismatch { expected, got }
    }

    /// Create an insufficient content error
    pub fn insufficient_content(needed: usize, got: usize) -> Self {
        Self::InsufficientContent { needed, got }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown game kind: BINGO");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown game kind: BINGO");
    }

    #[test]
    fn test_empty_content_error() {
        let err = DomainError::empty_content(GameKind::Quiz, "quizContent");
        assert!(matches!(err, DomainError::EmptyContent { .. }));
        assert_eq!(err.to_string(), "Missing or empty quizContent for QUIZ game");
    }

    #[test]
    fn test_content_mismatch_error() {
        let err = DomainError::content_mismatch(GameKind::Quiz, GameKind::Riddle);
        assert_eq!(
            err.to_string(),
            "Expected QUIZ content but the payload is for RIDDLE"
        );
    }

    #[test]
    fn test_insufficient_content_error() {
        let err = DomainError::insufficient_content(5, 3);
        assert_eq!(
            err.to_string(),
            "Insufficient content: need at least 5 items, got 3"
        );
    }
}
