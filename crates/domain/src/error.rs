//! Unified error types for the domain layer
//!
//! Provides a common error type for value object construction and translation lookup,
//! so the engine can report failures without falling back to bare strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty names, out-of-range values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects built from raw pack data)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Neither the active language nor the fallback language has a text
    #[error("Missing translation: no text for '{language}' or fallback '{fallback}'")]
    MissingTranslation { language: String, fallback: String },
}

impl DomainError {
    /// Creates a validation error for violated invariants.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Location name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for raw-to-typed conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a missing translation error
    pub fn missing_translation(language: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::MissingTranslation {
            language: language.into(),
            fallback: fallback.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("facing 7 is out of range");
        assert_eq!(err.to_string(), "Parse error: facing 7 is out of range");
    }

    #[test]
    fn test_missing_translation_error() {
        let err = DomainError::missing_translation("de", "en");
        assert!(matches!(err, DomainError::MissingTranslation { .. }));
        assert!(err.to_string().contains("'de'"));
        assert!(err.to_string().contains("'en'"));
    }
}
