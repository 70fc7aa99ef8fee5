//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema loading and validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required top-level section is absent.
    #[error("missing required section '{section}'")]
    MissingSection {
        /// Section name.
        section: String,
    },

    /// The document does not have the expected shape.
    #[error("invalid schema structure at '{path}': {message}")]
    InvalidStructure {
        /// Dotted path of the offending entry.
        path: String,
        /// Error message.
        message: String,
    },

    /// A loaded tree violates a structural rule.
    #[error("validation error at '{path}': {message}")]
    Validation {
        /// Dotted path of the offending node.
        path: String,
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_structure_display() {
        let err = SchemaError::invalid_structure("scatter.marker", "valType is not a string");
        assert_eq!(
            err.to_string(),
            "invalid schema structure at 'scatter.marker': valType is not a string"
        );
    }

    #[test]
    fn test_missing_section_display() {
        let err = SchemaError::MissingSection {
            section: "traces".to_string(),
        };
        assert!(err.to_string().contains("traces"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SchemaError = json_err.into();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
