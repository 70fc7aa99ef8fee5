//! Error types for code generation.

use thiserror::Error;

/// A primitive type tag outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plotly type '{tag}'")]
pub struct UnknownTypeError {
    /// The offending tag.
    pub tag: String,
}

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] plotgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file error.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Unknown primitive type tag on an attribute.
    #[error("{source} on attribute '{attribute}' of '{node}'")]
    UnknownType {
        /// The mapping failure.
        source: UnknownTypeError,
        /// Attribute name.
        attribute: String,
        /// Path of the owning node.
        node: String,
    },

    /// The facade was requested for a node that is not the root.
    #[error("expected the root node, received node with path '{path}'")]
    Precondition {
        /// Path of the node received.
        path: String,
    },

    /// External formatter failure.
    #[error("formatter '{program}' failed: {message}")]
    Format {
        /// Formatter program.
        program: String,
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Attaches attribute and node context to a type mapping failure.
    pub fn unknown_type(
        source: UnknownTypeError,
        attribute: impl Into<String>,
        node: impl Into<String>,
    ) -> Self {
        Self::UnknownType {
            source,
            attribute: attribute.into(),
            node: node.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_display() {
        let err = CodegenError::unknown_type(
            UnknownTypeError {
                tag: "colorlist".to_string(),
            },
            "colors",
            "pie.marker",
        );
        assert_eq!(
            err.to_string(),
            "unknown plotly type 'colorlist' on attribute 'colors' of 'pie.marker'"
        );
    }

    #[test]
    fn test_precondition_display() {
        let err = CodegenError::Precondition {
            path: "scatter".to_string(),
        };
        assert!(err.to_string().contains("'scatter'"));
    }
}
