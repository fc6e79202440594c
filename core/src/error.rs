//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only failures that abort a generation call live here. Conflicts and
//! recommendations are reported through [`crate::diagnostics`] instead.

use derive_more::Display;

/// The Global Error Enum.
#[derive(Debug, Display)]
pub enum AppError {
    /// A declared example or schema override could not be parsed under the
    /// scalar category of its field.
    #[display("Cannot convert example value `{value}` of field `{field}` to {category}")]
    ValueConversion {
        /// Field (or type, for root documents) that carried the value.
        field: String,
        /// The offending value, verbatim.
        value: String,
        /// Category the value was expected to parse as.
        category: String,
    },

    /// A referenced type name is not known to the registry.
    #[display("Unresolved type: {_0}")]
    UnresolvedType(String),

    /// The type shape cannot be documented.
    #[display("Unsupported type: {_0}")]
    UnsupportedType(String),

    /// Recursion went deeper than the configured limit.
    #[display("Maximum depth {depth} exceeded while generating `{type_name}`")]
    DepthExceeded {
        /// Type being generated when the limit was hit.
        type_name: String,
        /// The configured limit.
        depth: usize,
    },
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl AppError {
    /// Whether the error aborts only the current document generation.
    ///
    /// Callers record these as diagnostics and move on; every other variant
    /// aborts the whole run.
    pub fn is_value_conversion(&self) -> bool {
        matches!(self, AppError::ValueConversion { .. })
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_type_message() {
        let err = AppError::UnresolvedType("model::Ghost".into());
        assert_eq!(err.to_string(), "Unresolved type: model::Ghost");
    }

    #[test]
    fn test_depth_exceeded_message() {
        let err = AppError::DepthExceeded {
            type_name: "model::Node".into(),
            depth: 4,
        };
        assert_eq!(
            err.to_string(),
            "Maximum depth 4 exceeded while generating `model::Node`"
        );
    }

    #[test]
    fn test_value_conversion_message() {
        let err = AppError::ValueConversion {
            field: "enabled".into(),
            value: "yes".into(),
            category: "boolean".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot convert example value `yes` of field `enabled` to boolean"
        );
        assert!(err.is_value_conversion());
        assert!(!AppError::UnresolvedType("User".into()).is_value_conversion());
    }
}
