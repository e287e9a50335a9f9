//! # Error Types
//!
//! Structured error types for rocket_core. Validation errors carry the
//! offending field and the bound that was violated so callers can re-prompt
//! the user with something actionable; build errors are attributed to the
//! component as a whole.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::errors::{RocketError, RocketResult};
//!
//! fn validate_length(length_mm: f64) -> RocketResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(RocketError::invalid_parameter(
//!             "length",
//!             length_mm.to_string(),
//!             "must be greater than zero",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rocket_core operations
pub type RocketResult<T> = Result<T, RocketError>;

/// Structured error type for validation, assembly, and analysis.
///
/// Three families of failure, matching the engine's contract:
/// validation errors (field-attributed, pre-geometry), build errors
/// (component-attributed, post-geometry), and unsupported-shape errors
/// (flutter analysis only). All are terminal for the call that produced
/// them; none is retried.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RocketError {
    /// A parameter value violates a dimensional or structural invariant
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// Parameters passed validation but produce a degenerate or
    /// self-intersecting solid
    #[error("{component} parameters produce an invalid shape")]
    InvalidShape { component: String },

    /// An externally supplied sketch cannot be turned into a fin face
    #[error("Invalid sketch: {reason}")]
    InvalidSketch { reason: String },

    /// The fin shape is structurally unsupported by the flutter equations
    #[error("Unsupported shape: {reason}")]
    UnsupportedShape { reason: String },

    /// An Auto dimension could not be resolved because the adjoining
    /// sibling component does not exist
    #[error("{component} not found")]
    SiblingNotFound { component: String },

    /// A named preset is not in the registry
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },
}

impl RocketError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RocketError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidShape error for the named component
    pub fn invalid_shape(component: impl Into<String>) -> Self {
        RocketError::InvalidShape {
            component: component.into(),
        }
    }

    /// Create an InvalidSketch error
    pub fn invalid_sketch(reason: impl Into<String>) -> Self {
        RocketError::InvalidSketch {
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedShape error
    pub fn unsupported_shape(reason: impl Into<String>) -> Self {
        RocketError::UnsupportedShape {
            reason: reason.into(),
        }
    }

    /// Create a SiblingNotFound error
    pub fn sibling_not_found(component: impl Into<String>) -> Self {
        RocketError::SiblingNotFound {
            component: component.into(),
        }
    }

    /// Create a PresetNotFound error
    pub fn preset_not_found(name: impl Into<String>) -> Self {
        RocketError::PresetNotFound { name: name.into() }
    }

    /// The field a validation error is attributed to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            RocketError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }

    /// True for pre-geometry validation failures (the caller keeps the
    /// prior valid state and re-prompts)
    pub fn is_validation(&self) -> bool {
        matches!(self, RocketError::InvalidParameter { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RocketError::InvalidParameter { .. } => "INVALID_PARAMETER",
            RocketError::InvalidShape { .. } => "INVALID_SHAPE",
            RocketError::InvalidSketch { .. } => "INVALID_SKETCH",
            RocketError::UnsupportedShape { .. } => "UNSUPPORTED_SHAPE",
            RocketError::SiblingNotFound { .. } => "SIBLING_NOT_FOUND",
            RocketError::PresetNotFound { .. } => "PRESET_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            RocketError::invalid_parameter("inner diameter", "0", "must be greater than zero");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: RocketError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_display() {
        let error = RocketError::invalid_shape("Body tube");
        assert_eq!(
            error.to_string(),
            "Body tube parameters produce an invalid shape"
        );

        let error = RocketError::sibling_not_found("Body tube");
        assert_eq!(error.to_string(), "Body tube not found");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RocketError::invalid_shape("Fin").error_code(),
            "INVALID_SHAPE"
        );
        assert_eq!(
            RocketError::unsupported_shape("elliptical fins are not supported at this time")
                .error_code(),
            "UNSUPPORTED_SHAPE"
        );
    }

    #[test]
    fn test_field_attribution() {
        let error = RocketError::invalid_parameter("coefficient", "1.5", "out of range");
        assert_eq!(error.field(), Some("coefficient"));
        assert!(error.is_validation());

        let error = RocketError::invalid_shape("Nose cone");
        assert_eq!(error.field(), None);
        assert!(!error.is_validation());
    }
}
