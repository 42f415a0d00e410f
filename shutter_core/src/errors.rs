//! # Error Types
//!
//! Structured error types for shutter_core. The engine fails on an unusable
//! area or on a quantity too large to count; the rest cover the settings and
//! export file helpers.
//!
//! ## Example
//!
//! ```rust
//! use shutter_core::errors::{CalcError, CalcResult};
//!
//! fn check_area(total_area: f64) -> CalcResult<()> {
//!     if !(total_area > 0.0) {
//!         return Err(CalcError::invalid_area(total_area, "Area must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_area(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shutter_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Total area is zero, negative, NaN or infinite
    #[error("Invalid area: {value} - {reason}")]
    InvalidArea { value: String, reason: String },

    /// Any other input or settings value is invalid
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// A material quantity does not fit in a whole-unit count
    #[error("Quantity overflow: {value} exceeds {limit}")]
    QuantityOverflow { value: String, limit: u64 },
}

impl CalcError {
    /// Create an InvalidArea error
    pub fn invalid_area(value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidArea {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a QuantityOverflow error
    pub fn quantity_overflow(value: impl ToString, limit: u64) -> Self {
        CalcError::QuantityOverflow {
            value: value.to_string(),
            limit,
        }
    }

    /// True for errors caused by the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidArea { .. } | CalcError::InvalidInput { .. } | CalcError::QuantityOverflow { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidArea { .. } => "INVALID_AREA",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::QuantityOverflow { .. } => "QUANTITY_OVERFLOW",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_area(-5.0, "Area must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidArea\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_area(0.0, "zero").error_code(), "INVALID_AREA");
        assert_eq!(
            CalcError::invalid_input("slabHeight", "-1", "must be positive").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(CalcError::serialization("bad json").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::quantity_overflow(1e300, 10).error_code(), "QUANTITY_OVERFLOW");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::invalid_area(f64::NAN, "not a number").is_input_error());
        assert!(!CalcError::file_error("write", "out.json", "denied").is_input_error());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::invalid_area(0.0, "Area must be positive");
        assert_eq!(error.to_string(), "Invalid area: 0 - Area must be positive");
    }
}
