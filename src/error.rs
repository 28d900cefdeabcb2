//! Error types for the Ohm circuit model.
//!
//! This module provides a unified error type [`OhmError`] covering invalid
//! physical parameters, unparsable user input, sweep configuration and
//! report output. Infinite or NaN results of a calculation are never errors;
//! they are returned as plain `f64` values.

use thiserror::Error;

/// Result type alias using [`OhmError`].
pub type Result<T> = std::result::Result<T, OhmError>;

/// Unified error type for all Ohm operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OhmError {
    // ============ Model Errors ============
    /// A numeric precondition of a circuit element was violated
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // ============ Input Errors ============
    /// Text entered for a field is not a number
    #[error("Invalid number '{input}' for field '{field}'")]
    InvalidNumber { field: String, input: String },

    // ============ Sweep Errors ============
    /// Invalid sweep configuration
    #[error("Invalid sweep configuration: {message}")]
    InvalidSweepConfig { message: String },

    // ============ I/O Errors ============
    /// Error writing a report
    #[error("Output error: {message}")]
    OutputError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl OhmError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Create an invalid sweep configuration error
    pub fn invalid_sweep(message: impl Into<String>) -> Self {
        Self::InvalidSweepConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = OhmError::invalid_parameter("emf", "EMF is lesser than zero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'emf': EMF is lesser than zero"
        );
    }

    #[test]
    fn test_invalid_number_message() {
        let err = OhmError::invalid_number("max resistance", "12k");
        assert_eq!(
            err.to_string(),
            "Invalid number '12k' for field 'max resistance'"
        );
    }
}
