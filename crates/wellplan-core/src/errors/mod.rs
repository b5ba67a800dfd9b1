// ABOUTME: Unified error handling with error codes, context details, and exit status mapping
// ABOUTME: Hosts the typed validation and structural failures raised by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The engine raises two typed, fatal failure families:
//!
//! - [`ValidationError`] for malformed profile/intake input, rejected before any
//!   verification logic runs
//! - [`StructuralError`] for candidate plans that break a structural invariant
//!
//! Both convert into [`AppError`], which carries a stable [`ErrorCode`] and is what
//! binaries and other outer layers report.

mod structural;
mod validation;

pub use structural::StructuralError;
pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be interpreted
    InvalidInput = 3000,
    /// A required field is missing
    MissingRequiredField = 3001,
    /// Input is not in the expected format
    InvalidFormat = 3002,
    /// Numeric input is outside its documented range
    ValueOutOfRange = 3003,

    // Plan verification (4000-4999)
    /// Candidate plan violates a structural invariant
    StructuralViolation = 4000,
    /// Candidate plan rejected in strict safety mode
    UnsafePlan = 4001,
    /// A referenced resource (catalog file, entry) was not found
    ResourceNotFound = 4002,

    // Configuration (6000-6999)
    /// Configuration error encountered
    ConfigError = 6000,
    /// Configuration values are inconsistent
    ConfigInvalid = 6001,

    // Internal (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Reading input or catalog data failed
    StorageError = 9001,
    /// Serialization or deserialization failed
    SerializationError = 9002,
}

impl ErrorCode {
    /// Process exit status the command-line front end reports for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 2,
            Self::StructuralViolation => 3,
            Self::UnsafePlan => 4,
            Self::ConfigError | Self::ConfigInvalid => 5,
            Self::ResourceNotFound | Self::StorageError | Self::SerializationError => 6,
            Self::InternalError => 1,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::StructuralViolation => "The candidate plan violates a structural invariant",
            Self::UnsafePlan => "The candidate plan contains avoid-severity contraindications",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Reading input data failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the engine's outer layers
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error report written by the command-line front end
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured context, omitted when empty
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<Vec<StructuralError>> for AppError {
    fn from(errors: Vec<StructuralError>) -> Self {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Self::new(
            ErrorCode::StructuralViolation,
            format!("{} structural violation(s)", errors.len()),
        )
        .with_details(serde_json::json!({ "violations": messages }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 2);
        assert_eq!(ErrorCode::StructuralViolation.exit_code(), 3);
        assert_eq!(ErrorCode::UnsafePlan.exit_code(), 4);
        assert_eq!(ErrorCode::InternalError.exit_code(), 1);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::StructuralViolation).unwrap();
        assert_eq!(json, "\"STRUCTURAL_VIOLATION\"");
    }

    #[test]
    fn test_structural_errors_collapse_into_details() {
        let error: AppError = vec![StructuralError::NoWeeks].into();
        assert_eq!(error.code, ErrorCode::StructuralViolation);
        assert_eq!(error.details["violations"][0], "plan contains no weeks");

        let response = ErrorResponse::from(error);
        assert_eq!(response.error.code, ErrorCode::StructuralViolation);
    }
}
