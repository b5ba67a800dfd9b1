// ABOUTME: Validation failures for malformed profile and intake input
// ABOUTME: Raised by the normalizer before any verification logic runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use std::fmt::Display;
use thiserror::Error;

/// Malformed profile or intake input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric field outside its documented range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Offending field path
        field: String,
        /// Rejected value
        value: String,
        /// Inclusive lower bound
        min: String,
        /// Inclusive upper bound
        max: String,
    },

    /// Enumerated field carries an unrecognized value
    #[error("unrecognized {field} value '{value}'")]
    UnknownVariant {
        /// Offending field path
        field: String,
        /// Rejected value
        value: String,
    },

    /// Required text field is blank
    #[error("{field} must not be empty")]
    Empty {
        /// Offending field path
        field: String,
    },

    /// Collection has too few or too many entries
    #[error("{field} must contain between {min} and {max} entries, got {count}")]
    InvalidCount {
        /// Offending field path
        field: String,
        /// Entries supplied
        count: usize,
        /// Minimum entries
        min: usize,
        /// Maximum entries
        max: usize,
    },

    /// Profile id referenced by the intake or plan does not match the profile
    #[error("{field} '{found}' does not match profile id '{expected}'")]
    IdMismatch {
        /// Field carrying the foreign id
        field: String,
        /// Id of the profile being verified
        expected: String,
        /// Id found on the input
        found: String,
    },
}

impl ValidationError {
    /// Build an [`ValidationError::OutOfRange`] from displayable bounds
    pub fn out_of_range(
        field: impl Into<String>,
        value: impl Display,
        min: impl Display,
        max: impl Display,
    ) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Build an [`ValidationError::UnknownVariant`]
    pub fn unknown_variant(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Error code reported for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfRange { .. } | Self::InvalidCount { .. } => ErrorCode::ValueOutOfRange,
            Self::UnknownVariant { .. } => ErrorCode::InvalidFormat,
            Self::Empty { .. } => ErrorCode::MissingRequiredField,
            Self::IdMismatch { .. } => ErrorCode::InvalidInput,
        }
    }
}
