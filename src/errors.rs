// ABOUTME: Verification error type returned by the plan verifier
// ABOUTME: Wraps validation, structural, and strict-mode safety failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error handling for the verification pipeline
//!
//! Fatal outcomes are returned as [`VerifyError`]; everything non-fatal travels as a
//! [`Warning`] inside the result. At the binary boundary every error converts into
//! an [`AppError`] with a stable [`ErrorCode`].

use thiserror::Error;
use wellplan_core::models::Warning;

pub use wellplan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, StructuralError, ValidationError,
};

/// Fatal outcome of a verification call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Malformed profile or intake, or ids that do not agree
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Plan violates structural invariants
    #[error("plan is structurally invalid: {}", summarize(.0))]
    Structural(Vec<StructuralError>),

    /// Strict safety mode found avoid-severity contraindications
    #[error("plan schedules {} avoid-severity item(s)", .hits.len())]
    UnsafePlan {
        /// The avoid-severity findings
        hits: Vec<Warning>,
    },
}

impl From<Vec<StructuralError>> for VerifyError {
    fn from(errors: Vec<StructuralError>) -> Self {
        Self::Structural(errors)
    }
}

fn summarize(errors: &[StructuralError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<VerifyError> for AppError {
    fn from(error: VerifyError) -> Self {
        match error {
            VerifyError::Validation(e) => e.into(),
            VerifyError::Structural(errors) => errors.into(),
            VerifyError::UnsafePlan { hits } => {
                let messages: Vec<&str> = hits.iter().map(|hit| hit.message.as_str()).collect();
                Self::new(
                    ErrorCode::UnsafePlan,
                    format!("{} avoid-severity contraindication(s)", hits.len()),
                )
                .with_details(serde_json::json!({ "hits": messages }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellplan_core::models::{Severity, WarningCode};

    #[test]
    fn test_structural_message_lists_every_violation() {
        let error = VerifyError::from(vec![
            StructuralError::NoWeeks,
            StructuralError::MissingHabits { week: 1, day: 2 },
        ]);
        let text = error.to_string();
        assert!(text.contains("no weeks"));
        assert!(text.contains(';'));
    }

    #[test]
    fn test_unsafe_plan_maps_to_app_error() {
        let hit = Warning::new(WarningCode::Contraindication, "pcod restricts high_sugar")
            .with_severity(Severity::Avoid);
        let app: AppError = VerifyError::UnsafePlan { hits: vec![hit] }.into();
        assert_eq!(app.code, ErrorCode::UnsafePlan);
        assert_eq!(app.exit_code(), 4);
        assert_eq!(app.details["hits"][0], "pcod restricts high_sugar");
    }
}
