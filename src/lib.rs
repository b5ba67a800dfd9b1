// ABOUTME: Main library entry point for the wellplan verification engine
// ABOUTME: Normalizes member inputs and verifies candidate wellness plans for safety and progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellplan
//!
//! Safety verification and progression scoring for generated wellness plans.
//! A plan generator hands in a candidate multi-week plan of yoga, breathwork,
//! meals, habits, and sleep guidance; this crate decides whether the plan is
//! safe for the member's medical and dietary profile and scores its quality.
//!
//! ## Features
//!
//! - **Normalization**: raw profile and intake documents become canonical,
//!   range-checked values
//! - **Physiology**: BMI, BMR, TDEE, calorie and hydration targets
//! - **Safety**: contraindications, allergies, diet pattern, and avoided foods
//! - **Progression**: weekly load growth, deload weeks, rest cadence, session limits
//! - **Scoring**: four-axis quality score in `[0, 1]`
//!
//! ## Architecture
//!
//! - **`wellplan_core`**: errors, models, and constants shared by every crate
//! - **`wellplan_rules`**: static contraindication and allergy tables, catalogs
//! - **config**: verifier thresholds with environment overrides
//! - **verification**: the verification pipeline and [`PlanVerifier`]
//! - **logging**: structured logging setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wellplan::config::VerifierConfig;
//! use wellplan::verification::{PlanVerifier, VerificationRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let request: VerificationRequest =
//!     serde_json::from_str(&std::fs::read_to_string("request.json")?)?;
//! let verifier = PlanVerifier::with_builtin_catalogs(VerifierConfig::global().clone())?;
//! let result = verifier.verify_request(&request)?;
//! println!("overall score: {:.2}", result.quality_score.overall);
//! # Ok(())
//! # }
//! ```

/// Verifier configuration with environment overrides
pub mod config;

/// Error types for the verification pipeline
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Normalization, checks, scoring, and the plan verifier
pub mod verification;

pub use errors::{AppError, AppResult, ErrorCode, VerifyError};
pub use verification::{PlanVerifier, VerificationRequest};
pub use wellplan_core::models;
