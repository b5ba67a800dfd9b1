// ABOUTME: Verifier configuration module
// ABOUTME: Typed defaults with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Verifier settings and the process-wide instance
pub mod verifier;

pub use error::ConfigError;
pub use verifier::{
    ActivityFactorsConfig, BmrConfig, GoalOffsetsConfig, NutritionConfig, ProgressionConfig,
    ReferencePolicy, RegionMultipliersConfig, ScoringConfig, SafetyMode, VerifierConfig,
};
