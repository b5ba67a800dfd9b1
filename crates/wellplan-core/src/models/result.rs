// ABOUTME: Verification output models: derived metrics, quality score, and result
// ABOUTME: The result is immutable once produced; persistence belongs to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::findings::Warning;
use super::plan::{Citation, Plan};
use serde::{Deserialize, Serialize};

/// Physiological metrics derived from a profile snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal- and region-adjusted daily energy target (kcal)
    pub calorie_target: u32,
    /// Region-adjusted daily hydration target (ml)
    pub hydration_target_ml: u32,
}

/// Four-axis quality score, each axis in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Contraindication safety
    pub safety: f64,
    /// Dietary match
    pub diet_match: f64,
    /// Progression soundness
    pub progression: f64,
    /// Structural completeness
    pub structure: f64,
    /// Equal-weighted mean of the four axes
    pub overall: f64,
}

impl QualityScore {
    /// Score of a plan with no findings
    #[must_use]
    pub const fn perfect() -> Self {
        Self {
            safety: 1.0,
            diet_match: 1.0,
            progression: 1.0,
            structure: 1.0,
            overall: 1.0,
        }
    }
}

/// Outcome of verifying a candidate plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifierResult {
    /// The verified plan, unchanged
    pub plan: Plan,
    /// Metrics derived for the member during verification
    pub metrics: DerivedMetrics,
    /// Finding messages, in detection order
    pub warnings: Vec<String>,
    /// Structured findings, parallel to `warnings`
    pub findings: Vec<Warning>,
    /// Distinct citations across the plan, first occurrence order
    pub citations: Vec<Citation>,
    /// Quality score
    pub quality_score: QualityScore,
}
