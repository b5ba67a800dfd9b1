// ABOUTME: Four-axis quality scorer over verification findings
// ABOUTME: Fixed per-finding penalties per axis, floored at zero, overall is the mean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ScoringConfig;
use wellplan_core::models::{QualityScore, ScoreAxis, Severity, Warning};

/// Penalty a single finding costs its axis
#[must_use]
pub fn penalty_for(warning: &Warning, config: &ScoringConfig) -> f64 {
    match warning.axis() {
        ScoreAxis::Safety => match warning.severity {
            Some(Severity::Avoid) => config.avoid_penalty,
            _ => config.caution_penalty,
        },
        ScoreAxis::DietMatch => config.diet_penalty,
        ScoreAxis::Progression => config.progression_penalty,
        ScoreAxis::Structure => config.structure_penalty,
    }
}

/// Score a set of findings
///
/// Each axis starts at 1.0 and loses its penalty per finding, never going below
/// zero. `overall` is the equal-weighted mean of the four axes.
#[must_use]
pub fn score(warnings: &[Warning], config: &ScoringConfig) -> QualityScore {
    let (mut safety, mut diet_match, mut progression, mut structure) = (0.0, 0.0, 0.0, 0.0);
    for warning in warnings {
        let penalty = penalty_for(warning, config);
        match warning.axis() {
            ScoreAxis::Safety => safety += penalty,
            ScoreAxis::DietMatch => diet_match += penalty,
            ScoreAxis::Progression => progression += penalty,
            ScoreAxis::Structure => structure += penalty,
        }
    }

    let axis = |lost: f64| (1.0 - lost).clamp(0.0, 1.0);
    let (safety, diet_match, progression, structure) =
        (axis(safety), axis(diet_match), axis(progression), axis(structure));
    QualityScore {
        safety,
        diet_match,
        progression,
        structure,
        overall: (safety + diet_match + progression + structure) / 4.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellplan_core::models::WarningCode;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_findings_is_perfect() {
        assert_eq!(score(&[], &ScoringConfig::default()), QualityScore::perfect());
    }

    #[test]
    fn test_penalties_per_axis() {
        let warnings = vec![
            Warning::new(WarningCode::Contraindication, "a").with_severity(Severity::Avoid),
            Warning::new(WarningCode::Contraindication, "b").with_severity(Severity::Monitor),
            Warning::new(WarningCode::AllergyConflict, "c"),
            Warning::new(WarningCode::MissingDeload, "d"),
            Warning::new(WarningCode::UnknownFood, "e"),
        ];
        let result = score(&warnings, &ScoringConfig::default());
        assert!(approx(result.safety, 0.93));
        assert!(approx(result.diet_match, 0.97));
        assert!(approx(result.progression, 0.96));
        assert!(approx(result.structure, 0.98));
        assert!(approx(result.overall, (0.93 + 0.97 + 0.96 + 0.98) / 4.0));
    }

    #[test]
    fn test_axis_floors_at_zero() {
        let warnings: Vec<Warning> = (0..40)
            .map(|i| Warning::new(WarningCode::RestCadence, format!("streak {i}")))
            .collect();
        let result = score(&warnings, &ScoringConfig::default());
        assert!(approx(result.progression, 0.0));
        assert!(approx(result.overall, 0.75));
        assert!((0.0..=1.0).contains(&result.overall));
    }
}
