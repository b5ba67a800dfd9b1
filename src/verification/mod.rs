// ABOUTME: Plan verification pipeline from normalized inputs to a scored, annotated result
// ABOUTME: Structure first, then safety, diet, progression, and catalog checks, then scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Verification
//!
//! [`PlanVerifier`] is a pure decision function over a profile, its normalized
//! intake, and a candidate plan. It performs no I/O; catalogs and rule tables
//! are loaded before the verifier is built and shared read-only, so a single
//! verifier can serve concurrent calls.

/// Profile and intake normalization
pub mod normalizer;

/// Derived physiological metrics
pub mod physiology;

/// Progression and rest cadence limits
pub mod progression;

/// Contraindication, allergy, diet, and target checks
pub mod safety;

/// Structural validation and catalog cross-referencing
pub mod schema;

/// Four-axis quality scoring
pub mod scorer;

use crate::config::{ReferencePolicy, SafetyMode, VerifierConfig};
use crate::errors::VerifyError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wellplan_core::errors::ValidationError;
use wellplan_core::models::{
    Citation, NormalizedIntake, Plan, Profile, RawIntake, RawProfile, VerifierResult, Warning,
};
use wellplan_rules::{CatalogError, Catalogs};

pub use normalizer::{normalize_intake, normalize_profile};
pub use physiology::derive_metrics;
pub use progression::{compute_limits, ActivityLimits, PlanType};
pub use schema::{cross_reference_catalogs, validate_structure};
pub use scorer::score;

/// Raw inputs for one verification, as read from a request document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Member profile
    pub profile: RawProfile,
    /// Intake form
    pub intake: RawIntake,
    /// Candidate plan
    pub plan: Plan,
}

/// Verifies candidate plans against one configuration and one set of catalogs
#[derive(Debug, Clone)]
pub struct PlanVerifier {
    config: VerifierConfig,
    catalogs: Arc<Catalogs>,
}

impl PlanVerifier {
    /// Create a verifier over already-loaded catalogs
    #[must_use]
    pub const fn new(config: VerifierConfig, catalogs: Arc<Catalogs>) -> Self {
        Self { config, catalogs }
    }

    /// Create a verifier over the built-in catalogs
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog data is inconsistent
    pub fn with_builtin_catalogs(config: VerifierConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(config, Arc::new(Catalogs::builtin()?)))
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Catalogs references are resolved against
    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Verify a candidate plan
    ///
    /// # Errors
    ///
    /// - [`VerifyError::Validation`] if the intake or plan names another profile
    /// - [`VerifyError::Structural`] if the plan breaks a structural invariant, or
    ///   references unknown catalog ids under the fatal reference policy
    /// - [`VerifyError::UnsafePlan`] in strict safety mode when any avoid-severity
    ///   contraindication is scheduled
    pub fn verify(
        &self,
        profile: &Profile,
        intake: &NormalizedIntake,
        plan: Plan,
    ) -> Result<VerifierResult, VerifyError> {
        check_ids(profile, intake, &plan)?;

        let structure_warnings = validate_structure(&plan).map_err(|errors| {
            debug!(plan_id = %plan.id, violations = errors.len(), "Plan failed structural validation");
            VerifyError::Structural(errors)
        })?;

        let unknown =
            schema::find_unknown_references(&plan, &self.catalogs.yoga, &self.catalogs.foods);
        if self.config.reference_policy == ReferencePolicy::Fatal && !unknown.is_empty() {
            debug!(plan_id = %plan.id, unknown = unknown.len(), "Unknown catalog references are fatal");
            return Err(VerifyError::Structural(
                unknown.into_iter().map(schema::UnknownReference::into_error).collect(),
            ));
        }

        let primary_goal = intake.primary_goal().map(|goal| goal.name.as_str());
        let metrics = derive_metrics(profile, primary_goal, &self.config.nutrition);
        debug!(
            profile_id = %profile.id,
            bmr = metrics.bmr,
            calorie_target = metrics.calorie_target,
            hydration_target_ml = metrics.hydration_target_ml,
            "Derived metrics"
        );

        let progression_config = &self.config.progression;
        let days: Vec<_> = plan.days().collect();
        let mut findings: Vec<Warning> = Vec::new();
        findings.extend(safety::check_contraindications(&plan, profile, &self.catalogs));
        findings.extend(safety::check_meals(&plan, profile, &self.catalogs));
        findings.extend(safety::check_targets(&plan, &metrics, &self.config.nutrition));
        findings.extend(progression::validate_weekly_progression(
            &plan.weeks,
            progression_config,
        ));
        findings.extend(progression::enforce_rest_cadence(&days, progression_config));
        findings.extend(progression::check_plan_limits(
            &plan,
            profile,
            intake,
            progression_config,
        ));
        findings.extend(structure_warnings);
        findings.extend(unknown.iter().map(schema::UnknownReference::to_warning));

        if self.config.safety_mode == SafetyMode::Strict {
            let hits: Vec<Warning> = findings
                .iter()
                .filter(|finding| finding.is_avoid_hit())
                .cloned()
                .collect();
            if !hits.is_empty() {
                warn!(
                    plan_id = %plan.id,
                    profile_id = %profile.id,
                    hits = hits.len(),
                    "Strict mode rejected plan with avoid-severity contraindications"
                );
                return Err(VerifyError::UnsafePlan { hits });
            }
        }

        let quality_score = score(&findings, &self.config.scoring);
        let citations = distinct_citations(&plan);
        info!(
            plan_id = %plan.id,
            profile_id = %profile.id,
            warnings = findings.len(),
            overall = quality_score.overall,
            "Plan verified"
        );

        Ok(VerifierResult {
            plan,
            metrics,
            warnings: findings.iter().map(|finding| finding.message.clone()).collect(),
            findings,
            citations,
            quality_score,
        })
    }

    /// Normalize raw inputs and verify the plan
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Validation`] for malformed profile or intake data,
    /// otherwise the errors of [`PlanVerifier::verify`].
    pub fn verify_request(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerifierResult, VerifyError> {
        let profile = normalize_profile(&request.profile)?;
        let intake = normalize_intake(&request.intake, &profile)?;
        self.verify(&profile, &intake, request.plan.clone())
    }

    /// Verify independent requests in parallel; results keep request order
    #[must_use]
    pub fn verify_batch(
        &self,
        requests: &[VerificationRequest],
    ) -> Vec<Result<VerifierResult, VerifyError>> {
        debug!(requests = requests.len(), "Verifying batch");
        requests
            .par_iter()
            .map(|request| self.verify_request(request))
            .collect()
    }
}

fn check_ids(
    profile: &Profile,
    intake: &NormalizedIntake,
    plan: &Plan,
) -> Result<(), ValidationError> {
    if intake.profile_id != profile.id {
        return Err(ValidationError::IdMismatch {
            field: "intake.profile_id".into(),
            expected: profile.id.clone(),
            found: intake.profile_id.clone(),
        });
    }
    if plan.meta.profile_id != profile.id {
        return Err(ValidationError::IdMismatch {
            field: "plan.meta.profile_id".into(),
            expected: profile.id.clone(),
            found: plan.meta.profile_id.clone(),
        });
    }
    Ok(())
}

/// Citations across the plan, one per card id, in first-occurrence order
fn distinct_citations(plan: &Plan) -> Vec<Citation> {
    let mut seen = HashSet::new();
    plan.days()
        .flat_map(|(_, day)| day.citations.iter())
        .filter(|citation| seen.insert(citation.card_id.as_str()))
        .cloned()
        .collect()
}
