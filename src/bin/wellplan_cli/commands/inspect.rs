// ABOUTME: Rule and metric inspection commands for wellplan-cli
// ABOUTME: Prints derived metrics, session limits, restrictions, and allergy matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;
use std::path::Path;
use wellplan::config::VerifierConfig;
use wellplan::errors::{AppError, AppResult};
use wellplan::models::RawProfile;
use wellplan::verification::normalizer::canonical_goal_name;
use wellplan::verification::{compute_limits, derive_metrics, normalize_profile, PlanType};
use wellplan_rules::{lookup_restrictions, AllergyTable};

use crate::helpers::display::print_json;
use crate::helpers::input::read_document;

type Result<T> = AppResult<T>;

/// Print BMI, BMR, TDEE, and daily targets for a raw profile
pub fn metrics(path: &Path, goal: Option<&str>) -> Result<()> {
    let config = VerifierConfig::global();
    let raw: RawProfile = read_document(path)?;
    let profile = normalize_profile(&raw)?;
    let goal = goal.map(canonical_goal_name);
    let metrics = derive_metrics(&profile, goal.as_deref(), &config.nutrition);
    print_json(
        &json!({
            "profile_id": profile.id,
            "goal": goal,
            "metrics": metrics,
        }),
        true,
    )
}

/// Print session limits for a raw profile at a point in a program
pub fn limits(path: &Path, plan_type: &str, weeks_completed: u32) -> Result<()> {
    let plan_type = PlanType::parse(plan_type).ok_or_else(|| {
        AppError::invalid_input(format!(
            "unknown plan type '{plan_type}', expected general, strength, cardio or yoga"
        ))
    })?;
    let config = VerifierConfig::global();
    let raw: RawProfile = read_document(path)?;
    let profile = normalize_profile(&raw)?;
    let limits = compute_limits(&profile, plan_type, weeks_completed, &config.progression);
    print_json(
        &json!({
            "profile_id": profile.id,
            "plan_type": plan_type,
            "weeks_completed": weeks_completed,
            "limits": limits,
        }),
        true,
    )
}

/// Print the restriction set for medical flags
pub fn restrictions(flags: &[String]) -> Result<()> {
    print_json(&lookup_restrictions(flags), true)
}

/// Report whether an item is blocked by any of the allergies
pub fn allergy(allergies: &[String], item: &str) -> Result<()> {
    let table = AllergyTable::global();
    let unknown: Vec<&String> = allergies
        .iter()
        .filter(|allergy| !table.is_known(allergy))
        .collect();
    let hit = table.first_match(allergies, item);
    print_json(
        &json!({
            "item": item,
            "blocked": hit.is_some(),
            "allergy": hit.as_ref().map(|m| m.allergy.as_str()),
            "alias": hit.as_ref().map(|m| m.alias.as_str()),
            "substring_only": unknown,
        }),
        true,
    )
}
