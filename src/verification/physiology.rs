// ABOUTME: Derived physiological metrics: BMI, BMR, TDEE, calorie and hydration targets
// ABOUTME: Revised Harris-Benedict BMR with activity, goal, and regional adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological metrics derived from a profile snapshot
//!
//! Every function here is pure; metrics are recomputed on every verification
//! call and never stored. Inputs are already range-checked by the normalizer.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalOffsetsConfig, NutritionConfig,
    RegionMultipliersConfig,
};
use wellplan_core::models::{ActivityLevel, DerivedMetrics, Gender, Profile, Region};

/// Body mass index: `weight_kg / height_m²`
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate (kcal/day), revised Harris-Benedict
///
/// Formula:
/// - Men: `88.362 + 13.397×W + 4.799×H − 5.677×A`
/// - Women: `447.593 + 9.247×W + 3.098×H − 4.33×A`
/// - Other: mean of both with the same W/H/A
///
/// # Reference
/// Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
#[must_use]
pub fn calculate_bmr(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    config: &BmrConfig,
) -> f64 {
    let age = f64::from(age);
    let male = config.male_weight_coef.mul_add(
        weight_kg,
        config
            .male_height_coef
            .mul_add(height_cm, (-config.male_age_coef).mul_add(age, config.male_constant)),
    );
    let female = config.female_weight_coef.mul_add(
        weight_kg,
        config
            .female_height_coef
            .mul_add(
                height_cm,
                (-config.female_age_coef).mul_add(age, config.female_constant),
            ),
    );
    match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Other => (male + female) / 2.0,
    }
}

/// Total daily energy expenditure: `bmr × activity_factor`
///
/// # Reference
/// `McArdle` et al. (2010) - Exercise Physiology
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };
    bmr * activity_factor
}

/// Daily kcal offset for a goal; unknown goals contribute nothing
#[must_use]
pub fn goal_offset(goal: Option<&str>, config: &GoalOffsetsConfig) -> f64 {
    match goal {
        Some("fat_loss") => config.fat_loss,
        Some("lean_gain") => config.lean_gain,
        Some("maintenance") => config.maintenance,
        Some("pcod_remission") => config.pcod_remission,
        Some("stress_balance") => config.stress_balance,
        _ => 0.0,
    }
}

/// Regional multiplier for energy and hydration targets
#[must_use]
pub const fn region_multiplier(region: Region, config: &RegionMultipliersConfig) -> f64 {
    match region {
        Region::India => config.india,
        Region::UnitedStates => config.united_states,
        Region::Europe => config.europe,
        Region::Global => config.global,
    }
}

/// Daily calorie target: `max(floor, round((tdee + goal_offset) × region_multiplier))`
#[must_use]
pub fn calculate_calorie_target(
    tdee: f64,
    goal: Option<&str>,
    region: Region,
    config: &NutritionConfig,
) -> u32 {
    let adjusted = (tdee + goal_offset(goal, &config.goal_offsets))
        * region_multiplier(region, &config.region_multipliers);
    (adjusted.round().max(0.0) as u32).max(config.calorie_floor_kcal)
}

/// Daily hydration target: `round(max(ml_per_kg × weight_kg, floor) × region_multiplier)`
#[must_use]
pub fn calculate_hydration_target(weight_kg: f64, region: Region, config: &NutritionConfig) -> u32 {
    let base = (config.hydration_ml_per_kg * weight_kg).max(config.hydration_floor_ml);
    (base * region_multiplier(region, &config.region_multipliers))
        .round()
        .max(0.0) as u32
}

/// All derived metrics for a profile and its primary goal
#[must_use]
pub fn derive_metrics(
    profile: &Profile,
    primary_goal: Option<&str>,
    config: &NutritionConfig,
) -> DerivedMetrics {
    let bmr = calculate_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    DerivedMetrics {
        bmi: calculate_bmi(profile.weight_kg, profile.height_cm),
        bmr,
        tdee,
        calorie_target: calculate_calorie_target(tdee, primary_goal, profile.region, config),
        hydration_target_ml: calculate_hydration_target(profile.weight_kg, profile.region, config),
    }
}
