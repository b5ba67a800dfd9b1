// ABOUTME: Property tests for derived physiological metrics
// ABOUTME: BMR gender symmetry, hydration floor, calorie floor, and region multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use wellplan::config::{BmrConfig, NutritionConfig};
use wellplan::models::{Gender, Region};
use wellplan::verification::derive_metrics;
use wellplan::verification::physiology::{
    calculate_bmr, calculate_calorie_target, calculate_hydration_target,
};

#[test]
fn test_other_gender_bmr_is_mean_of_formulas() {
    let config = BmrConfig::default();
    for (weight, height, age) in [(30.0, 120.0, 10), (70.0, 165.0, 30), (200.0, 220.0, 100)] {
        let male = calculate_bmr(Gender::Male, weight, height, age, &config);
        let female = calculate_bmr(Gender::Female, weight, height, age, &config);
        let other = calculate_bmr(Gender::Other, weight, height, age, &config);
        assert!(
            (other - (male + female) / 2.0).abs() < 1e-9,
            "w={weight} h={height} a={age}"
        );
    }
}

#[test]
fn test_hydration_floor_and_per_kg_rate() {
    let config = NutritionConfig::default();
    let mut weight = 30.0;
    while weight <= 200.0 {
        let target = f64::from(calculate_hydration_target(weight, Region::Global, &config));
        if weight <= 57.0 {
            assert!(target >= 2000.0, "weight {weight} gave {target}");
        } else {
            assert!(target >= (35.0 * weight).floor(), "weight {weight} gave {target}");
        }
        weight += 0.5;
    }
}

#[test]
fn test_region_scales_hydration_after_floor() {
    let config = NutritionConfig::default();
    assert_eq!(calculate_hydration_target(50.0, Region::India, &config), 2100);
    assert_eq!(calculate_hydration_target(50.0, Region::Europe, &config), 1960);
    assert_eq!(calculate_hydration_target(80.0, Region::UnitedStates, &config), 2800);
}

#[test]
fn test_calorie_target_floor_holds_for_aggressive_deficits() {
    let config = NutritionConfig::default();
    assert_eq!(
        calculate_calorie_target(1300.0, Some("fat_loss"), Region::Europe, &config),
        1200
    );
    assert_eq!(
        calculate_calorie_target(2000.0, Some("lean_gain"), Region::UnitedStates, &config),
        2300
    );
    assert_eq!(
        calculate_calorie_target(2000.0, Some("unknown_goal"), Region::Global, &config),
        2000
    );
}

#[test]
fn test_fixture_member_metrics() {
    let profile = common::profile();
    let metrics = derive_metrics(&profile, Some("pcod_remission"), &NutritionConfig::default());

    assert!((metrics.bmi - 25.71).abs() < 0.01);
    assert!((metrics.bmr - 1476.153).abs() < 1e-6);
    assert!((metrics.tdee - 1476.153 * 1.55).abs() < 1e-6);
    assert_eq!(metrics.calorie_target, 2038);
    assert_eq!(metrics.hydration_target_ml, 2450);

    let maintenance = derive_metrics(&profile, None, &NutritionConfig::default());
    assert_eq!(maintenance.calorie_target, 2288);
}
