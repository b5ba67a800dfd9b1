// ABOUTME: Integration tests for profile and intake normalization
// ABOUTME: Validates canonicalization, documented ranges, and the lossless profile round-trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{profile, raw_intake, raw_profile};
use wellplan::errors::{ErrorCode, ValidationError};
use wellplan::models::{
    ActivityLevel, DietType, DurationUnit, ExperienceLevel, Gender, Profile, RawDietary, RawGoal,
    RawIntake, RawPreferences, RawProfile, Region,
};
use wellplan::verification::{normalize_intake, normalize_profile};

fn round_trip(profile: &Profile) -> Profile {
    let wire = serde_json::to_value(profile).unwrap();
    let raw: RawProfile = serde_json::from_value(wire).unwrap();
    normalize_profile(&raw).unwrap()
}

#[test]
fn test_profile_is_canonicalized() {
    let mut raw = raw_profile();
    raw.gender = " female ".to_owned();
    raw.region = "india".to_owned();
    raw.activity_level = "Moderately Active".to_owned();
    raw.medical_flags = vec!["PCOS".to_owned(), " pcod ".to_owned(), "High BP".to_owned()];
    raw.dietary.allergies = vec!["Nuts".to_owned(), "nuts ".to_owned()];
    raw.dietary.cuisine_pref = Some("   ".to_owned());
    raw.availability.preferred_slots = vec!["Morning".to_owned(), "morning".to_owned()];

    let profile = normalize_profile(&raw).unwrap();

    assert_eq!(profile.gender, Gender::Female);
    assert_eq!(profile.region, Region::India);
    assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    assert_eq!(profile.dietary.diet_type, DietType::Vegan);
    let flags: Vec<&str> = profile.medical_flags.iter().map(String::as_str).collect();
    assert_eq!(flags, vec!["hypertension", "pcod"]);
    assert_eq!(profile.dietary.allergies.len(), 1);
    assert_eq!(profile.dietary.cuisine_pref, None);
    assert_eq!(profile.availability.preferred_slots, vec!["morning".to_owned()]);
}

#[test]
fn test_profile_round_trip_is_lossless() {
    let fixture = profile();
    assert_eq!(round_trip(&fixture), fixture);

    let mut raw = raw_profile();
    raw.gender = "Other".to_owned();
    raw.region = "EU".to_owned();
    raw.activity_level = "very_active".to_owned();
    raw.age = 100;
    raw.height_cm = 120.0;
    raw.weight_kg = 199.5;
    raw.medical_flags.clear();
    raw.dietary = RawDietary::default();
    raw.preferences = RawPreferences::default();
    let edge = normalize_profile(&raw).unwrap();
    assert_eq!(edge.dietary.diet_type, DietType::Omnivore);
    assert_eq!(edge.preferences.tone, "balanced");
    assert_eq!(round_trip(&edge), edge);
}

#[test]
fn test_profile_ranges_are_inclusive() {
    let mut raw = raw_profile();
    raw.age = 10;
    raw.height_cm = 220.0;
    raw.weight_kg = 30.0;
    assert!(normalize_profile(&raw).is_ok());

    raw.age = 101;
    let err = normalize_profile(&raw).unwrap_err();
    assert!(matches!(&err, ValidationError::OutOfRange { field, .. } if field == "age"));
    assert_eq!(err.code(), ErrorCode::ValueOutOfRange);
}

fn rejected_field(mutate: impl FnOnce(&mut RawProfile)) -> String {
    let mut raw = raw_profile();
    mutate(&mut raw);
    match normalize_profile(&raw).unwrap_err() {
        ValidationError::OutOfRange { field, .. }
        | ValidationError::UnknownVariant { field, .. }
        | ValidationError::Empty { field } => field,
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_profile_rejects_bad_fields() {
    assert_eq!(rejected_field(|raw| raw.height_cm = 119.9), "height_cm");
    assert_eq!(rejected_field(|raw| raw.weight_kg = f64::NAN), "weight_kg");
    assert_eq!(rejected_field(|raw| raw.gender = "robot".to_owned()), "gender");
    assert_eq!(rejected_field(|raw| raw.region = "mars".to_owned()), "region");
    assert_eq!(
        rejected_field(|raw| raw.activity_level = "couch".to_owned()),
        "activity_level"
    );
    assert_eq!(
        rejected_field(|raw| raw.dietary.diet_type = "carnivore".to_owned()),
        "dietary.type"
    );
    assert_eq!(
        rejected_field(|raw| raw.availability.days_per_week = 8),
        "availability.days_per_week"
    );
    assert_eq!(rejected_field(|raw| raw.id = "  ".to_owned()), "id");
}

#[test]
fn test_intake_is_normalized() {
    let profile = profile();
    let intake = normalize_intake(&raw_intake(), &profile).unwrap();

    assert_eq!(intake.profile_id, profile.id);
    assert_eq!(intake.profile_snapshot, profile);
    assert_eq!(intake.goals[0].name, "pcod_remission");
    assert_eq!(intake.duration.unit, DurationUnit::Weeks);
    assert_eq!(intake.duration.total_days(), 56);
    assert_eq!(intake.experience_level, ExperienceLevel::Beginner);
    assert!(intake.equipment.contains("mat"));
    assert_eq!(intake.primary_goal().unwrap().name, "pcod_remission");
}

#[test]
fn test_primary_goal_ties_keep_member_order() {
    let profile = profile();
    let mut raw = raw_intake();
    for goal in &mut raw.goals {
        goal.priority = 2;
    }
    let intake = normalize_intake(&raw, &profile).unwrap();
    assert_eq!(intake.primary_goal().unwrap().name, "pcod_remission");
}

#[test]
fn test_intake_goal_count_bounds() {
    let profile = profile();

    let mut raw = raw_intake();
    raw.goals.clear();
    assert!(matches!(
        normalize_intake(&raw, &profile),
        Err(ValidationError::InvalidCount { count: 0, .. })
    ));

    raw.goals = (1..=6)
        .map(|i| RawGoal {
            name: format!("goal_{i}"),
            target_metric: None,
            priority: 3,
        })
        .collect();
    assert!(matches!(
        normalize_intake(&raw, &profile),
        Err(ValidationError::InvalidCount { count: 6, .. })
    ));

    raw.goals.truncate(5);
    assert!(normalize_intake(&raw, &profile).is_ok());
}

#[test]
fn test_intake_ranges() {
    let profile = profile();
    let check = |mutate: &dyn Fn(&mut RawIntake)| {
        let mut raw = raw_intake();
        mutate(&mut raw);
        normalize_intake(&raw, &profile)
    };

    assert!(check(&|raw: &mut RawIntake| raw.duration.value = 365).is_ok());
    assert!(check(&|raw: &mut RawIntake| raw.duration.value = 366).is_err());
    assert!(check(&|raw: &mut RawIntake| raw.duration.value = 0).is_err());
    assert!(check(&|raw: &mut RawIntake| raw.time_budget_min_per_day = 20).is_ok());
    assert!(check(&|raw: &mut RawIntake| raw.time_budget_min_per_day = 180).is_ok());
    assert!(check(&|raw: &mut RawIntake| raw.time_budget_min_per_day = 19).is_err());
    assert!(check(&|raw: &mut RawIntake| raw.time_budget_min_per_day = 181).is_err());
    assert!(check(&|raw: &mut RawIntake| raw.goals[0].priority = 6).is_err());
    assert!(check(&|raw: &mut RawIntake| raw.duration.unit = "fortnights".to_owned()).is_err());
}

#[test]
fn test_intake_for_other_profile_is_rejected() {
    let profile = profile();
    let mut raw = raw_intake();
    raw.profile_id = Some("member_777".to_owned());

    let err = normalize_intake(&raw, &profile).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    raw.profile_id = None;
    assert!(normalize_intake(&raw, &profile).is_ok());
}
