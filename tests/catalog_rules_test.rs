// ABOUTME: Integration tests for catalogs and rule tables as seen by the verifier
// ABOUTME: File-loaded catalogs, catalog tag propagation, flag tie-breaks, and allergy aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{clean_plan, intake, meal, profile, raw_profile, verifier, yoga};
use std::fs;
use std::sync::Arc;
use wellplan::config::VerifierConfig;
use wellplan::models::{Severity, WarningCode};
use wellplan::verification::{normalize_profile, PlanVerifier};
use wellplan_rules::{is_allergy_blocked, lookup_restrictions, Catalog, Catalogs};

#[test]
fn test_allergy_aliases() {
    assert!(is_allergy_blocked(["nuts"], "Roasted Almond Oats"));
    assert!(!is_allergy_blocked(["dairy"], "Oats with Banana"));
    assert!(is_allergy_blocked(["peanuts", "dairy"], "Peanut chikki"));
    assert!(is_allergy_blocked(["Gluten"], "Whole wheat roti"));
    assert!(is_allergy_blocked(["kiwi"], "Kiwi smoothie"));
}

#[test]
fn test_first_flag_wins_for_shared_tags() {
    let restrictions = lookup_restrictions(["pcod", "glaucoma"]);
    let inversions_long = restrictions
        .iter()
        .find(|r| r.activity_tag == "inversions_long")
        .unwrap();
    assert_eq!(inversions_long.flag, "glaucoma");
    assert_eq!(inversions_long.severity, Severity::Avoid);

    let high_sugar = restrictions
        .iter()
        .find(|r| r.activity_tag == "high_sugar")
        .unwrap();
    assert_eq!(high_sugar.flag, "pcod");
}

#[test]
fn test_catalog_tags_drive_contraindications() {
    let mut raw = raw_profile();
    raw.medical_flags = vec!["Glaucoma".to_owned(), "PCOS".to_owned()];
    let member = normalize_profile(&raw).unwrap();
    let intake = intake(&member);

    let mut plan = clean_plan(1);
    plan.weeks[0].days[0].yoga[0] = yoga("yoga_013", "Headstand Practice", common::ACTIVE_MINUTES);

    let result = verifier().verify(&member, &intake, plan).unwrap();
    let hits: Vec<_> = result
        .findings
        .iter()
        .filter(|f| f.code == WarningCode::Contraindication)
        .collect();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| hit.severity == Some(Severity::Avoid)));
    assert!(hits.iter().all(|hit| hit.message.contains("glaucoma")));
    assert!((result.quality_score.safety - 0.90).abs() < 1e-9);
}

#[test]
fn test_hypertension_flags_salty_meal() {
    let mut raw = raw_profile();
    raw.medical_flags = vec!["high blood pressure".to_owned()];
    let member = normalize_profile(&raw).unwrap();
    let intake = intake(&member);

    let mut plan = clean_plan(1);
    plan.weeks[0].days[6].meals[1] =
        meal("lunch", "Mixed Pickle Thali", "food_017", "Vegetable Khichdi");

    let result = verifier().verify(&member, &intake, plan).unwrap();
    let hit = result
        .findings
        .iter()
        .find(|f| f.code == WarningCode::Contraindication)
        .unwrap();
    assert!(hit.message.contains("hypertension restricts high_sodium"));
    assert_eq!(hit.severity, Some(Severity::Avoid));
    assert_eq!(hit.day, Some(7));
}

#[test]
fn test_verifier_uses_file_catalogs() {
    let dir = tempfile::tempdir().unwrap();
    let yoga_path = dir.path().join("yoga.yaml");
    fs::write(
        &yoga_path,
        "- id: flow_a\n  name: Gentle Flow\n  tags: [flow]\n  duration_min: 30\n",
    )
    .unwrap();
    let food_path = dir.path().join("foods.json");
    fs::write(
        &food_path,
        r#"[
            {"id": "food_001", "name": "Vegetable Poha", "tags": ["vegan"]},
            {"id": "food_005", "name": "Oats with Banana", "tags": ["vegan"]},
            {"id": "food_007", "name": "Masoor Dal", "tags": ["vegan", "fried_food"]}
        ]"#,
    )
    .unwrap();

    let mut catalogs = Catalogs::builtin().unwrap();
    catalogs.yoga = Catalog::from_path(&yoga_path).unwrap();
    catalogs.foods = Catalog::from_path(&food_path).unwrap();
    let verifier = PlanVerifier::new(VerifierConfig::default(), Arc::new(catalogs));

    let member = profile();
    let intake = intake(&member);
    let result = verifier.verify(&member, &intake, clean_plan(1)).unwrap();

    // yoga_001 is not in the file catalog; food_007 now carries fried_food
    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Unknown yoga flow yoga_001"));
    let fried = result
        .findings
        .iter()
        .filter(|f| f.message.contains("fried_food"))
        .count();
    assert_eq!(fried, 7);
}
