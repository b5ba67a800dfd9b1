// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging plus profile, intake, and plan builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `wellplan`
//!
//! The fixture member is a 30 year old woman (70 kg, 165 cm, moderately active,
//! vegan, allergic to nuts) managing PCOD. The fixture plan is clean for her: it
//! produces no findings at all, so each test adds exactly the defect it checks.

use std::env;
use std::sync::Once;
use wellplan::config::VerifierConfig;
use wellplan::models::{
    BreathworkItem, CatalogRef, Citation, DayPlan, Habit, Macros, Meal, NormalizedIntake, Plan,
    PlanMeta, Profile, RawAvailability, RawDietary, RawDuration, RawGoal, RawIntake,
    RawPreferences, RawProfile, SleepBlock, WeekPlan, YogaItem,
};
use wellplan::verification::{normalize_intake, normalize_profile, PlanVerifier};

static INIT_LOGGER: Once = Once::new();

/// Profile id shared by every fixture
pub const MEMBER_ID: &str = "member_001";

/// Minutes of yoga on an active fixture day
pub const ACTIVE_MINUTES: u32 = 30;

/// Minutes of breathwork on a rest fixture day
pub const REST_MINUTES: u32 = 5;

/// Active days in each fixture week; the others are rest days
pub const ACTIVE_DAYS: [u32; 4] = [1, 2, 4, 6];

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn raw_profile() -> RawProfile {
    RawProfile {
        id: MEMBER_ID.to_owned(),
        name: "Asha Rao".to_owned(),
        gender: "F".to_owned(),
        age: 30,
        height_cm: 165.0,
        weight_kg: 70.0,
        region: "Global".to_owned(),
        medical_flags: vec!["pcod".to_owned()],
        activity_level: "moderate".to_owned(),
        dietary: RawDietary {
            diet_type: "vegan".to_owned(),
            allergies: vec!["nuts".to_owned()],
            avoid_items: Vec::new(),
            cuisine_pref: Some("Indian".to_owned()),
        },
        preferences: RawPreferences {
            tone: "encouraging".to_owned(),
            indoor_only: true,
        },
        availability: RawAvailability {
            days_per_week: 4,
            preferred_slots: vec!["morning".to_owned(), "evening".to_owned()],
        },
    }
}

pub fn raw_intake() -> RawIntake {
    RawIntake {
        profile_id: Some(MEMBER_ID.to_owned()),
        goals: vec![
            RawGoal {
                name: "PCOD Remission".to_owned(),
                target_metric: Some("cycle_regularity".to_owned()),
                priority: 1,
            },
            RawGoal {
                name: "stress_balance".to_owned(),
                target_metric: None,
                priority: 2,
            },
        ],
        duration: RawDuration {
            unit: "weeks".to_owned(),
            value: 8,
        },
        time_budget_min_per_day: 45,
        experience_level: "beginner".to_owned(),
        equipment: vec!["Mat".to_owned()],
        assumptions: Vec::new(),
    }
}

pub fn profile() -> Profile {
    normalize_profile(&raw_profile()).unwrap()
}

pub fn intake(profile: &Profile) -> NormalizedIntake {
    normalize_intake(&raw_intake(), profile).unwrap()
}

pub fn verifier() -> PlanVerifier {
    init_test_logging();
    PlanVerifier::with_builtin_catalogs(VerifierConfig::default()).unwrap()
}

pub fn meal(slot: &str, name: &str, catalog_id: &str, swap: &str) -> Meal {
    Meal {
        slot: slot.to_owned(),
        name: name.to_owned(),
        catalog_id: CatalogRef::Resolved(catalog_id.to_owned()),
        ingredients: Vec::new(),
        macros: Macros {
            kcal: 500.0,
            protein_g: 20.0,
            carbs_g: 70.0,
            fat_g: 12.0,
        },
        tags: vec!["vegan".to_owned()],
        safe_swaps: vec![swap.to_owned()],
    }
}

pub fn yoga(catalog_id: &str, name: &str, minutes: u32) -> YogaItem {
    YogaItem {
        catalog_id: CatalogRef::Resolved(catalog_id.to_owned()),
        name: name.to_owned(),
        duration_min: minutes,
        tags: Vec::new(),
    }
}

pub fn breathwork(minutes: u32) -> BreathworkItem {
    BreathworkItem {
        name: "Nadi Shodhana".to_owned(),
        duration_min: minutes,
        tags: Vec::new(),
    }
}

/// A day with `yoga_minutes` of Sun Salutation, or `breath_minutes` of breathwork when no yoga
pub fn day(day_index: u32, yoga_minutes: u32, breath_minutes: u32) -> DayPlan {
    let card = if day_index % 2 == 1 { "card_001" } else { "card_002" };
    DayPlan {
        day_index,
        theme: "Steady practice".to_owned(),
        yoga: if yoga_minutes > 0 {
            vec![yoga("yoga_001", "Sun Salutation A", yoga_minutes)]
        } else {
            Vec::new()
        },
        breathwork: if breath_minutes > 0 {
            vec![breathwork(breath_minutes)]
        } else {
            Vec::new()
        },
        habits: vec![Habit {
            title: "Morning sunlight walk".to_owned(),
            detail: None,
        }],
        meals: vec![
            meal("breakfast", "Vegetable Poha", "food_001", "Ragi Dosa"),
            meal("lunch", "Masoor Dal with Brown Rice", "food_007", "Vegetable Khichdi"),
            meal("dinner", "Oats with Banana", "food_005", "Besan Chilla"),
        ],
        hydration_ml_target: 2500,
        sleep: vec![SleepBlock {
            wind_down_min: 30,
            tip: "Dim the lights an hour before bed".to_owned(),
            target_hours: 8.0,
        }],
        time_allocated_min: 40,
        citations: vec![Citation {
            card_id: card.to_owned(),
            source_url: format!("https://cards.example.org/{card}"),
            title: "Yoga and PCOD".to_owned(),
        }],
    }
}

/// Seven days: active days carry `active_minutes` of yoga, rest days short breathwork
pub fn week(week_index: u32, is_deload: bool, active_minutes: u32) -> WeekPlan {
    WeekPlan {
        week_index,
        focus: "Foundations".to_owned(),
        progression_note: String::new(),
        is_deload,
        days: (1..=7)
            .map(|d| {
                if ACTIVE_DAYS.contains(&d) {
                    day(d, active_minutes, 0)
                } else {
                    day(d, 0, REST_MINUTES)
                }
            })
            .collect(),
    }
}

/// Weekly load of a fixture week
pub const fn week_load(active_minutes: u32) -> u32 {
    active_minutes * ACTIVE_DAYS.len() as u32 + REST_MINUTES * (7 - ACTIVE_DAYS.len() as u32)
}

pub fn plan(weeks: Vec<WeekPlan>) -> Plan {
    Plan {
        id: "plan_001".to_owned(),
        meta: PlanMeta {
            profile_id: MEMBER_ID.to_owned(),
            goals: vec!["pcod_remission".to_owned()],
            duration_days: weeks.len() as u32 * 7,
            weeks: weeks.len() as u32,
            kcal_target: 2000,
            hydration_ml_target: 2500,
            assumptions: Vec::new(),
        },
        weeks,
    }
}

/// Clean plan of `n` weeks; every fourth week is a correctly reduced deload
pub fn clean_plan(n: u32) -> Plan {
    plan(
        (1..=n)
            .map(|w| {
                if w % 4 == 0 {
                    week(w, true, 15)
                } else {
                    week(w, false, ACTIVE_MINUTES)
                }
            })
            .collect(),
    )
}
