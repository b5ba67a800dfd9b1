// ABOUTME: Deterministic verification request generators for benchmarks
// ABOUTME: Rotates catalog items and medical flags so checks exercise real matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss)]

use wellplan::models::{
    BreathworkItem, CatalogRef, Citation, DayPlan, Habit, Macros, Meal, Plan, PlanMeta,
    RawAvailability, RawDietary, RawDuration, RawGoal, RawIntake, RawPreferences, RawProfile,
    SleepBlock, WeekPlan, YogaItem,
};
use wellplan::VerificationRequest;

const YOGA: [(&str, &str); 4] = [
    ("yoga_001", "Sun Salutation A"),
    ("yoga_007", "Warrior Flow"),
    ("yoga_008", "Legs Up The Wall"),
    ("yoga_015", "Gentle Hip Openers"),
];

const FOODS: [(&str, &str); 6] = [
    ("food_001", "Vegetable Poha"),
    ("food_002", "Moong Dal Chilla"),
    ("food_007", "Masoor Dal with Brown Rice"),
    ("food_012", "Quinoa Vegetable Bowl"),
    ("food_014", "Ragi Dosa"),
    ("food_017", "Mixed Pickle Thali"),
];

const FLAG_SETS: [&[&str]; 3] = [&["pcod"], &["hypertension", "migraine"], &[]];

/// Plan lengths benchmarked individually
#[derive(Debug, Clone, Copy)]
pub enum PlanLength {
    Short,
    Standard,
    Long,
}

impl PlanLength {
    pub const fn weeks(self) -> u32 {
        match self {
            Self::Short => 4,
            Self::Standard => 8,
            Self::Long => 12,
        }
    }
}

fn profile(seed: usize) -> RawProfile {
    RawProfile {
        id: format!("bench_member_{seed}"),
        name: format!("Bench Member {seed}"),
        gender: if seed % 2 == 0 { "F" } else { "M" }.to_owned(),
        age: 25 + (seed % 30) as i64,
        height_cm: 160.0 + (seed % 20) as f64,
        weight_kg: 60.0 + (seed % 25) as f64,
        region: "IN".to_owned(),
        medical_flags: FLAG_SETS[seed % FLAG_SETS.len()]
            .iter()
            .map(|flag| (*flag).to_owned())
            .collect(),
        activity_level: "light".to_owned(),
        dietary: RawDietary {
            diet_type: "vegetarian".to_owned(),
            allergies: vec!["peanuts".to_owned()],
            avoid_items: vec!["pickle".to_owned()],
            cuisine_pref: None,
        },
        preferences: RawPreferences {
            tone: "direct".to_owned(),
            indoor_only: false,
        },
        availability: RawAvailability {
            days_per_week: 5,
            preferred_slots: vec!["morning".to_owned()],
        },
    }
}

fn intake(profile_id: &str, weeks: u32) -> RawIntake {
    RawIntake {
        profile_id: Some(profile_id.to_owned()),
        goals: vec![RawGoal {
            name: "weight_loss".to_owned(),
            target_metric: None,
            priority: 1,
        }],
        duration: RawDuration {
            unit: "weeks".to_owned(),
            value: i64::from(weeks),
        },
        time_budget_min_per_day: 60,
        experience_level: "beginner".to_owned(),
        equipment: Vec::new(),
        assumptions: Vec::new(),
    }
}

fn meal(slot: &str, index: usize) -> Meal {
    let (id, name) = FOODS[index % FOODS.len()];
    let (_, swap) = FOODS[(index + 1) % FOODS.len()];
    Meal {
        slot: slot.to_owned(),
        name: name.to_owned(),
        catalog_id: CatalogRef::Resolved(id.to_owned()),
        ingredients: Vec::new(),
        macros: Macros {
            kcal: 450.0,
            protein_g: 18.0,
            carbs_g: 60.0,
            fat_g: 14.0,
        },
        tags: Vec::new(),
        safe_swaps: vec![swap.to_owned()],
    }
}

fn day(week: u32, day_index: u32) -> DayPlan {
    let index = (week * 7 + day_index) as usize;
    let (yoga_id, yoga_name) = YOGA[index % YOGA.len()];
    let minutes = 20 + week;
    DayPlan {
        day_index,
        theme: format!("Week {week} day {day_index}"),
        yoga: if day_index == 7 {
            Vec::new()
        } else {
            vec![YogaItem {
                catalog_id: CatalogRef::Resolved(yoga_id.to_owned()),
                name: yoga_name.to_owned(),
                duration_min: minutes,
                tags: Vec::new(),
            }]
        },
        breathwork: vec![BreathworkItem {
            name: "Box Breathing".to_owned(),
            duration_min: 5,
            tags: if index % 5 == 0 {
                vec!["breath_retention".to_owned()]
            } else {
                Vec::new()
            },
        }],
        habits: vec![Habit {
            title: "Ten minute walk after lunch".to_owned(),
            detail: None,
        }],
        meals: vec![
            meal("breakfast", index),
            meal("lunch", index + 2),
            meal("dinner", index + 4),
        ],
        hydration_ml_target: 2200,
        sleep: vec![SleepBlock {
            wind_down_min: 20,
            tip: "Keep screens out of the bedroom".to_owned(),
            target_hours: 7.5,
        }],
        time_allocated_min: minutes + 5,
        citations: vec![Citation {
            card_id: format!("card_{:03}", index % 9),
            source_url: format!("https://cards.example.org/{}", index % 9),
            title: "Movement and metabolic health".to_owned(),
        }],
    }
}

fn plan(profile_id: &str, weeks: u32) -> Plan {
    Plan {
        id: format!("bench_plan_{profile_id}"),
        meta: PlanMeta {
            profile_id: profile_id.to_owned(),
            goals: vec!["weight_loss".to_owned()],
            duration_days: weeks * 7,
            weeks,
            kcal_target: 1800,
            hydration_ml_target: 2200,
            assumptions: Vec::new(),
        },
        weeks: (1..=weeks)
            .map(|week| WeekPlan {
                week_index: week,
                focus: "Build consistency".to_owned(),
                progression_note: String::new(),
                is_deload: week % 4 == 0,
                days: (1..=7).map(|d| day(week, d)).collect(),
            })
            .collect(),
    }
}

/// One request whose plan spans `length` weeks
pub fn request(seed: usize, length: PlanLength) -> VerificationRequest {
    let profile = profile(seed);
    let weeks = length.weeks();
    VerificationRequest {
        intake: intake(&profile.id, weeks),
        plan: plan(&profile.id, weeks),
        profile,
    }
}

/// `count` independent standard-length requests
pub fn requests(count: usize) -> Vec<VerificationRequest> {
    (0..count)
        .map(|seed| request(seed, PlanLength::Standard))
        .collect()
}
