// ABOUTME: Domain models for plan verification, split by lifecycle stage
// ABOUTME: Raw inputs, canonical profile/intake, candidate plan, findings, and result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! Raw shapes (`RawProfile`, `RawIntake`) are what collaborators hand in. The
//! canonical shapes (`Profile`, `NormalizedIntake`) can only be produced by the
//! normalizer and are the only form the verification pipeline accepts.

mod findings;
mod intake;
mod plan;
mod profile;
mod result;

pub use findings::{ScoreAxis, Severity, Warning, WarningCode};
pub use intake::{
    DurationUnit, ExperienceLevel, Goal, NormalizedIntake, PlanDuration, RawDuration, RawGoal,
    RawIntake,
};
pub use plan::{
    BreathworkItem, CatalogRef, Citation, DayPlan, Habit, Macros, Meal, Plan, PlanMeta,
    ReferenceKind, SleepBlock, WeekPlan, YogaItem,
};
pub use profile::{
    ActivityLevel, Availability, DietType, DietaryProfile, Gender, Preferences, Profile,
    RawAvailability, RawDietary, RawPreferences, RawProfile, Region,
};
pub use result::{DerivedMetrics, QualityScore, VerifierResult};
