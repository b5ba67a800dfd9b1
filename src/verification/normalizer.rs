// ABOUTME: Profile and intake normalization from raw wire shapes into validated models
// ABOUTME: Range checks, lenient enum parsing, and set canonicalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt::Display;
use tracing::debug;
use wellplan_core::constants::{intake_limits, profile_limits};
use wellplan_core::errors::ValidationError;
use wellplan_core::models::{
    ActivityLevel, Availability, DietType, DietaryProfile, DurationUnit, ExperienceLevel, Gender,
    Goal, NormalizedIntake, PlanDuration, Preferences, Profile, RawGoal, RawIntake, RawProfile,
    Region,
};
use wellplan_rules::canonical_flag;

/// Tone used when the member left it blank
pub const DEFAULT_TONE: &str = "balanced";

/// Validate and canonicalize a raw profile
///
/// # Errors
///
/// Returns [`ValidationError`] if a field is out of range, blank, or an enum
/// value is not recognized.
pub fn normalize_profile(raw: &RawProfile) -> Result<Profile, ValidationError> {
    let id = raw.id.trim();
    if id.is_empty() {
        return Err(ValidationError::Empty { field: "id".into() });
    }

    let gender = Gender::parse(&raw.gender)
        .ok_or_else(|| ValidationError::unknown_variant("gender", &raw.gender))?;
    let region = Region::parse(&raw.region)
        .ok_or_else(|| ValidationError::unknown_variant("region", &raw.region))?;
    let activity_level = ActivityLevel::parse(&raw.activity_level).ok_or_else(|| {
        ValidationError::unknown_variant("activity_level", &raw.activity_level)
    })?;

    let age = int_in_range(
        "age",
        raw.age,
        profile_limits::AGE_MIN,
        profile_limits::AGE_MAX,
    )?;
    let height_cm = float_in_range(
        "height_cm",
        raw.height_cm,
        profile_limits::HEIGHT_CM_MIN,
        profile_limits::HEIGHT_CM_MAX,
    )?;
    let weight_kg = float_in_range(
        "weight_kg",
        raw.weight_kg,
        profile_limits::WEIGHT_KG_MIN,
        profile_limits::WEIGHT_KG_MAX,
    )?;
    let days_per_week = int_in_range(
        "availability.days_per_week",
        raw.availability.days_per_week,
        profile_limits::DAYS_PER_WEEK_MIN,
        profile_limits::DAYS_PER_WEEK_MAX,
    )?;

    let diet_type = if raw.dietary.diet_type.trim().is_empty() {
        DietType::Omnivore
    } else {
        DietType::parse(&raw.dietary.diet_type).ok_or_else(|| {
            ValidationError::unknown_variant("dietary.type", &raw.dietary.diet_type)
        })?
    };

    let tone = raw.preferences.tone.trim().to_lowercase();
    let profile = Profile {
        id: id.to_owned(),
        name: raw.name.trim().to_owned(),
        gender,
        age,
        height_cm,
        weight_kg,
        region,
        medical_flags: canonical_set(raw.medical_flags.iter().map(|flag| canonical_flag(flag))),
        activity_level,
        dietary: DietaryProfile {
            diet_type,
            allergies: canonical_set(raw.dietary.allergies.iter().map(|a| canonical_text(a))),
            avoid_items: canonical_set(raw.dietary.avoid_items.iter().map(|a| canonical_text(a))),
            cuisine_pref: raw
                .dietary
                .cuisine_pref
                .as_deref()
                .map(canonical_text)
                .filter(|cuisine| !cuisine.is_empty()),
        },
        preferences: Preferences {
            tone: if tone.is_empty() {
                DEFAULT_TONE.to_owned()
            } else {
                tone
            },
            indoor_only: raw.preferences.indoor_only,
        },
        availability: Availability {
            days_per_week,
            preferred_slots: ordered_unique(
                raw.availability
                    .preferred_slots
                    .iter()
                    .map(|slot| canonical_text(slot)),
            ),
        },
    };

    debug!(
        profile_id = %profile.id,
        flags = profile.medical_flags.len(),
        "Normalized profile"
    );
    Ok(profile)
}

/// Validate a raw intake against its documented ranges
///
/// # Errors
///
/// Returns [`ValidationError`] if goals are missing or too many, a number is out
/// of range, an enum value is not recognized, or the intake names a different
/// profile.
pub fn normalize_intake(
    raw: &RawIntake,
    profile: &Profile,
) -> Result<NormalizedIntake, ValidationError> {
    if let Some(profile_id) = raw.profile_id.as_deref().map(str::trim) {
        if !profile_id.is_empty() && profile_id != profile.id {
            return Err(ValidationError::IdMismatch {
                field: "intake.profile_id".into(),
                expected: profile.id.clone(),
                found: profile_id.to_owned(),
            });
        }
    }

    let goal_count = raw.goals.len();
    if !(intake_limits::GOALS_MIN..=intake_limits::GOALS_MAX).contains(&goal_count) {
        return Err(ValidationError::InvalidCount {
            field: "goals".into(),
            count: goal_count,
            min: intake_limits::GOALS_MIN,
            max: intake_limits::GOALS_MAX,
        });
    }
    let goals = raw
        .goals
        .iter()
        .enumerate()
        .map(|(index, goal)| normalize_goal(index, goal))
        .collect::<Result<Vec<_>, _>>()?;

    let unit = DurationUnit::parse(&raw.duration.unit)
        .ok_or_else(|| ValidationError::unknown_variant("duration.unit", &raw.duration.unit))?;
    let value = int_in_range(
        "duration.value",
        raw.duration.value,
        intake_limits::DURATION_MIN,
        intake_limits::DURATION_MAX,
    )?;
    let time_budget_min_per_day = int_in_range(
        "time_budget_min_per_day",
        raw.time_budget_min_per_day,
        intake_limits::TIME_BUDGET_MIN,
        intake_limits::TIME_BUDGET_MAX,
    )?;

    let experience_level = if raw.experience_level.trim().is_empty() {
        ExperienceLevel::default()
    } else {
        ExperienceLevel::parse(&raw.experience_level).ok_or_else(|| {
            ValidationError::unknown_variant("experience_level", &raw.experience_level)
        })?
    };

    Ok(NormalizedIntake {
        profile_id: profile.id.clone(),
        profile_snapshot: profile.clone(),
        goals,
        duration: PlanDuration { unit, value },
        time_budget_min_per_day,
        experience_level,
        equipment: canonical_set(raw.equipment.iter().map(|item| canonical_text(item))),
        assumptions: raw
            .assumptions
            .iter()
            .map(|assumption| assumption.trim().to_owned())
            .filter(|assumption| !assumption.is_empty())
            .collect(),
    })
}

/// Canonical goal name: lower-case `snake_case` (`"Fat Loss"` becomes `fat_loss`)
#[must_use]
pub fn canonical_goal_name(name: &str) -> String {
    name.trim().to_lowercase().replace(['-', ' '], "_")
}

fn normalize_goal(index: usize, raw: &RawGoal) -> Result<Goal, ValidationError> {
    let name = canonical_goal_name(&raw.name);
    if name.is_empty() {
        return Err(ValidationError::Empty {
            field: format!("goals[{index}].name"),
        });
    }
    let priority = int_in_range(
        &format!("goals[{index}].priority"),
        raw.priority,
        intake_limits::PRIORITY_MIN,
        intake_limits::PRIORITY_MAX,
    )?;
    Ok(Goal {
        name,
        target_metric: raw
            .target_metric
            .as_deref()
            .map(str::trim)
            .filter(|metric| !metric.is_empty())
            .map(str::to_owned),
        priority,
    })
}

fn canonical_text(value: &str) -> String {
    value.trim().to_lowercase()
}

fn canonical_set(values: impl Iterator<Item = String>) -> BTreeSet<String> {
    values.filter(|value| !value.is_empty()).collect()
}

fn ordered_unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .filter(|value| !value.is_empty() && seen.insert(value.clone()))
        .collect()
}

fn int_in_range<T>(field: &str, value: i64, min: T, max: T) -> Result<T, ValidationError>
where
    T: Copy + Into<i64> + TryFrom<i64> + Display,
{
    if (min.into()..=max.into()).contains(&value) {
        T::try_from(value).map_err(|_| ValidationError::out_of_range(field, value, min, max))
    } else {
        Err(ValidationError::out_of_range(field, value, min, max))
    }
}

fn float_in_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(field, value, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_in_range_bounds() {
        assert_eq!(int_in_range("age", 10, 10_u32, 100_u32), Ok(10));
        assert_eq!(int_in_range("age", 100, 10_u32, 100_u32), Ok(100));
        assert!(int_in_range("age", 9, 10_u32, 100_u32).is_err());
        assert!(int_in_range("days", -1, 1_u8, 7_u8).is_err());
    }

    #[test]
    fn test_float_range_rejects_nan() {
        assert!(float_in_range("weight_kg", f64::NAN, 30.0, 200.0).is_err());
        assert_eq!(float_in_range("weight_kg", 30.0, 30.0, 200.0), Ok(30.0));
    }

    #[test]
    fn test_canonical_goal_name() {
        assert_eq!(canonical_goal_name(" Fat Loss "), "fat_loss");
        assert_eq!(canonical_goal_name("pcod-remission"), "pcod_remission");
    }

    #[test]
    fn test_ordered_unique_keeps_first_occurrence() {
        let slots = ordered_unique(
            ["evening", "morning", "evening", ""]
                .into_iter()
                .map(str::to_owned),
        );
        assert_eq!(slots, vec!["evening".to_owned(), "morning".to_owned()]);
    }
}
