// ABOUTME: Candidate plan models produced by the external generative collaborator
// ABOUTME: Weeks, days, yoga/breathwork/meal items, sleep blocks, and catalog references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::wire::PLACEHOLDER_CATALOG_ID;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Reference from a plan item into a static catalog
///
/// Generators write `"TBD_SAFE"` when they could not pick a safe catalog entry.
/// That sentinel is lifted into [`CatalogRef::Placeholder`] at the wire boundary so
/// downstream code can never mistake it for a real id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CatalogRef {
    /// A concrete catalog id
    Resolved(String),
    /// No catalog entry chosen yet
    Placeholder,
}

impl CatalogRef {
    /// Resolved id, if any
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Resolved(id) => Some(id),
            Self::Placeholder => None,
        }
    }

    /// Whether this is the placeholder variant
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl From<String> for CatalogRef {
    fn from(value: String) -> Self {
        if value.trim() == PLACEHOLDER_CATALOG_ID {
            Self::Placeholder
        } else {
            Self::Resolved(value)
        }
    }
}

impl From<CatalogRef> for String {
    fn from(value: CatalogRef) -> Self {
        match value {
            CatalogRef::Resolved(id) => id,
            CatalogRef::Placeholder => PLACEHOLDER_CATALOG_ID.to_owned(),
        }
    }
}

/// Which static catalog a reference points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Yoga flow catalog
    YogaFlow,
    /// Food catalog
    Food,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YogaFlow => f.write_str("yoga flow"),
            Self::Food => f.write_str("food"),
        }
    }
}

/// Source card backing a day's guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Knowledge card identifier
    #[serde(rename = "cardId", alias = "card_id")]
    pub card_id: String,
    /// Source URL
    pub source_url: String,
    /// Source title
    pub title: String,
}

/// Yoga flow scheduled on a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YogaItem {
    /// Catalog reference
    pub catalog_id: CatalogRef,
    /// Display name
    pub name: String,
    /// Minutes
    pub duration_min: u32,
    /// Activity tags (e.g. `inversions_long`)
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Breathwork practice scheduled on a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreathworkItem {
    /// Display name
    pub name: String,
    /// Minutes
    pub duration_min: u32,
    /// Activity tags (e.g. `breath_retention`)
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Daily habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Habit title
    pub title: String,
    /// Optional elaboration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Macronutrients for one meal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    /// Energy (kcal)
    #[serde(default)]
    pub kcal: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat_g: f64,
}

/// Meal scheduled on a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Slot (breakfast, lunch, ...)
    #[serde(default)]
    pub slot: String,
    /// Display name
    pub name: String,
    /// Food catalog reference
    pub catalog_id: CatalogRef,
    /// Ingredient names
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Macronutrients
    #[serde(default)]
    pub macros: Macros,
    /// Food tags (e.g. `dairy`, `high_sodium`)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Alternatives for restricted members
    #[serde(default)]
    pub safe_swaps: Vec<String>,
}

/// Evening wind-down guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepBlock {
    /// Wind-down minutes before bed
    pub wind_down_min: u32,
    /// Sleep hygiene tip
    #[serde(default)]
    pub tip: String,
    /// Target sleep hours
    pub target_hours: f64,
}

/// One day of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day position within its week
    pub day_index: u32,
    /// Day theme
    #[serde(default)]
    pub theme: String,
    /// Yoga flows
    #[serde(default)]
    pub yoga: Vec<YogaItem>,
    /// Breathwork practices
    #[serde(default)]
    pub breathwork: Vec<BreathworkItem>,
    /// Habits (at least one)
    #[serde(default)]
    pub habits: Vec<Habit>,
    /// Meals (at least three)
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Hydration target (ml)
    pub hydration_ml_target: u32,
    /// Sleep blocks; accepted as an object or an array so duplicates are detectable
    #[serde(default, with = "sleep_blocks")]
    pub sleep: Vec<SleepBlock>,
    /// Minutes the day's plan asks of the member
    #[serde(default)]
    pub time_allocated_min: u32,
    /// Citations (at least one)
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl DayPlan {
    /// Scheduled yoga plus breathwork minutes, saturating at `u32::MAX`
    #[must_use]
    pub fn activity_minutes(&self) -> u32 {
        self.yoga
            .iter()
            .map(|item| item.duration_min)
            .chain(self.breathwork.iter().map(|item| item.duration_min))
            .fold(0_u32, u32::saturating_add)
    }
}

/// One week of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// 1-based week position
    pub week_index: u32,
    /// Week focus
    #[serde(default)]
    pub focus: String,
    /// Note on how load changes this week
    #[serde(default)]
    pub progression_note: String,
    /// Reduced-volume week
    #[serde(default)]
    pub is_deload: bool,
    /// Days (5-7)
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    /// Total activity minutes across the week
    #[must_use]
    pub fn total_activity_minutes(&self) -> u64 {
        self.days
            .iter()
            .map(|day| u64::from(day.activity_minutes()))
            .sum()
    }
}

/// Plan-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMeta {
    /// Profile the plan was generated for
    pub profile_id: String,
    /// Goal names the generator targeted
    #[serde(default)]
    pub goals: Vec<String>,
    /// Plan length in days
    #[serde(default)]
    pub duration_days: u32,
    /// Plan length in weeks
    #[serde(default)]
    pub weeks: u32,
    /// Daily energy target (kcal)
    pub kcal_target: u32,
    /// Daily hydration target (ml)
    pub hydration_ml_target: u32,
    /// Assumptions the generator made
    #[serde(default)]
    pub assumptions: Vec<String>,
}

/// Candidate plan as produced by the generative collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier
    pub id: String,
    /// Metadata
    pub meta: PlanMeta,
    /// Weeks in order
    #[serde(default)]
    pub weeks: Vec<WeekPlan>,
}

impl Plan {
    /// Every day with its week index, in plan order
    pub fn days(&self) -> impl Iterator<Item = (u32, &DayPlan)> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter().map(move |day| (week.week_index, day)))
    }
}

/// Serde adapter accepting a single sleep block, an array, or nothing
mod sleep_blocks {
    use super::{Deserialize, Deserializer, Serialize, Serializer, SleepBlock};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SleepBlock),
        Many(Vec<SleepBlock>),
    }

    pub fn serialize<S>(blocks: &[SleepBlock], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match blocks {
            [single] => single.serialize(serializer),
            many => many.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SleepBlock>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
            Some(OneOrMany::One(block)) => vec![block],
            Some(OneOrMany::Many(blocks)) => blocks,
            None => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_is_lifted_at_wire_boundary() {
        let placeholder: CatalogRef = serde_json::from_value(json!("TBD_SAFE")).unwrap();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.id(), None);

        let resolved: CatalogRef = serde_json::from_value(json!("food_001")).unwrap();
        assert_eq!(resolved.id(), Some("food_001"));

        assert_eq!(
            serde_json::to_value(CatalogRef::Placeholder).unwrap(),
            json!("TBD_SAFE")
        );
    }

    fn day_json(sleep: &serde_json::Value) -> serde_json::Value {
        json!({
            "day_index": 1,
            "hydration_ml_target": 2500,
            "sleep": sleep,
            "yoga": [{"catalog_id": "yoga_001", "name": "Sun salutation", "duration_min": 20}],
            "breathwork": [{"name": "Box breathing", "duration_min": 5}]
        })
    }

    #[test]
    fn test_sleep_accepts_object_array_and_null() {
        let block = json!({"wind_down_min": 30, "tip": "Dim lights", "target_hours": 8.0});

        let single: DayPlan = serde_json::from_value(day_json(&block)).unwrap();
        assert_eq!(single.sleep.len(), 1);

        let double: DayPlan =
            serde_json::from_value(day_json(&json!([block.clone(), block]))).unwrap();
        assert_eq!(double.sleep.len(), 2);

        let missing: DayPlan = serde_json::from_value(day_json(&serde_json::Value::Null)).unwrap();
        assert!(missing.sleep.is_empty());
        assert_eq!(missing.activity_minutes(), 25);
    }

    #[test]
    fn test_activity_minutes_saturate() {
        let mut day: DayPlan = serde_json::from_value(day_json(&serde_json::Value::Null)).unwrap();
        day.yoga[0].duration_min = u32::MAX;
        assert_eq!(day.activity_minutes(), u32::MAX);

        let week = WeekPlan {
            week_index: 1,
            focus: String::new(),
            progression_note: String::new(),
            is_deload: false,
            days: vec![day; 7],
        };
        assert_eq!(week.total_activity_minutes(), 7 * u64::from(u32::MAX));
    }
}
