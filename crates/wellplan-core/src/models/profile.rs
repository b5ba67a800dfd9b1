// ABOUTME: Member profile models in raw (wire) and canonical (validated) form
// ABOUTME: Gender, region, activity level, and diet type enums with lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Gender used for BMR calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Female
    #[serde(rename = "F")]
    Female,
    /// Male
    #[serde(rename = "M")]
    Male,
    /// Any other gender; BMR uses the mean of both formulas
    #[serde(rename = "Other")]
    Other,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
            Self::Other => "Other",
        }
    }

    /// Parse from any accepted spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "f" | "female" | "woman" => Some(Self::Female),
            "m" | "male" | "man" => Some(Self::Male),
            "other" | "x" | "non_binary" | "nonbinary" | "non-binary" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Member region; drives calorie and hydration multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// India
    #[serde(rename = "IN")]
    India,
    /// United States
    #[serde(rename = "US")]
    UnitedStates,
    /// Europe
    #[serde(rename = "EU")]
    Europe,
    /// Everywhere else
    #[serde(rename = "Global")]
    Global,
}

impl Region {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::India => "IN",
            Self::UnitedStates => "US",
            Self::Europe => "EU",
            Self::Global => "Global",
        }
    }

    /// Parse from any accepted spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "india" => Some(Self::India),
            "us" | "usa" | "united_states" => Some(Self::UnitedStates),
            "eu" | "europe" => Some(Self::Europe),
            "global" | "row" => Some(Self::Global),
            _ => None,
        }
    }
}

/// Habitual activity level for TDEE and progression limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily training or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Parse from any accepted spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Some(Self::Sedentary),
            "light" | "lightly_active" => Some(Self::Light),
            "moderate" | "moderately_active" => Some(Self::Moderate),
            "active" => Some(Self::Active),
            "very_active" | "extra_active" => Some(Self::VeryActive),
            _ => None,
        }
    }
}

/// Dietary pattern; determines which meal tags conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// No pattern restriction
    Omnivore,
    /// No meat, fish, or eggs
    Vegetarian,
    /// Vegetarian plus eggs
    Eggetarian,
    /// Vegetarian plus fish and seafood
    Pescatarian,
    /// No animal products
    Vegan,
}

impl DietType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Eggetarian => "eggetarian",
            Self::Pescatarian => "pescatarian",
            Self::Vegan => "vegan",
        }
    }

    /// Parse from any accepted spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "omnivore" | "non_veg" | "nonveg" | "non_vegetarian" => Some(Self::Omnivore),
            "vegetarian" | "veg" => Some(Self::Vegetarian),
            "eggetarian" => Some(Self::Eggetarian),
            "pescatarian" => Some(Self::Pescatarian),
            "vegan" => Some(Self::Vegan),
            _ => None,
        }
    }

    /// Meal tags incompatible with this pattern
    #[must_use]
    pub const fn forbidden_tags(&self) -> &'static [&'static str] {
        match self {
            Self::Omnivore => &[],
            Self::Vegetarian => &["meat", "poultry", "fish", "seafood", "egg", "non_veg"],
            Self::Eggetarian => &["meat", "poultry", "fish", "seafood", "non_veg"],
            Self::Pescatarian => &["meat", "poultry"],
            Self::Vegan => &[
                "meat", "poultry", "fish", "seafood", "egg", "non_veg", "dairy", "honey",
            ],
        }
    }
}

// ============================================================================
// Canonical profile
// ============================================================================

/// Dietary restrictions and preferences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietaryProfile {
    /// Dietary pattern
    #[serde(rename = "type")]
    pub diet_type: DietType,
    /// Allergy names, canonicalized
    pub allergies: BTreeSet<String>,
    /// Foods the member wants to avoid, canonicalized
    pub avoid_items: BTreeSet<String>,
    /// Preferred cuisine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_pref: Option<String>,
}

/// Presentation and venue preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    /// Coaching tone
    pub tone: String,
    /// Member only trains indoors
    pub indoor_only: bool,
}

/// Weekly availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// Training days per week (1-7)
    pub days_per_week: u8,
    /// Preferred time slots, canonicalized and in member order
    pub preferred_slots: Vec<String>,
}

/// Canonical, validated member profile
///
/// Only the normalizer builds this type. Serializing it yields a [`RawProfile`]
/// shaped document that normalizes back to an identical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Profile identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Gender
    pub gender: Gender,
    /// Age in years (10-100)
    pub age: u32,
    /// Height in centimeters (120-220)
    pub height_cm: f64,
    /// Weight in kilograms (30-200)
    pub weight_kg: f64,
    /// Region
    pub region: Region,
    /// Medical flags, canonicalized
    pub medical_flags: BTreeSet<String>,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Dietary profile
    pub dietary: DietaryProfile,
    /// Preferences
    pub preferences: Preferences,
    /// Availability
    pub availability: Availability,
}

// ============================================================================
// Raw profile (wire shape)
// ============================================================================

/// Dietary block as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDietary {
    /// Dietary pattern name
    #[serde(rename = "type", default)]
    pub diet_type: String,
    /// Allergy names
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Foods to avoid
    #[serde(default)]
    pub avoid_items: Vec<String>,
    /// Preferred cuisine
    #[serde(default)]
    pub cuisine_pref: Option<String>,
}

/// Preferences block as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPreferences {
    /// Coaching tone
    #[serde(default)]
    pub tone: String,
    /// Indoor-only flag
    #[serde(default)]
    pub indoor_only: bool,
}

/// Availability block as received
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAvailability {
    /// Training days per week
    pub days_per_week: i64,
    /// Preferred time slots
    #[serde(default)]
    pub preferred_slots: Vec<String>,
}

impl Default for RawAvailability {
    fn default() -> Self {
        Self {
            days_per_week: 3,
            preferred_slots: Vec::new(),
        }
    }
}

/// Member profile as handed in by the profile-management collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProfile {
    /// Profile identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Gender spelling
    pub gender: String,
    /// Age in years
    pub age: i64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Region spelling
    #[serde(default = "default_region")]
    pub region: String,
    /// Medical flags
    #[serde(default)]
    pub medical_flags: Vec<String>,
    /// Activity level spelling
    pub activity_level: String,
    /// Dietary block
    #[serde(default)]
    pub dietary: RawDietary,
    /// Preferences block
    #[serde(default)]
    pub preferences: RawPreferences,
    /// Availability block
    #[serde(default)]
    pub availability: RawAvailability,
}

fn default_region() -> String {
    "Global".to_owned()
}
