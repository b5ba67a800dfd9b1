// ABOUTME: Intake models capturing goals, plan duration, and daily time budget
// ABOUTME: Raw intake from the form collaborator and the normalized, validated form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unit of the requested plan duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    /// Calendar days
    Days,
    /// Weeks of seven days
    Weeks,
    /// Months, counted as 30 days
    Months,
}

impl DurationUnit {
    /// Parse from any accepted spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" | "d" => Some(Self::Days),
            "week" | "weeks" | "w" => Some(Self::Weeks),
            "month" | "months" | "m" => Some(Self::Months),
            _ => None,
        }
    }

    /// Days represented by one unit
    #[must_use]
    pub const fn days(&self) -> u32 {
        match self {
            Self::Days => 1,
            Self::Weeks => 7,
            Self::Months => 30,
        }
    }
}

/// Requested plan length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanDuration {
    /// Unit
    pub unit: DurationUnit,
    /// Number of units (1-365)
    pub value: u32,
}

impl PlanDuration {
    /// Total length in days
    #[must_use]
    pub const fn total_days(&self) -> u32 {
        self.value * self.unit.days()
    }

    /// Total length in whole weeks, rounded up
    #[must_use]
    pub const fn total_weeks(&self) -> u32 {
        self.total_days().div_ceil(7)
    }
}

/// Member experience with structured practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured practice
    #[default]
    Beginner,
    /// Some consistent practice
    Intermediate,
    /// Long-standing practice
    Advanced,
}

impl ExperienceLevel {
    /// Parse from any accepted spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "novice" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" | "expert" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// A canonical wellness goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    /// Goal name in `snake_case` (e.g. `fat_loss`)
    pub name: String,
    /// Metric the member wants to move
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_metric: Option<String>,
    /// Priority 1 (most important) to 5
    pub priority: u8,
}

/// Intake after validation against its documented ranges
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedIntake {
    /// Profile this intake belongs to
    pub profile_id: String,
    /// Immutable profile snapshot taken at normalization
    pub profile_snapshot: Profile,
    /// Goals in member order
    pub goals: Vec<Goal>,
    /// Requested plan length
    pub duration: PlanDuration,
    /// Daily time budget in minutes
    #[serde(rename = "time_budget_min_per_day")]
    pub time_budget_min_per_day: u32,
    /// Experience level
    #[serde(rename = "experience_level")]
    pub experience_level: ExperienceLevel,
    /// Available equipment, canonicalized
    pub equipment: BTreeSet<String>,
    /// Assumptions made while collecting the intake
    pub assumptions: Vec<String>,
}

impl NormalizedIntake {
    /// Goal with the smallest priority number; ties keep member order
    #[must_use]
    pub fn primary_goal(&self) -> Option<&Goal> {
        self.goals.iter().min_by_key(|goal| goal.priority)
    }
}

// ============================================================================
// Raw intake (wire shape)
// ============================================================================

/// Goal as received
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGoal {
    /// Goal name
    pub name: String,
    /// Metric to move
    #[serde(default)]
    pub target_metric: Option<String>,
    /// Priority
    #[serde(default = "default_priority")]
    pub priority: i64,
}

const fn default_priority() -> i64 {
    3
}

/// Duration as received
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDuration {
    /// Unit spelling
    pub unit: String,
    /// Number of units
    pub value: i64,
}

/// Intake as handed in by the intake-form collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIntake {
    /// Profile id the form was filled for, when the form carries it
    #[serde(default, alias = "profileId")]
    pub profile_id: Option<String>,
    /// Goals
    #[serde(default)]
    pub goals: Vec<RawGoal>,
    /// Requested duration
    pub duration: RawDuration,
    /// Daily time budget in minutes
    pub time_budget_min_per_day: i64,
    /// Experience level spelling
    #[serde(default)]
    pub experience_level: String,
    /// Available equipment
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Assumptions
    #[serde(default)]
    pub assumptions: Vec<String>,
}
