// ABOUTME: Non-fatal verification findings with stable codes and scoring axes
// ABOUTME: Every warning carries its code, message, optional severity, and plan location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a contraindication rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Activity should not be scheduled for this member
    Avoid,
    /// Activity needs a gentler variation
    Modify,
    /// Activity is acceptable with attention
    Monitor,
}

impl Severity {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Avoid => "avoid",
            Self::Modify => "modify",
            Self::Monitor => "monitor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality axis a finding counts against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAxis {
    /// Medical contraindications
    Safety,
    /// Diet pattern, allergies, energy and hydration targets
    DietMatch,
    /// Load progression, deloads, rest cadence, limits
    Progression,
    /// Placeholders, catalog references, optional blocks
    Structure,
}

/// Stable code for each kind of finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    /// Activity or food tag restricted by a medical flag
    Contraindication,
    /// Meal or swap matches an allergy alias group
    AllergyConflict,
    /// Meal incompatible with the member's dietary pattern
    DietConflict,
    /// Meal contains an item the member avoids
    AvoidItem,
    /// Plan energy target drifts from the derived calorie target
    CalorieTargetDrift,
    /// Hydration target below the member's derived floor
    HydrationBelowFloor,
    /// Week load grew faster than the weekly cap
    WeeklyIncreaseExceeded,
    /// Deload week not reduced enough versus the prior week
    MissingDeload,
    /// Long plan without any deload week
    NoDeloadWeek,
    /// Too many consecutive days without a low-activity day
    RestCadence,
    /// More sessions in a week than the limiter allows
    SessionLimitExceeded,
    /// Day activity longer than the limiter allows
    DurationLimitExceeded,
    /// Day asks for more time than the member's budget
    TimeBudgetExceeded,
    /// Yoga flow id not in the catalog
    UnknownYogaFlow,
    /// Food id not in the catalog
    UnknownFood,
    /// Item references the placeholder instead of a catalog entry
    UnresolvedPlaceholder,
    /// Meal has no safe swap
    MissingSafeSwap,
    /// Day has no citation
    MissingCitation,
}

impl WarningCode {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contraindication => "contraindication",
            Self::AllergyConflict => "allergy_conflict",
            Self::DietConflict => "diet_conflict",
            Self::AvoidItem => "avoid_item",
            Self::CalorieTargetDrift => "calorie_target_drift",
            Self::HydrationBelowFloor => "hydration_below_floor",
            Self::WeeklyIncreaseExceeded => "weekly_increase_exceeded",
            Self::MissingDeload => "missing_deload",
            Self::NoDeloadWeek => "no_deload_week",
            Self::RestCadence => "rest_cadence",
            Self::SessionLimitExceeded => "session_limit_exceeded",
            Self::DurationLimitExceeded => "duration_limit_exceeded",
            Self::TimeBudgetExceeded => "time_budget_exceeded",
            Self::UnknownYogaFlow => "unknown_yoga_flow",
            Self::UnknownFood => "unknown_food",
            Self::UnresolvedPlaceholder => "unresolved_placeholder",
            Self::MissingSafeSwap => "missing_safe_swap",
            Self::MissingCitation => "missing_citation",
        }
    }

    /// Axis this finding is scored against
    #[must_use]
    pub const fn axis(&self) -> ScoreAxis {
        match self {
            Self::Contraindication => ScoreAxis::Safety,
            Self::AllergyConflict
            | Self::DietConflict
            | Self::AvoidItem
            | Self::CalorieTargetDrift
            | Self::HydrationBelowFloor => ScoreAxis::DietMatch,
            Self::WeeklyIncreaseExceeded
            | Self::MissingDeload
            | Self::NoDeloadWeek
            | Self::RestCadence
            | Self::SessionLimitExceeded
            | Self::DurationLimitExceeded
            | Self::TimeBudgetExceeded => ScoreAxis::Progression,
            Self::UnknownYogaFlow
            | Self::UnknownFood
            | Self::UnresolvedPlaceholder
            | Self::MissingSafeSwap
            | Self::MissingCitation => ScoreAxis::Structure,
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal finding attached to a verification result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Stable code
    pub code: WarningCode,
    /// Human-readable message
    pub message: String,
    /// Contraindication severity, for safety findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Week index the finding points at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    /// Day index the finding points at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl Warning {
    /// Create a plan-level finding
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            severity: None,
            week: None,
            day: None,
        }
    }

    /// Attach a contraindication severity
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Point the finding at a week
    #[must_use]
    pub const fn in_week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }

    /// Point the finding at a day within a week
    #[must_use]
    pub const fn at(mut self, week: u32, day: u32) -> Self {
        self.week = Some(week);
        self.day = Some(day);
        self
    }

    /// Axis this finding is scored against
    #[must_use]
    pub const fn axis(&self) -> ScoreAxis {
        self.code.axis()
    }

    /// Whether this is an avoid-severity contraindication hit
    #[must_use]
    pub fn is_avoid_hit(&self) -> bool {
        self.code == WarningCode::Contraindication && self.severity == Some(Severity::Avoid)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
