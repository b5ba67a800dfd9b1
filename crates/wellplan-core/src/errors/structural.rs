// ABOUTME: Fatal structural violations of a candidate plan
// ABOUTME: Any non-empty set aborts verification with no result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::ReferenceKind;
use serde::Serialize;
use thiserror::Error;

/// A structural invariant the candidate plan failed to hold
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum StructuralError {
    /// Plan has no weeks at all
    #[error("plan contains no weeks")]
    NoWeeks,

    /// `week_index` values are not 1..N in order
    #[error("week_index must be contiguous from 1: expected {expected}, found {found}")]
    NonContiguousWeeks {
        /// Index the position required
        expected: u32,
        /// Index actually present
        found: u32,
    },

    /// Week has fewer than 5 or more than 7 days
    #[error("week {week} has {count} days, expected between {min} and {max}")]
    DayCount {
        /// Week index
        week: u32,
        /// Days present
        count: usize,
        /// Minimum days
        min: usize,
        /// Maximum days
        max: usize,
    },

    /// Day has no habit entries
    #[error("week {week} day {day} has no habits")]
    MissingHabits {
        /// Week index
        week: u32,
        /// Day index
        day: u32,
    },

    /// Day has fewer than the minimum number of meals
    #[error("week {week} day {day} has {count} meals, at least {min} required")]
    TooFewMeals {
        /// Week index
        week: u32,
        /// Day index
        day: u32,
        /// Meals present
        count: usize,
        /// Minimum meals
        min: usize,
    },

    /// Day does not carry exactly one sleep block
    #[error("week {week} day {day} has {count} sleep blocks, exactly one required")]
    SleepBlockCount {
        /// Week index
        week: u32,
        /// Day index
        day: u32,
        /// Sleep blocks present
        count: usize,
    },

    /// Day hydration target outside the accepted band
    #[error("week {week} day {day} hydration target {value} ml is outside {min}-{max} ml")]
    HydrationOutOfRange {
        /// Week index
        week: u32,
        /// Day index
        day: u32,
        /// Target in the plan
        value: u32,
        /// Lowest accepted target
        min: u32,
        /// Highest accepted target
        max: u32,
    },

    /// Catalog reference that does not resolve, under the fatal reference policy
    #[error("unknown {kind} {id} at week {week} day {day}")]
    UnknownReference {
        /// Which catalog the id was looked up in
        kind: ReferenceKind,
        /// Unresolved id
        id: String,
        /// Week index
        week: u32,
        /// Day index
        day: u32,
    },
}
