// ABOUTME: Input ranges and wire constants shared by the normalizer and validators
// ABOUTME: Organized by domain so rule owners can audit every bound in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Accepted ranges for member profile fields
pub mod profile_limits {
    /// Minimum accepted age in years
    pub const AGE_MIN: u32 = 10;
    /// Maximum accepted age in years
    pub const AGE_MAX: u32 = 100;
    /// Minimum accepted height in centimeters
    pub const HEIGHT_CM_MIN: f64 = 120.0;
    /// Maximum accepted height in centimeters
    pub const HEIGHT_CM_MAX: f64 = 220.0;
    /// Minimum accepted weight in kilograms
    pub const WEIGHT_KG_MIN: f64 = 30.0;
    /// Maximum accepted weight in kilograms
    pub const WEIGHT_KG_MAX: f64 = 200.0;
    /// Minimum training days per week
    pub const DAYS_PER_WEEK_MIN: u8 = 1;
    /// Maximum training days per week
    pub const DAYS_PER_WEEK_MAX: u8 = 7;
}

/// Accepted ranges for intake fields
pub mod intake_limits {
    /// Minimum number of goals
    pub const GOALS_MIN: usize = 1;
    /// Maximum number of goals
    pub const GOALS_MAX: usize = 5;
    /// Highest goal priority (most important)
    pub const PRIORITY_MIN: u8 = 1;
    /// Lowest goal priority
    pub const PRIORITY_MAX: u8 = 5;
    /// Minimum plan duration value
    pub const DURATION_MIN: u32 = 1;
    /// Maximum plan duration value
    pub const DURATION_MAX: u32 = 365;
    /// Minimum daily time budget in minutes
    pub const TIME_BUDGET_MIN: u32 = 20;
    /// Maximum daily time budget in minutes
    pub const TIME_BUDGET_MAX: u32 = 180;
}

/// Structural bounds of a candidate plan
pub mod plan_limits {
    /// Fewest days a week may contain
    pub const DAYS_PER_WEEK_MIN: usize = 5;
    /// Most days a week may contain
    pub const DAYS_PER_WEEK_MAX: usize = 7;
    /// Fewest meals a day may contain
    pub const MEALS_PER_DAY_MIN: usize = 3;
    /// Fewest habits a day may contain
    pub const HABITS_PER_DAY_MIN: usize = 1;
    /// Lowest accepted daily hydration target (ml)
    pub const HYDRATION_ML_MIN: u32 = 1500;
    /// Highest accepted daily hydration target (ml)
    pub const HYDRATION_ML_MAX: u32 = 5000;
}

/// Wire-level sentinels
pub mod wire {
    /// Catalog id written by generators when no safe catalog entry could be chosen
    pub const PLACEHOLDER_CATALOG_ID: &str = "TBD_SAFE";
}
