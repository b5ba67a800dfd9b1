// ABOUTME: Progression limiter: per-profile activity limits, weekly load growth, deloads, rest cadence
// ABOUTME: Integer-exact comparisons so boundary loads are never flagged by rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression limiter
//!
//! Weekly load is the sum of yoga and breathwork minutes across a week's days.
//! Growth checks compare integer minutes scaled by 100 so that a week exactly at
//! the allowed ceiling is never reported.

use crate::config::ProgressionConfig;
use serde::{Deserialize, Serialize};
use wellplan_core::models::{
    ActivityLevel, DayPlan, NormalizedIntake, Plan, Profile, Warning, WarningCode, WeekPlan,
};

/// Completed weeks after which one extra weekly session is allowed
const WEEKS_PER_EXTRA_SESSION: u32 = 4;

/// Hard ceiling on weekly sessions
const MAX_SESSIONS_PER_WEEK: u32 = 7;

/// Fewest sessions any reduction may leave
const MIN_SESSIONS_PER_WEEK: u32 = 2;

/// Age above which limits are reduced
const OLDER_ADULT_AGE: u32 = 50;

/// Duration multiplier for older adults
const OLDER_ADULT_DURATION_FACTOR: f64 = 0.8;

/// Kind of program the limits are computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Mixed programming
    #[default]
    General,
    /// Resistance work; needs an extra rest day
    Strength,
    /// Endurance work
    Cardio,
    /// Yoga and breathwork
    Yoga,
}

impl PlanType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Yoga => "yoga",
        }
    }

    /// Parse from any accepted spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Some(Self::General),
            "strength" => Some(Self::Strength),
            "cardio" => Some(Self::Cardio),
            "yoga" => Some(Self::Yoga),
            _ => None,
        }
    }

    const fn extra_minutes(self) -> f64 {
        match self {
            Self::General => 0.0,
            Self::Strength => 15.0,
            Self::Cardio => 30.0,
            Self::Yoga => 20.0,
        }
    }
}

/// Session limits for one profile at one point in a program
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityLimits {
    /// Longest allowed session (minutes)
    pub max_duration_min: f64,
    /// Most sessions allowed per week
    pub max_sessions_per_week: u32,
    /// Rest days required per week
    pub rest_days_required: u32,
}

const fn base_limits(level: ActivityLevel) -> (f64, u32) {
    match level {
        ActivityLevel::Sedentary => (20.0, 2),
        ActivityLevel::Light => (30.0, 3),
        ActivityLevel::Moderate => (45.0, 4),
        ActivityLevel::Active => (60.0, 5),
        ActivityLevel::VeryActive => (90.0, 6),
    }
}

/// Whether a week with this many completed weeks before it is a scheduled deload
#[must_use]
pub const fn is_deload_due(weeks_completed: u32, config: &ProgressionConfig) -> bool {
    weeks_completed > 0
        && config.deload_every_weeks > 0
        && weeks_completed % config.deload_every_weeks == 0
}

/// Session limits for a profile
///
/// Applied in order: activity-level base, older-adult reduction, plan-type
/// adjustment, progressive overload, scheduled deload.
#[must_use]
pub fn compute_limits(
    profile: &Profile,
    plan_type: PlanType,
    weeks_completed: u32,
    config: &ProgressionConfig,
) -> ActivityLimits {
    let (mut duration, mut sessions) = base_limits(profile.activity_level);
    let mut rest_days = 1;

    if profile.age > OLDER_ADULT_AGE {
        duration *= OLDER_ADULT_DURATION_FACTOR;
        sessions = sessions.saturating_sub(1).max(MIN_SESSIONS_PER_WEEK);
    }

    duration += plan_type.extra_minutes();
    if plan_type == PlanType::Strength {
        rest_days = 2;
    }

    let growth = f64::from(config.overload_pct_per_week) / 100.0 * f64::from(weeks_completed);
    duration = (duration * (1.0 + growth)).min(f64::from(config.max_session_duration_min));
    sessions = (sessions + weeks_completed / WEEKS_PER_EXTRA_SESSION).min(MAX_SESSIONS_PER_WEEK);

    if is_deload_due(weeks_completed, config) {
        duration *= 1.0 - f64::from(config.deload_drop_pct) / 100.0;
        sessions = sessions.saturating_sub(1).max(MIN_SESSIONS_PER_WEEK);
    }

    ActivityLimits {
        max_duration_min: duration,
        max_sessions_per_week: sessions,
        rest_days_required: rest_days,
    }
}

fn week_load(week: &WeekPlan) -> u64 {
    week.total_activity_minutes()
}

/// Week-over-week load growth and deload checks
///
/// A non-deload week is compared with the most recent non-deload week before it,
/// so the rebound after a deload is measured against the pre-deload load. A
/// deload week must drop by at least the configured percentage versus the week
/// immediately before it.
#[must_use]
pub fn validate_weekly_progression(weeks: &[WeekPlan], config: &ProgressionConfig) -> Vec<Warning> {
    let loads: Vec<u64> = weeks.iter().map(week_load).collect();
    let increase = u64::from(config.max_weekly_increase_pct);
    let drop = u64::from(config.deload_drop_pct.min(100));
    let mut warnings = Vec::new();

    for (i, week) in weeks.iter().enumerate().skip(1) {
        let current = loads[i];
        if week.is_deload {
            let previous = loads[i - 1];
            if current * 100 > previous * (100 - drop) {
                warnings.push(
                    Warning::new(
                        WarningCode::MissingDeload,
                        format!(
                            "Week {} is a deload week but its load of {current} min is not at least {drop}% below week {} ({previous} min)",
                            week.week_index,
                            weeks[i - 1].week_index,
                        ),
                    )
                    .in_week(week.week_index),
                );
            }
            continue;
        }

        let mut baseline = i - 1;
        while baseline > 0 && weeks[baseline].is_deload {
            baseline -= 1;
        }
        let base = loads[baseline];
        if current * 100 > base * (100 + increase) {
            warnings.push(
                Warning::new(
                    WarningCode::WeeklyIncreaseExceeded,
                    format!(
                        "Week {} load of {current} min exceeds week {} ({base} min) by more than {increase}%",
                        week.week_index, weeks[baseline].week_index,
                    ),
                )
                .in_week(week.week_index),
            );
        }
    }

    if weeks.len() >= config.long_plan_weeks && !weeks.iter().any(|week| week.is_deload) {
        warnings.push(Warning::new(
            WarningCode::NoDeloadWeek,
            format!("Plan spans {} weeks without a deload week", weeks.len()),
        ));
    }

    warnings
}

/// Flag every maximal run of at least `rest_window_days` consecutive days whose
/// activity is at or above the low-activity threshold
#[must_use]
pub fn enforce_rest_cadence(days: &[(u32, &DayPlan)], config: &ProgressionConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let mut streak_start: Option<usize> = None;

    // Sentinel iteration past the end closes a streak that runs to the last day
    for index in 0..=days.len() {
        let active = days
            .get(index)
            .is_some_and(|(_, day)| day.activity_minutes() >= config.low_activity_threshold_min);
        match (active, streak_start) {
            (true, None) => streak_start = Some(index),
            (false, Some(start)) => {
                let length = index - start;
                if length >= config.rest_window_days {
                    let (week, day) = days[start];
                    warnings.push(
                        Warning::new(
                            WarningCode::RestCadence,
                            format!(
                                "{length} consecutive days without a rest day starting week {week} day {}; schedule a day under {} min",
                                day.day_index, config.low_activity_threshold_min,
                            ),
                        )
                        .at(week, day.day_index),
                    );
                }
                streak_start = None;
            }
            _ => {}
        }
    }

    warnings
}

/// Per-week session counts, per-day duration limits, and the daily time budget
#[must_use]
pub fn check_plan_limits(
    plan: &Plan,
    profile: &Profile,
    intake: &NormalizedIntake,
    config: &ProgressionConfig,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for week in &plan.weeks {
        let limits = compute_limits(
            profile,
            PlanType::Yoga,
            week.week_index.saturating_sub(1),
            config,
        );

        let sessions = week
            .days
            .iter()
            .filter(|day| day.activity_minutes() >= config.low_activity_threshold_min)
            .count();
        if sessions > limits.max_sessions_per_week as usize {
            warnings.push(
                Warning::new(
                    WarningCode::SessionLimitExceeded,
                    format!(
                        "Week {} schedules {sessions} sessions; limit is {}",
                        week.week_index, limits.max_sessions_per_week,
                    ),
                )
                .in_week(week.week_index),
            );
        }

        for day in &week.days {
            let minutes = day.activity_minutes();
            if f64::from(minutes) > limits.max_duration_min {
                warnings.push(
                    Warning::new(
                        WarningCode::DurationLimitExceeded,
                        format!(
                            "Week {} day {} has {minutes} min of activity; limit is {:.0} min",
                            week.week_index, day.day_index, limits.max_duration_min,
                        ),
                    )
                    .at(week.week_index, day.day_index),
                );
            }
            if day.time_allocated_min > intake.time_budget_min_per_day {
                warnings.push(
                    Warning::new(
                        WarningCode::TimeBudgetExceeded,
                        format!(
                            "Week {} day {} asks for {} min; daily budget is {} min",
                            week.week_index,
                            day.day_index,
                            day.time_allocated_min,
                            intake.time_budget_min_per_day,
                        ),
                    )
                    .at(week.week_index, day.day_index),
                );
            }
        }
    }

    warnings
}
