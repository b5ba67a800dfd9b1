// ABOUTME: Structural plan validation and catalog cross-referencing
// ABOUTME: Fatal invariants become StructuralError; placeholders and gaps become warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use wellplan_core::constants::plan_limits;
use wellplan_core::errors::StructuralError;
use wellplan_core::models::{CatalogRef, Plan, ReferenceKind, Warning, WarningCode};
use wellplan_rules::{Catalog, FoodItem, YogaFlow};

/// Check every structural invariant of a candidate plan
///
/// All violations are collected rather than stopping at the first. Placeholder
/// catalog ids, meals without safe swaps, and days without citations are not
/// structural failures; they come back as warnings.
///
/// # Errors
///
/// Returns every violated invariant when at least one is violated.
pub fn validate_structure(plan: &Plan) -> Result<Vec<Warning>, Vec<StructuralError>> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if plan.weeks.is_empty() {
        return Err(vec![StructuralError::NoWeeks]);
    }

    for (position, week) in (1_u32..).zip(&plan.weeks) {
        if week.week_index != position {
            errors.push(StructuralError::NonContiguousWeeks {
                expected: position,
                found: week.week_index,
            });
        }

        let day_count = week.days.len();
        if !(plan_limits::DAYS_PER_WEEK_MIN..=plan_limits::DAYS_PER_WEEK_MAX).contains(&day_count) {
            errors.push(StructuralError::DayCount {
                week: week.week_index,
                count: day_count,
                min: plan_limits::DAYS_PER_WEEK_MIN,
                max: plan_limits::DAYS_PER_WEEK_MAX,
            });
        }

        for day in &week.days {
            let (w, d) = (week.week_index, day.day_index);

            if day.habits.len() < plan_limits::HABITS_PER_DAY_MIN {
                errors.push(StructuralError::MissingHabits { week: w, day: d });
            }
            if day.meals.len() < plan_limits::MEALS_PER_DAY_MIN {
                errors.push(StructuralError::TooFewMeals {
                    week: w,
                    day: d,
                    count: day.meals.len(),
                    min: plan_limits::MEALS_PER_DAY_MIN,
                });
            }
            if day.sleep.len() != 1 {
                errors.push(StructuralError::SleepBlockCount {
                    week: w,
                    day: d,
                    count: day.sleep.len(),
                });
            }
            if !(plan_limits::HYDRATION_ML_MIN..=plan_limits::HYDRATION_ML_MAX)
                .contains(&day.hydration_ml_target)
            {
                errors.push(StructuralError::HydrationOutOfRange {
                    week: w,
                    day: d,
                    value: day.hydration_ml_target,
                    min: plan_limits::HYDRATION_ML_MIN,
                    max: plan_limits::HYDRATION_ML_MAX,
                });
            }

            for item in day.yoga.iter().filter(|item| item.catalog_id.is_placeholder()) {
                warnings.push(
                    Warning::new(
                        WarningCode::UnresolvedPlaceholder,
                        format!(
                            "Week {w} day {d}: yoga flow '{}' has no catalog entry yet",
                            item.name
                        ),
                    )
                    .at(w, d),
                );
            }
            for meal in &day.meals {
                if meal.catalog_id.is_placeholder() {
                    warnings.push(
                        Warning::new(
                            WarningCode::UnresolvedPlaceholder,
                            format!(
                                "Week {w} day {d}: meal '{}' has no catalog entry yet",
                                meal.name
                            ),
                        )
                        .at(w, d),
                    );
                }
                if meal.safe_swaps.is_empty() {
                    warnings.push(
                        Warning::new(
                            WarningCode::MissingSafeSwap,
                            format!("Week {w} day {d}: meal '{}' has no safe swap", meal.name),
                        )
                        .at(w, d),
                    );
                }
            }
            if day.citations.is_empty() {
                warnings.push(
                    Warning::new(
                        WarningCode::MissingCitation,
                        format!("Week {w} day {d} has no citation"),
                    )
                    .at(w, d),
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(errors)
    }
}

/// A catalog id the plan references but the catalog does not contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReference {
    /// Catalog the id was looked up in
    pub kind: ReferenceKind,
    /// Unresolved id
    pub id: String,
    /// Week of the first occurrence
    pub week: u32,
    /// Day of the first occurrence
    pub day: u32,
}

impl UnknownReference {
    /// Advisory form
    #[must_use]
    pub fn to_warning(&self) -> Warning {
        let (code, label) = match self.kind {
            ReferenceKind::YogaFlow => (WarningCode::UnknownYogaFlow, "yoga flow"),
            ReferenceKind::Food => (WarningCode::UnknownFood, "food"),
        };
        Warning::new(code, format!("Unknown {label} {}", self.id)).at(self.week, self.day)
    }

    /// Fatal form
    #[must_use]
    pub fn into_error(self) -> StructuralError {
        StructuralError::UnknownReference {
            kind: self.kind,
            id: self.id,
            week: self.week,
            day: self.day,
        }
    }
}

/// Every distinct resolved id missing from its catalog, at its first occurrence
#[must_use]
pub fn find_unknown_references(
    plan: &Plan,
    yoga: &Catalog<YogaFlow>,
    foods: &Catalog<FoodItem>,
) -> Vec<UnknownReference> {
    let mut seen: HashSet<(ReferenceKind, &str)> = HashSet::new();
    let mut unknown = Vec::new();

    for (week, day) in plan.days() {
        let yoga_refs = day
            .yoga
            .iter()
            .map(|item| (ReferenceKind::YogaFlow, &item.catalog_id));
        let food_refs = day.meals.iter().map(|meal| (ReferenceKind::Food, &meal.catalog_id));

        for (kind, reference) in yoga_refs.chain(food_refs) {
            let CatalogRef::Resolved(id) = reference else {
                continue;
            };
            let known = match kind {
                ReferenceKind::YogaFlow => yoga.contains(id),
                ReferenceKind::Food => foods.contains(id),
            };
            if !known && seen.insert((kind, id.as_str())) {
                unknown.push(UnknownReference {
                    kind,
                    id: id.clone(),
                    week,
                    day: day.day_index,
                });
            }
        }
    }

    unknown
}

/// Advisory warnings for ids missing from the catalogs
#[must_use]
pub fn cross_reference_catalogs(
    plan: &Plan,
    yoga: &Catalog<YogaFlow>,
    foods: &Catalog<FoodItem>,
) -> Vec<Warning> {
    find_unknown_references(plan, yoga, foods)
        .iter()
        .map(UnknownReference::to_warning)
        .collect()
}
