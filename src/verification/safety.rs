// ABOUTME: Medical and dietary safety checks over every scheduled item in a plan
// ABOUTME: Contraindications, allergies, diet pattern, avoided foods, energy and hydration targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionConfig;
use std::collections::{BTreeMap, BTreeSet};
use std::iter;
use wellplan_core::models::{
    CatalogRef, DayPlan, DerivedMetrics, Meal, Plan, Profile, Warning, WarningCode,
};
use wellplan_rules::{lookup_restrictions, AllergyTable, CatalogEntry, Catalogs, Restriction};

fn canonical_tags<'a>(tags: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn catalog_tags<'a, T: CatalogEntry + 'a>(
    reference: &CatalogRef,
    lookup: impl Fn(&str) -> Option<&'a T>,
) -> &'a [String] {
    reference
        .id()
        .and_then(lookup)
        .map_or(&[][..], CatalogEntry::tags)
}

fn meal_tags(meal: &Meal, catalogs: &Catalogs) -> BTreeSet<String> {
    let from_catalog = catalog_tags(&meal.catalog_id, |id| catalogs.foods.get(id));
    canonical_tags(meal.tags.iter().chain(from_catalog))
}

/// Contraindication findings for every yoga, breathwork, and meal item
///
/// Item tags are unioned with the tags of the catalog entry the item resolves to.
#[must_use]
pub fn check_contraindications(plan: &Plan, profile: &Profile, catalogs: &Catalogs) -> Vec<Warning> {
    let restrictions: BTreeMap<String, Restriction> = lookup_restrictions(&profile.medical_flags)
        .into_iter()
        .map(|restriction| (restriction.activity_tag.clone(), restriction))
        .collect();
    if restrictions.is_empty() {
        return Vec::new();
    }

    let mut warnings = Vec::new();
    for (week, day) in plan.days() {
        for (label, name, tags) in scheduled_items(day, catalogs) {
            for tag in &tags {
                if let Some(restriction) = restrictions.get(tag) {
                    warnings.push(
                        Warning::new(
                            WarningCode::Contraindication,
                            format!(
                                "Contraindication ({}): {} restricts {} in {label} '{name}' (week {week} day {}): {}",
                                restriction.severity,
                                restriction.flag,
                                restriction.activity_tag,
                                day.day_index,
                                restriction.note,
                            ),
                        )
                        .with_severity(restriction.severity)
                        .at(week, day.day_index),
                    );
                }
            }
        }
    }
    warnings
}

fn scheduled_items<'a>(
    day: &'a DayPlan,
    catalogs: &Catalogs,
) -> Vec<(&'static str, &'a str, BTreeSet<String>)> {
    let yoga = day.yoga.iter().map(|item| {
        let from_catalog = catalog_tags(&item.catalog_id, |id| catalogs.yoga.get(id));
        (
            "yoga flow",
            item.name.as_str(),
            canonical_tags(item.tags.iter().chain(from_catalog)),
        )
    });
    let breathwork = day
        .breathwork
        .iter()
        .map(|item| ("breathwork", item.name.as_str(), canonical_tags(&item.tags)));
    let meals = day
        .meals
        .iter()
        .map(|meal| ("meal", meal.name.as_str(), meal_tags(meal, catalogs)));
    yoga.chain(breathwork).chain(meals).collect()
}

/// Allergy, diet pattern, and avoided-item findings for every meal
#[must_use]
pub fn check_meals(plan: &Plan, profile: &Profile, catalogs: &Catalogs) -> Vec<Warning> {
    let dietary = &profile.dietary;
    let allergy_table = AllergyTable::global();
    let forbidden = dietary.diet_type.forbidden_tags();
    let mut warnings = Vec::new();

    for (week, day) in plan.days() {
        let d = day.day_index;
        for meal in &day.meals {
            let catalog_ingredients = meal
                .catalog_id
                .id()
                .and_then(|id| catalogs.foods.get(id))
                .map_or(&[][..], |food| food.ingredients.as_slice());
            let texts: Vec<&str> = iter::once(meal.name.as_str())
                .chain(meal.ingredients.iter().map(String::as_str))
                .chain(catalog_ingredients.iter().map(String::as_str))
                .collect();

            if !dietary.allergies.is_empty() {
                if let Some(hit) = texts
                    .iter()
                    .find_map(|text| allergy_table.first_match(&dietary.allergies, text))
                {
                    warnings.push(
                        Warning::new(
                            WarningCode::AllergyConflict,
                            format!(
                                "Allergy conflict: meal '{}' matches {} ({})",
                                meal.name, hit.allergy, hit.alias
                            ),
                        )
                        .at(week, d),
                    );
                }
                for swap in &meal.safe_swaps {
                    if let Some(hit) = allergy_table.first_match(&dietary.allergies, swap) {
                        warnings.push(
                            Warning::new(
                                WarningCode::AllergyConflict,
                                format!(
                                    "Allergy conflict: safe swap '{swap}' for meal '{}' matches {} ({})",
                                    meal.name, hit.allergy, hit.alias
                                ),
                            )
                            .at(week, d),
                        );
                    }
                }
            }

            let tags = meal_tags(meal, catalogs);
            if let Some(tag) = forbidden.iter().find(|tag| tags.contains(**tag)) {
                warnings.push(
                    Warning::new(
                        WarningCode::DietConflict,
                        format!(
                            "Diet conflict: meal '{}' is tagged {tag}, not suitable for a {} diet",
                            meal.name,
                            dietary.diet_type.as_str()
                        ),
                    )
                    .at(week, d),
                );
            }

            for item in &dietary.avoid_items {
                if texts.iter().any(|text| text.to_lowercase().contains(item.as_str())) {
                    warnings.push(
                        Warning::new(
                            WarningCode::AvoidItem,
                            format!("Meal '{}' contains avoided item '{item}'", meal.name),
                        )
                        .at(week, d),
                    );
                }
            }
        }
    }
    warnings
}

/// Plan energy and hydration targets against the member's derived targets
#[must_use]
pub fn check_targets(
    plan: &Plan,
    metrics: &DerivedMetrics,
    config: &NutritionConfig,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let derived = f64::from(metrics.calorie_target);
    let planned = f64::from(plan.meta.kcal_target);
    let drift_pct = (planned - derived).abs() / derived * 100.0;
    if drift_pct > config.kcal_tolerance_pct {
        warnings.push(Warning::new(
            WarningCode::CalorieTargetDrift,
            format!(
                "Plan kcal target {} drifts {drift_pct:.0}% from the derived target {} (tolerance {:.0}%)",
                plan.meta.kcal_target, metrics.calorie_target, config.kcal_tolerance_pct
            ),
        ));
    }

    let floor = metrics.hydration_target_ml;
    if plan.meta.hydration_ml_target < floor {
        warnings.push(Warning::new(
            WarningCode::HydrationBelowFloor,
            format!(
                "Plan hydration target {} ml is below the member's {floor} ml floor",
                plan.meta.hydration_ml_target
            ),
        ));
    }

    let low_days: Vec<(u32, u32)> = plan
        .days()
        .filter(|(_, day)| day.hydration_ml_target < floor)
        .map(|(week, day)| (week, day.day_index))
        .collect();
    if let Some(&(week, day)) = low_days.first() {
        warnings.push(
            Warning::new(
                WarningCode::HydrationBelowFloor,
                format!(
                    "{} day(s) set hydration below the member's {floor} ml floor, first at week {week} day {day}",
                    low_days.len()
                ),
            )
            .at(week, day),
        );
    }

    warnings
}
