// ABOUTME: Static rule tables and catalogs consumed by the verification pipeline
// ABOUTME: Contraindication matrix, allergy alias groups, and yoga/food catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellplan Rules
//!
//! Every table here is immutable once built. The contraindication and allergy
//! tables are process-wide `LazyLock` singletons; catalogs are loaded once at
//! start-up (built-in data or JSON/YAML files) and shared read-only afterwards.
//! There is no reload path: changing a table means restarting the process.

/// Allergy name to ingredient alias group table
pub mod allergies;

/// Yoga flow and food catalogs keyed by id
pub mod catalog;

/// Medical flag to restricted activity tag table
pub mod contraindications;

pub use allergies::{is_allergy_blocked, AllergyMatch, AllergyTable};
pub use catalog::{Catalog, CatalogEntry, CatalogError, Catalogs, FoodItem, YogaFlow};
pub use contraindications::{
    canonical_flag, lookup_restrictions, ContraindicationRule, ContraindicationTable, Restriction,
};
