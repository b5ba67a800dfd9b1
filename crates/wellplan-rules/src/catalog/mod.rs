// ABOUTME: Static yoga flow and food catalogs keyed by id
// ABOUTME: Loaded from built-in data or JSON/YAML files; read-only after load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod builtin;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use wellplan_core::errors::{AppError, ErrorCode};

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// JSON catalog could not be parsed
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML catalog could not be parsed
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML
    #[error("unsupported catalog format '{0}', expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    /// Two entries share an id
    #[error("duplicate catalog id '{0}'")]
    DuplicateId(String),

    /// Entry has a blank id
    #[error("catalog entry '{0}' has an empty id")]
    EmptyId(String),
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorCode::ResourceNotFound
            }
            CatalogError::Io { .. } => ErrorCode::StorageError,
            CatalogError::Json(_) | CatalogError::Yaml(_) => ErrorCode::SerializationError,
            CatalogError::UnsupportedFormat(_) => ErrorCode::InvalidFormat,
            CatalogError::DuplicateId(_) | CatalogError::EmptyId(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// An entry addressable by catalog id
pub trait CatalogEntry: DeserializeOwned {
    /// Catalog id
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Tags matched against contraindications and diet rules
    fn tags(&self) -> &[String];
}

/// Yoga flow catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaFlow {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Activity tags (e.g. `inversions_long`)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Typical duration (minutes)
    #[serde(default)]
    pub duration_min: u32,
    /// Difficulty level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl CatalogEntry for YogaFlow {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Food catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Ingredient names
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Food tags (e.g. `dairy`, `meat`, `high_sodium`)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Energy per serving (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kcal: Option<f64>,
}

impl CatalogEntry for FoodItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Immutable id-keyed catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog, rejecting blank and duplicate ids
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyId`] or [`CatalogError::DuplicateId`].
    pub fn from_entries(entries: Vec<T>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for entry in entries {
            let id = entry.id().trim().to_owned();
            if id.is_empty() {
                return Err(CatalogError::EmptyId(entry.name().to_owned()));
            }
            if catalog.entries.contains_key(&id) {
                return Err(CatalogError::DuplicateId(id));
            }
            catalog.entries.insert(id, entry);
        }
        Ok(catalog)
    }

    /// Parse a JSON array of entries
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids are blank or duplicated.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::from_entries(serde_json::from_str(raw)?)
    }

    /// Parse a YAML sequence of entries
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or ids are blank or duplicated.
    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        Self::from_entries(serde_yaml::from_str(raw)?)
    }

    /// Load a catalog file, choosing the format from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported extension,
    /// fails to parse, or contains blank or duplicate ids.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&raw)?,
            "yaml" | "yml" => Self::from_yaml_str(&raw)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_owned())),
        };
        info!(path = %path.display(), entries = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }
}

impl<T> Catalog<T> {
    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Whether the id is present
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

/// Both catalogs the verifier resolves references against
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    /// Yoga flows
    pub yoga: Catalog<YogaFlow>,
    /// Foods
    pub foods: Catalog<FoodItem>,
}

impl Catalogs {
    /// Pair two loaded catalogs
    #[must_use]
    pub const fn new(yoga: Catalog<YogaFlow>, foods: Catalog<FoodItem>) -> Self {
        Self { yoga, foods }
    }

    /// Built-in catalogs shipped with the engine
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in data contains a blank or duplicate id.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalogs = Self {
            yoga: Catalog::from_entries(builtin::yoga_flows())?,
            foods: Catalog::from_entries(builtin::foods())?,
        };
        debug!(
            yoga = catalogs.yoga.len(),
            foods = catalogs.foods.len(),
            "Built-in catalogs ready"
        );
        Ok(catalogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalogs_load() {
        let catalogs = Catalogs::builtin().unwrap();
        assert!(catalogs.yoga.contains("yoga_001"));
        assert!(catalogs.foods.contains("food_001"));
        assert!(!catalogs.foods.contains("food_999"));
        assert!(catalogs
            .yoga
            .get("yoga_002")
            .unwrap()
            .tags
            .iter()
            .any(|tag| tag == "inversions_long"));
    }

    #[test]
    fn test_duplicate_and_blank_ids_rejected() {
        let raw = r#"[
            {"id": "yoga_x", "name": "A"},
            {"id": "yoga_x", "name": "B"}
        ]"#;
        let err = Catalog::<YogaFlow>::from_json_str(raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "yoga_x"));

        let blank = r#"[{"id": "  ", "name": "Nameless"}]"#;
        let err = Catalog::<FoodItem>::from_json_str(blank).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId(_)));
    }

    #[test]
    fn test_from_path_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("foods.yaml");
        let mut file = fs::File::create(&yaml_path).unwrap();
        writeln!(
            file,
            "- id: food_a\n  name: Dal\n  tags: [vegan]\n- id: food_b\n  name: Curd Rice\n  tags: [dairy]"
        )
        .unwrap();
        let foods = Catalog::<FoodItem>::from_path(&yaml_path).unwrap();
        assert_eq!(foods.len(), 2);
        assert_eq!(foods.get("food_b").unwrap().tags, vec!["dairy".to_owned()]);

        let csv_path = dir.path().join("foods.csv");
        fs::write(&csv_path, "id,name").unwrap();
        let err = Catalog::<FoodItem>::from_path(&csv_path).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(ext) if ext == "csv"));

        let err = Catalog::<FoodItem>::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_catalog_errors_map_to_error_codes() {
        let missing = Catalog::<YogaFlow>::from_path("/nonexistent/yoga.json").unwrap_err();
        assert_eq!(AppError::from(missing).code, ErrorCode::ResourceNotFound);

        let duplicate: AppError = CatalogError::DuplicateId("food_001".into()).into();
        assert_eq!(duplicate.code, ErrorCode::ConfigInvalid);
        assert!(duplicate.message.contains("food_001"));
    }
}
