// ABOUTME: Input document loading for wellplan-cli
// ABOUTME: Reads JSON or YAML files into typed request, profile, and catalog values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use wellplan::errors::{AppError, AppResult, ErrorCode};

/// Read a JSON or YAML document, choosing the format by file extension
///
/// Files without a `.yaml`/`.yml` extension are parsed as JSON.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        AppError::new(code, format!("cannot read {}: {e}", path.display())).with_source(e)
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Read input document");

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("invalid YAML in {}: {e}", path.display()),
            )
            .with_source(e)
        })
    } else {
        serde_json::from_str(&contents).map_err(|e| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("invalid JSON in {}: {e}", path.display()),
            )
            .with_source(e)
        })
    }
}
