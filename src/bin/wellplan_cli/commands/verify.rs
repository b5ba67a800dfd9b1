// ABOUTME: Plan verification commands for wellplan-cli
// ABOUTME: Builds a verifier from config and catalogs, then verifies one or many requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use wellplan::config::{ReferencePolicy, VerifierConfig};
use wellplan::errors::{AppError, AppResult};
use wellplan::verification::{PlanVerifier, VerificationRequest};
use wellplan_rules::{Catalog, Catalogs};

use crate::helpers::display::print_json;
use crate::helpers::input::read_document;
use crate::VerifyOptions;

type Result<T> = AppResult<T>;

fn build_verifier(options: &VerifyOptions) -> Result<PlanVerifier> {
    let mut config = VerifierConfig::load()?;
    if options.strict {
        config = config.strict();
    }
    if options.fatal_unknown_refs {
        config.reference_policy = ReferencePolicy::Fatal;
    }

    let mut catalogs = Catalogs::builtin()?;
    if let Some(path) = &options.yoga_catalog {
        catalogs.yoga = Catalog::from_path(path)?;
    }
    if let Some(path) = &options.food_catalog {
        catalogs.foods = Catalog::from_path(path)?;
    }

    info!(
        safety_mode = ?config.safety_mode,
        reference_policy = ?config.reference_policy,
        yoga = catalogs.yoga.len(),
        foods = catalogs.foods.len(),
        "Verifier ready"
    );
    Ok(PlanVerifier::new(config, Arc::new(catalogs)))
}

/// Verify one request document and print the result
pub fn single(path: &Path, options: &VerifyOptions) -> Result<()> {
    let verifier = build_verifier(options)?;
    let request: VerificationRequest = read_document(path)?;
    let result = verifier.verify_request(&request)?;
    print_json(&result, options.pretty)
}

/// Verify an array of request documents and print one entry per request
///
/// Each entry is either a result or an error document. The command fails with
/// the first failing request's status after printing every entry.
pub fn batch(path: &Path, options: &VerifyOptions) -> Result<()> {
    let verifier = build_verifier(options)?;
    let requests: Vec<VerificationRequest> = read_document(path)?;
    let outcomes = verifier.verify_batch(&requests);

    let mut first_error: Option<AppError> = None;
    let mut entries = Vec::with_capacity(outcomes.len());
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(result) => entries.push(serde_json::to_value(&result)?),
            Err(error) => {
                warn!(index, error = %error, "Request failed verification");
                let app_error = AppError::from(error);
                entries.push(serde_json::json!({
                    "error": {
                        "code": app_error.code,
                        "message": app_error.message,
                        "details": app_error.details,
                    }
                }));
                first_error.get_or_insert(app_error);
            }
        }
    }

    print_json(&entries, options.pretty)?;
    first_error.map_or(Ok(()), Err)
}
