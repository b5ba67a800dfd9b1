// ABOUTME: Output formatting helpers for wellplan-cli
// ABOUTME: JSON results on stdout, JSON error documents on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use wellplan::errors::{AppError, AppResult, ErrorResponse};

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Write an error document to stderr
pub fn report_error(error: AppError) {
    let summary = error.to_string();
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(_) => eprintln!("{summary}"),
    }
}
