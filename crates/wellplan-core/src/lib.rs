// ABOUTME: Core types for the wellplan plan verification engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellplan Core
//!
//! Foundation crate providing shared types for the wellplan verification engine.
//! This crate is designed to change infrequently so the rule tables and the
//! verification pipeline can build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode` plus the typed `ValidationError` and `StructuralError`
//! - **models**: Profile, intake, candidate plan, findings, and verification result
//! - **constants**: Documented input ranges and wire-level sentinels

/// Unified error handling with error codes, validation and structural failures
pub mod errors;

/// Documented numeric ranges and wire constants
pub mod constants;

/// Domain models (Profile, `NormalizedIntake`, Plan, Warning, `VerifierResult`)
pub mod models;
