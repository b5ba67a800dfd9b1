// ABOUTME: Re-exports helper modules for wellplan-cli
// ABOUTME: Provides access to input loading and output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
