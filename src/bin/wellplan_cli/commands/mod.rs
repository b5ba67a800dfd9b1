// ABOUTME: Re-exports command modules for wellplan-cli
// ABOUTME: Provides access to verification and rule inspection commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod inspect;
pub mod verify;
