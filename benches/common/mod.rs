// ABOUTME: Common benchmark utilities for verifier performance testing
// ABOUTME: Re-exports request generators used by the Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod fixtures;
