// ABOUTME: wellplan-cli - command-line front end for the plan verification engine
// ABOUTME: Verifies plans, prints derived metrics and limits, and inspects rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Verify one request document (profile + intake + plan)
//! wellplan-cli verify --request request.json --pretty
//!
//! # Reject plans with avoid-severity contraindications
//! wellplan-cli verify --request request.yaml --strict
//!
//! # Verify a JSON array of requests in parallel
//! wellplan-cli batch --requests requests.json
//!
//! # Show derived metrics for a profile
//! wellplan-cli metrics --profile profile.json --goal fat_loss
//!
//! # Show session limits eight weeks into a yoga program
//! wellplan-cli limits --profile profile.json --plan-type yoga --weeks-completed 8
//!
//! # List restrictions for medical flags
//! wellplan-cli restrictions --flag pcod --flag glaucoma
//!
//! # Check an item against allergies
//! wellplan-cli allergy --allergy nuts --item "Almond butter toast"
//! ```
//!
//! Failures are written to stderr as a JSON error document and reported through
//! the exit status: 2 invalid input, 3 structural violation, 4 unsafe plan,
//! 5 configuration, 6 unreadable input.

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use wellplan::errors::AppResult;
use wellplan::logging::LoggingConfig;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "wellplan-cli",
    about = "Wellness plan safety verification",
    long_about = "Verify generated wellness plans against a member's medical and dietary profile, and inspect the rules the verifier applies."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Catalog and policy options shared by the verification commands
#[derive(Args)]
pub struct VerifyOptions {
    /// Yoga flow catalog (JSON or YAML) replacing the built-in one
    #[arg(long)]
    pub yoga_catalog: Option<PathBuf>,

    /// Food catalog (JSON or YAML) replacing the built-in one
    #[arg(long)]
    pub food_catalog: Option<PathBuf>,

    /// Reject plans that schedule avoid-severity contraindications
    #[arg(long)]
    pub strict: bool,

    /// Treat unknown catalog ids as structural violations
    #[arg(long)]
    pub fatal_unknown_refs: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Verify one request document
    Verify {
        /// Request with profile, intake, and plan (JSON or YAML)
        #[arg(long)]
        request: PathBuf,

        #[command(flatten)]
        options: VerifyOptions,
    },

    /// Verify an array of request documents in parallel
    Batch {
        /// Array of requests (JSON or YAML)
        #[arg(long)]
        requests: PathBuf,

        #[command(flatten)]
        options: VerifyOptions,
    },

    /// Print derived metrics for a profile
    Metrics {
        /// Raw profile (JSON or YAML)
        #[arg(long)]
        profile: PathBuf,

        /// Goal used for the calorie offset
        #[arg(long)]
        goal: Option<String>,
    },

    /// Print session limits for a profile
    Limits {
        /// Raw profile (JSON or YAML)
        #[arg(long)]
        profile: PathBuf,

        /// Program type (general, strength, cardio, yoga)
        #[arg(long, default_value = "general")]
        plan_type: String,

        /// Weeks already completed
        #[arg(long, default_value = "0")]
        weeks_completed: u32,
    },

    /// List activity and food restrictions for medical flags
    Restrictions {
        /// Medical flag (repeatable)
        #[arg(long = "flag", required = true)]
        flags: Vec<String>,
    },

    /// Check an item against a set of allergies
    Allergy {
        /// Allergy (repeatable)
        #[arg(long = "allergy", required = true)]
        allergies: Vec<String>,

        /// Item name or ingredient text
        #[arg(long)]
        item: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let status = error.exit_code();
            helpers::display::report_error(error);
            ExitCode::from(status)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Verify { request, options } => commands::verify::single(&request, &options),
        Command::Batch { requests, options } => commands::verify::batch(&requests, &options),
        Command::Metrics { profile, goal } => commands::inspect::metrics(&profile, goal.as_deref()),
        Command::Limits {
            profile,
            plan_type,
            weeks_completed,
        } => commands::inspect::limits(&profile, &plan_type, weeks_completed),
        Command::Restrictions { flags } => commands::inspect::restrictions(&flags),
        Command::Allergy { allergies, item } => commands::inspect::allergy(&allergies, &item),
    }
}
