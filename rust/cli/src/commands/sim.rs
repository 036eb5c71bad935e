//! Simulation command handler.
//!
//! Runs one simulation per requested hand size and prints either a text
//! report (counts, percentages, bar chart, mode hand) or the raw results as
//! JSON. Unset flags fall back to the resolved configuration; the seed is
//! always printed so any run can be repeated exactly.
//!
//! # Examples
//!
//! ```no_run
//! use handsim_cli::commands::sim::{handle_sim_command, SimOptions};
//! use std::io;
//!
//! let opts = SimOptions {
//!     trials: Some(20_000),
//!     seed: Some(42),
//!     ..SimOptions::default()
//! };
//! handle_sim_command(&opts, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;

use handsim_engine::deck::build_deck;
use handsim_engine::engine::{SimConfig, Simulation};
use handsim_engine::stats::SimulationResult;
use handsim_engine::HandIdentity;
use tracing::debug;

use crate::cli::{IdentityArg, OutputFormat, VariantArg};
use crate::error::CliError;
use crate::formatters::format_report;
use crate::ui;

use super::{hand_sizes, load_config};

/// Flags of the `sim` command. `None` means "use the configured value".
#[derive(Debug, Clone)]
pub struct SimOptions {
    pub trials: Option<u64>,
    pub hand_size: Option<usize>,
    pub variant: Option<VariantArg>,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
    pub identity: IdentityArg,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            trials: None,
            hand_size: None,
            variant: None,
            seed: None,
            workers: None,
            identity: IdentityArg::AsDrawn,
            format: OutputFormat::Text,
            color: false,
        }
    }
}

#[derive(serde::Serialize)]
struct SimReport<'a> {
    seed: u64,
    workers: usize,
    identity: &'static str,
    results: &'a [SimulationResult],
}

/// Handle the sim command.
///
/// # Errors
///
/// - `CliError::Config` when the configuration cannot be loaded
/// - `CliError::InvalidInput` when trials fall outside `1..=max_trials` or
///   workers is zero
/// - `CliError::Engine` when the hand size does not fit the deck
pub fn handle_sim_command(
    opts: &SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;

    let trials = opts.trials.unwrap_or(cfg.trials);
    if trials == 0 || trials > cfg.max_trials {
        return Err(CliError::InvalidInput(format!(
            "trials must be between 1 and {} (got {})",
            cfg.max_trials, trials
        )));
    }
    let workers = opts.workers.unwrap_or(cfg.workers);
    if workers == 0 {
        return Err(CliError::InvalidInput("workers must be >= 1".to_string()));
    }
    if workers as u64 > trials {
        ui::display_warning(
            err,
            &format!("{} workers for {} trials; extra workers stay idle", workers, trials),
        )?;
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let identity: HandIdentity = opts.identity.into();

    if opts.color && opts.format == OutputFormat::Json {
        ui::warn_parameter_unused(err, "color", "with --format json")?;
    }

    let deck = build_deck();
    let mut results = Vec::new();
    for hand_size in hand_sizes(opts.hand_size, opts.variant, &cfg) {
        debug!(hand_size, trials, seed, workers, "running sim command");
        let sim = Simulation::new(&deck, SimConfig::new(trials, hand_size).with_identity(identity));
        let result = if workers > 1 {
            sim.run_parallel(seed, workers)?
        } else {
            sim.run_seeded(seed)?
        };
        results.push(result);
    }

    match opts.format {
        OutputFormat::Json => {
            let report = SimReport {
                seed,
                workers,
                identity: identity_name(opts.identity),
                results: &results,
            };
            let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Seed: {}", seed)?;
            for result in &results {
                writeln!(out)?;
                writeln!(out, "{}", format_report(result, opts.color))?;
            }
        }
    }
    Ok(())
}

fn identity_name(identity: IdentityArg) -> &'static str {
    match identity {
        IdentityArg::AsDrawn => "as-drawn",
        IdentityArg::Normalized => "normalized",
    }
}
