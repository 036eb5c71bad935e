//! # handsim CLI Library
//!
//! Command-line front end for the `handsim-engine` hand-category estimator.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["handsim", "sim", "--trials", "20000", "--variant", "both"];
//! let code = handsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Estimate category frequencies and find the most frequent hand
//! - `deal`: Draw and classify a single hand
//! - `classify`: Classify cards given on the command line
//! - `bench`: Measure sampling and classification throughput
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, HandsimCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_classify_command, handle_deal_command,
    handle_sim_command, SimOptions,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["sim", "deal", "classify", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let args = vec!["handsim", "classify", "Ks", "Kh", "Kc", "7d", "7s"];
/// let mut out = Vec::new();
/// let code = handsim_cli::run(args, &mut out, &mut std::io::sink());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Full-House"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandsimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Sim {
            trials,
            hand_size,
            variant,
            seed,
            workers,
            identity,
            format,
            color,
        } => {
            let opts = SimOptions {
                trials,
                hand_size,
                variant,
                seed,
                workers,
                identity,
                format,
                color,
            };
            handle_sim_command(&opts, out, err)
        }
        Commands::Deal {
            hand_size,
            variant,
            seed,
            color,
        } => handle_deal_command(hand_size, variant, seed, color, out),
        Commands::Classify { cards } => handle_classify_command(&cards, out, err),
        Commands::Bench { trials } => handle_bench_command(trials, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "handsim: Monte Carlo hand-category estimator");
    write_or_exit!(err, "Usage: handsim <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: handsim --help");
    exit_code::ERROR
}
