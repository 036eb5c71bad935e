//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with where it
//! came from (`default`, `file` or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "trials": {
//!     "value": 2000,
//!     "source": "default"
//!   },
//!   "hand_size": {
//!     "value": 8,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let display = serde_json::json!({
        "trials": {
            "value": config.trials,
            "source": sources.trials,
        },
        "hand_size": {
            "value": config.hand_size,
            "source": sources.hand_size,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "workers": {
            "value": config.workers,
            "source": sources.workers,
        },
        "max_trials": {
            "value": config.max_trials,
            "source": sources.max_trials,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
