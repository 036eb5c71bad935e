//! Command handler modules for the handsim CLI.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated via the `CliError` enum

pub mod bench;
pub mod cfg;
pub mod classify;
pub mod deal;
pub mod sim;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use deal::handle_deal_command;
pub use sim::{handle_sim_command, SimOptions};

use crate::cli::VariantArg;
use crate::config::{self, Config};
use crate::error::CliError;

/// Resolved configuration without the source annotations.
pub(crate) fn load_config() -> Result<Config, CliError> {
    config::load_with_sources()
        .map(|resolved| resolved.config)
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Hand sizes to run: the variant presets if given, else the flag, else config.
pub(crate) fn hand_sizes(
    hand_size: Option<usize>,
    variant: Option<VariantArg>,
    cfg: &Config,
) -> Vec<usize> {
    match variant {
        Some(v) => v.variants().into_iter().map(|v| v.hand_size()).collect(),
        None => vec![hand_size.unwrap_or(cfg.hand_size)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_sizes_precedence() {
        let cfg = Config {
            hand_size: 7,
            ..Config::default()
        };
        assert_eq!(hand_sizes(None, None, &cfg), vec![7]);
        assert_eq!(hand_sizes(Some(3), None, &cfg), vec![3]);
        assert_eq!(hand_sizes(None, Some(VariantArg::EightCard), &cfg), vec![8]);
        assert_eq!(hand_sizes(None, Some(VariantArg::Both), &cfg), vec![5, 8]);
    }
}
