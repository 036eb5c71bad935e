//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use handsim_engine::{HandIdentity, Variant};

#[derive(Parser, Debug)]
#[command(
    name = "handsim",
    version,
    about = "Monte Carlo estimates of card hand-category frequencies"
)]
pub struct HandsimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a simulation and report category frequencies and the mode hand
    Sim {
        /// Number of trials (default from config)
        #[arg(long)]
        trials: Option<u64>,
        /// Cards per hand (default from config)
        #[arg(long, conflicts_with = "variant")]
        hand_size: Option<usize>,
        /// Hand-size preset; `both` runs the standard and eight-card presets
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        /// RNG seed; a random one is chosen and reported when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Parallel workers (default from config)
        #[arg(long)]
        workers: Option<usize>,
        /// How identical hands are recognised for the mode hand
        #[arg(long, value_enum, default_value_t = IdentityArg::AsDrawn)]
        identity: IdentityArg,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Colour red suits in text output
        #[arg(long)]
        color: bool,
    },
    /// Draw and classify a single hand
    Deal {
        #[arg(long, conflicts_with = "variant")]
        hand_size: Option<usize>,
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        color: bool,
    },
    /// Classify the given cards, e.g. `classify Ks Kh Kc 7d 7s`
    Classify {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Time sampling and classification throughput on a fixed seed
    Bench {
        #[arg(long, default_value_t = 10_000)]
        trials: u64,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Standard,
    EightCard,
    Both,
}

impl VariantArg {
    pub fn variants(self) -> Vec<Variant> {
        match self {
            VariantArg::Standard => vec![Variant::Standard],
            VariantArg::EightCard => vec![Variant::EightCard],
            VariantArg::Both => Variant::ALL.to_vec(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdentityArg {
    /// Card order matters
    AsDrawn,
    /// Same set of cards regardless of order
    Normalized,
}

impl From<IdentityArg> for HandIdentity {
    fn from(arg: IdentityArg) -> Self {
        match arg {
            IdentityArg::AsDrawn => HandIdentity::AsDrawn,
            IdentityArg::Normalized => HandIdentity::Normalized,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
