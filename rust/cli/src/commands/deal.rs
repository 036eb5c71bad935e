//! Deal command handler for single hand dealing and display.
//!
//! Draws one hand per requested size from a fresh deck and prints the cards,
//! their multiplicity pattern and the category. The seed is printed first so
//! the deal can be repeated.

use std::io::Write;

use handsim_engine::deck::build_deck;
use handsim_engine::hand::analyze_cards;
use handsim_engine::sampler::draw_hand;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cli::VariantArg;
use crate::error::CliError;
use crate::formatters::format_classification;

use super::{hand_sizes, load_config};

/// Handle the deal command.
///
/// # Errors
///
/// Returns `CliError::Engine` when the hand size does not fit the deck, and
/// `CliError::Io` on write failures.
pub fn handle_deal_command(
    hand_size: Option<usize>,
    variant: Option<VariantArg>,
    seed: Option<u64>,
    color: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let deck = build_deck();

    let hands = hand_sizes(hand_size, variant, &cfg)
        .into_iter()
        .map(|size| draw_hand(&deck, size, &mut rng))
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "Seed: {}", seed)?;
    for hand in &hands {
        let analysis = analyze_cards(hand.cards());
        writeln!(out, "{}", format_classification(hand.cards(), &analysis, color))?;
    }
    Ok(())
}
