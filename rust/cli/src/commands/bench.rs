//! Bench command handler for sampling and classification throughput.
//!
//! Draws and classifies `trials` hands per preset on the fixed seed 1 and
//! reports elapsed time and hands per second.

use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use handsim_engine::deck::build_deck;
use handsim_engine::engine::Variant;
use handsim_engine::hand::classify;
use handsim_engine::sampler::draw_hand;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::CliError;

const BENCH_SEED: u64 = 1;

/// Handle the bench command.
pub fn handle_bench_command(trials: u64, out: &mut dyn Write) -> Result<(), CliError> {
    if trials == 0 {
        return Err(CliError::InvalidInput("trials must be >= 1".to_string()));
    }
    let deck = build_deck();
    for variant in Variant::ALL {
        let mut rng = ChaCha20Rng::seed_from_u64(BENCH_SEED);
        let start = Instant::now();
        for _ in 0..trials {
            let hand = draw_hand(&deck, variant.hand_size(), &mut rng)?;
            black_box(classify(&hand));
        }
        let dur = start.elapsed();
        let rate = trials as f64 / dur.as_secs_f64().max(f64::EPSILON);
        writeln!(
            out,
            "Benchmark {}: {} hands in {:?} ({:.0} hands/sec)",
            variant.name(),
            trials,
            dur,
            rate
        )?;
    }
    Ok(())
}
