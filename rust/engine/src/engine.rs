use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::SimError;
use crate::sampler::{check_size, draw_hand};
use crate::stats::SimulationResult;
use crate::tally::{HandIdentity, Tally};

/// Hand-size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Classic five-card hands.
    Standard,
    /// Eight cards in hand, as in the deck-builder variant.
    EightCard,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::EightCard];

    pub fn hand_size(self) -> usize {
        match self {
            Variant::Standard => 5,
            Variant::EightCard => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::EightCard => "eight-card",
        }
    }
}

/// Parameters of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub trials: u64,
    pub hand_size: usize,
    pub identity: HandIdentity,
}

impl SimConfig {
    pub fn new(trials: u64, hand_size: usize) -> Self {
        Self {
            trials,
            hand_size,
            identity: HandIdentity::AsDrawn,
        }
    }

    pub fn for_variant(trials: u64, variant: Variant) -> Self {
        Self::new(trials, variant.hand_size())
    }

    pub fn with_identity(mut self, identity: HandIdentity) -> Self {
        self.identity = identity;
        self
    }
}

/// Monte Carlo estimator of the hand-category distribution.
///
/// Each trial draws a hand from the deck, classifies it and tallies both the
/// category and the exact hand. The randomness source is always explicit: a
/// caller-owned RNG for [`Simulation::run`], or a seed for the seeded and
/// parallel variants.
///
/// # Examples
///
/// ```
/// use handsim_engine::deck::build_deck;
/// use handsim_engine::engine::{SimConfig, Simulation};
///
/// let deck = build_deck();
/// let sim = Simulation::new(&deck, SimConfig::new(500, 5));
/// let result = sim.run_seeded(7).unwrap();
/// assert_eq!(result.counts.total(), 500);
/// assert_eq!(result.mode_hand.len(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulation<'a> {
    deck: &'a Deck,
    config: SimConfig,
}

impl<'a> Simulation<'a> {
    pub fn new(deck: &'a Deck, config: SimConfig) -> Self {
        Self { deck, config }
    }

    /// Both preconditions are checked before any card is drawn.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.config.trials < 1 {
            return Err(SimError::InvalidTrialCount {
                trials: self.config.trials,
            });
        }
        check_size(self.deck, self.config.hand_size)
    }

    /// Runs every trial sequentially on `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SimulationResult, SimError> {
        self.validate()?;
        let SimConfig {
            trials,
            hand_size,
            identity,
        } = self.config;
        debug!(trials, hand_size, ?identity, "starting sequential simulation");

        let mut tally = Tally::default();
        for trial in 0..trials {
            let hand = draw_hand(self.deck, hand_size, rng)?;
            tally.record(trial, hand, identity);
        }
        self.finish(tally)
    }

    /// Sequential run on `ChaCha20Rng::seed_from_u64(seed)`.
    pub fn run_seeded(&self, seed: u64) -> Result<SimulationResult, SimError> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.run(&mut rng)
    }

    /// Splits the trials into contiguous chunks, one per worker.
    ///
    /// Worker `i` draws from stream `i` of the ChaCha generator seeded with
    /// `seed`, and records global trial indices, so the merged result depends
    /// only on `(seed, workers)`. With one worker this is exactly
    /// [`Simulation::run_seeded`].
    pub fn run_parallel(&self, seed: u64, workers: usize) -> Result<SimulationResult, SimError> {
        self.validate()?;
        let SimConfig {
            trials,
            hand_size,
            identity,
        } = self.config;
        let workers = (workers.max(1) as u64).min(trials);
        let chunk = trials.div_ceil(workers);
        debug!(trials, hand_size, workers, chunk, ?identity, "starting parallel simulation");

        let partials = (0..workers)
            .into_par_iter()
            .map(|w| -> Result<Tally, SimError> {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                rng.set_stream(w);
                let start = w * chunk;
                let end = ((w + 1) * chunk).min(trials);
                let mut tally = Tally::default();
                for trial in start..end {
                    let hand = draw_hand(self.deck, hand_size, &mut rng)?;
                    tally.record(trial, hand, identity);
                }
                Ok(tally)
            })
            .collect::<Result<Vec<Tally>, SimError>>()?;

        let tally = partials.into_iter().fold(Tally::default(), |mut acc, t| {
            acc.merge(t);
            acc
        });
        self.finish(tally)
    }

    fn finish(&self, tally: Tally) -> Result<SimulationResult, SimError> {
        let result = tally
            .finish(self.config.hand_size)
            .ok_or(SimError::InvalidTrialCount {
                trials: self.config.trials,
            })?;
        info!(
            trials = result.trials,
            hand_size = result.hand_size,
            distinct_hands = result.distinct_hands,
            mode_hand_count = result.mode_hand_count,
            unmatched = result.unmatched,
            "simulation complete"
        );
        Ok(result)
    }
}

/// Runs `trials` draw-and-classify trials of `hand_size` cards on `rng`.
///
/// Fails with [`SimError::InvalidTrialCount`] when `trials < 1` and with
/// [`SimError::InvalidSize`] when the hand size does not fit the deck.
pub fn run_simulation<R: Rng + ?Sized>(
    deck: &Deck,
    trials: u64,
    hand_size: usize,
    rng: &mut R,
) -> Result<SimulationResult, SimError> {
    Simulation::new(deck, SimConfig::new(trials, hand_size)).run(rng)
}
