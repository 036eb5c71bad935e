//! # handsim-engine: Monte Carlo Hand-Category Estimator
//!
//! Estimates how often each rank-multiplicity hand category (pairs, trips,
//! full houses, ...) appears in random hands dealt from a standard 52-card
//! deck, and reports the exact hand that came up most often.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - The immutable 52-card reference deck
//! - [`sampler`] - Uniform draws without replacement
//! - [`hand`] - Hands, multiplicity patterns and category classification
//! - [`engine`] - Simulation runs (sequential, seeded, parallel)
//! - [`stats`] - Simulation results and category counts
//! - [`errors`] - Error types for invalid run parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use handsim_engine::cards::{Card, Rank, Suit};
//! use handsim_engine::hand::{classify, Hand, HandCategory};
//!
//! let hand = Hand::new(vec![
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//!     Card::new(Rank::Seven, Suit::Spades),
//! ]);
//! assert_eq!(classify(&hand), HandCategory::FullHouse);
//! ```
//!
//! ## Deterministic Runs
//!
//! The random source is always injected, so a fixed seed reproduces a run:
//!
//! ```rust
//! use handsim_engine::deck::build_deck;
//! use handsim_engine::engine::run_simulation;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let deck = build_deck();
//! let a = run_simulation(&deck, 1000, 5, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
//! let b = run_simulation(&deck, 1000, 5, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod sampler;
pub mod stats;
mod tally;

pub use deck::{build_deck, Deck};
pub use engine::{run_simulation, SimConfig, Simulation, Variant};
pub use errors::SimError;
pub use hand::{classify, Hand, HandCategory, MultiplicityPattern};
pub use sampler::draw_hand;
pub use stats::SimulationResult;
pub use tally::HandIdentity;
