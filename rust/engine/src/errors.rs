use thiserror::Error;

/// Precondition failures of the simulation core.
///
/// Both are raised before any sampling happens; nothing else in the core can fail.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SimError {
    #[error("Invalid hand size: {size} (must be between 1 and {deck_size})")]
    InvalidSize { size: usize, deck_size: usize },
    #[error("Invalid trial count: {trials} (must be at least 1)")]
    InvalidTrialCount { trials: u64 },
}
