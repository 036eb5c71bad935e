use std::ops::Index;

use serde::ser::{Serialize, Serializer};

use crate::hand::{Hand, HandCategory, MultiplicityPattern};

/// Occurrences per category. All six categories are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts([u64; HandCategory::COUNT]);

impl CategoryCounts {
    pub fn get(&self, category: HandCategory) -> u64 {
        self.0[category.index()]
    }

    pub(crate) fn increment(&mut self, category: HandCategory) {
        self.0[category.index()] += 1;
    }

    pub(crate) fn absorb(&mut self, other: &CategoryCounts) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            *mine += theirs;
        }
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Categories in priority order, Four-of-a-Kind first.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u64)> + '_ {
        HandCategory::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl Index<HandCategory> for CategoryCounts {
    type Output = u64;

    fn index(&self, category: HandCategory) -> &u64 {
        &self.0[category.index()]
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// How often one multiplicity pattern came up.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PatternTally {
    pub pattern: MultiplicityPattern,
    /// `None` when the pattern has no table row (counted as High-Card).
    pub category: Option<HandCategory>,
    pub count: u64,
}

/// Outcome of one simulation run, owned by the caller.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SimulationResult {
    pub trials: u64,
    pub hand_size: usize,
    /// Per-category counts; they sum to `trials`.
    pub counts: CategoryCounts,
    /// The exact hand seen most often. Ties go to the hand first seen.
    pub mode_hand: Hand,
    pub mode_hand_count: u64,
    pub distinct_hands: usize,
    /// Trials whose pattern fell through the table to High-Card.
    pub unmatched: u64,
    /// Patterns by count (descending), then pattern (ascending).
    pub patterns: Vec<PatternTally>,
}

impl SimulationResult {
    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts.get(category)
    }

    /// `count / trials * 100`.
    pub fn percentage(&self, category: HandCategory) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.trials as f64 * 100.0
    }

    pub fn frequencies(&self) -> Vec<(HandCategory, u64, f64)> {
        self.counts
            .iter()
            .map(|(c, n)| (c, n, self.percentage(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_iterate_in_priority_order_and_total() {
        let mut counts = CategoryCounts::default();
        counts.increment(HandCategory::OnePair);
        counts.increment(HandCategory::OnePair);
        counts.increment(HandCategory::FourOfAKind);
        let order: Vec<HandCategory> = counts.iter().map(|(c, _)| c).collect();
        assert_eq!(order, HandCategory::ALL.to_vec());
        assert_eq!(counts[HandCategory::OnePair], 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn absorb_sums_per_category() {
        let mut a = CategoryCounts::default();
        a.increment(HandCategory::HighCard);
        let mut b = CategoryCounts::default();
        b.increment(HandCategory::HighCard);
        b.increment(HandCategory::TwoPair);
        a.absorb(&b);
        assert_eq!(a.get(HandCategory::HighCard), 2);
        assert_eq!(a.get(HandCategory::TwoPair), 1);
    }
}
