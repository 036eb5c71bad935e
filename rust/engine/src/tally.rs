use std::collections::{BTreeMap, HashMap};

use crate::hand::{analyze_cards, Hand, HandCategory, MultiplicityPattern};
use crate::stats::{CategoryCounts, PatternTally, SimulationResult};

/// How drawn hands are keyed for mode-hand tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandIdentity {
    /// Draw order matters: the same cards in another order are another hand.
    #[default]
    AsDrawn,
    /// Cards are sorted first, so only the card set matters.
    Normalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HandTally {
    count: u64,
    /// Global index of the trial that first produced this hand.
    first_seen: u64,
}

impl HandTally {
    /// Higher count wins; equal counts go to the earlier hand.
    fn beats(&self, other: &HandTally) -> bool {
        self.count > other.count || (self.count == other.count && self.first_seen < other.first_seen)
    }
}

/// Running totals for a run, or for one worker's share of it.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    trials: u64,
    counts: CategoryCounts,
    unmatched: u64,
    patterns: BTreeMap<MultiplicityPattern, u64>,
    hands: HashMap<Hand, HandTally>,
}

impl Tally {
    pub(crate) fn record(&mut self, trial: u64, hand: Hand, identity: HandIdentity) {
        let analysis = analyze_cards(hand.cards());
        self.trials += 1;
        self.counts.increment(analysis.category);
        if !analysis.matched {
            self.unmatched += 1;
        }
        *self.patterns.entry(analysis.pattern).or_insert(0) += 1;

        let key = match identity {
            HandIdentity::AsDrawn => hand,
            HandIdentity::Normalized => hand.normalized(),
        };
        self.hands
            .entry(key)
            .and_modify(|t| t.count += 1)
            .or_insert(HandTally {
                count: 1,
                first_seen: trial,
            });
    }

    pub(crate) fn merge(&mut self, other: Tally) {
        self.trials += other.trials;
        self.counts.absorb(&other.counts);
        self.unmatched += other.unmatched;
        for (pattern, n) in other.patterns {
            *self.patterns.entry(pattern).or_insert(0) += n;
        }
        for (hand, theirs) in other.hands {
            self.hands
                .entry(hand)
                .and_modify(|mine| {
                    mine.count += theirs.count;
                    mine.first_seen = mine.first_seen.min(theirs.first_seen);
                })
                .or_insert(theirs);
        }
    }

    /// `None` only for an empty tally.
    pub(crate) fn finish(self, hand_size: usize) -> Option<SimulationResult> {
        let distinct_hands = self.hands.len();
        let (mode_hand, mode) = self
            .hands
            .into_iter()
            .reduce(|best, cand| if cand.1.beats(&best.1) { cand } else { best })?;

        let mut patterns: Vec<PatternTally> = self
            .patterns
            .into_iter()
            .map(|(pattern, count)| PatternTally {
                category: HandCategory::from_pattern(&pattern),
                pattern,
                count,
            })
            .collect();
        // stable sort keeps BTreeMap (ascending pattern) order among equal counts
        patterns.sort_by(|a, b| b.count.cmp(&a.count));

        Some(SimulationResult {
            trials: self.trials,
            hand_size,
            counts: self.counts,
            mode_hand,
            mode_hand_count: mode.count,
            distinct_hands,
            unmatched: self.unmatched,
            patterns,
        })
    }
}
