use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A drawn hand. Cards keep their draw order, so equality and hashing are
/// order sensitive; use [`Hand::normalized`] for card-set identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Wraps cards as-is. The sampler guarantees distinct cards; hands built
    /// by hand (tests, parsed input) are the caller's responsibility.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Same cards, sorted by (rank, suit).
    pub fn normalized(&self) -> Hand {
        let mut cards = self.cards.clone();
        cards.sort_unstable();
        Hand { cards }
    }

    pub fn pattern(&self) -> MultiplicityPattern {
        MultiplicityPattern::from_cards(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand::new(cards)
    }
}

/// Rank occurrence counts of a hand, sorted descending.
///
/// `K K K 7 7` gives `[3, 2]`; `2 2 5 9 9` gives `[2, 2, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiplicityPattern(Vec<u8>);

impl MultiplicityPattern {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15]; // 2..14 used
        for c in cards {
            rank_counts[c.rank.value() as usize] += 1;
        }
        let mut counts: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        MultiplicityPattern(counts)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Leading multiplicities of two or more (the pattern without its singletons).
    pub fn grouped(&self) -> &[u8] {
        let end = self.0.iter().take_while(|&&n| n >= 2).count();
        &self.0[..end]
    }
}

impl From<Vec<u8>> for MultiplicityPattern {
    fn from(mut counts: Vec<u8>) -> Self {
        counts.retain(|&n| n > 0);
        counts.sort_unstable_by(|a, b| b.cmp(a));
        MultiplicityPattern(counts)
    }
}

impl fmt::Display for MultiplicityPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "]")
    }
}

/// Hand categories, ordered by strength (`HighCard` lowest).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    #[serde(rename = "High-Card")]
    HighCard = 0,
    #[serde(rename = "One-Pair")]
    OnePair = 1,
    #[serde(rename = "Two-Pair")]
    TwoPair = 2,
    #[serde(rename = "Three-of-a-Kind")]
    ThreeOfAKind = 3,
    #[serde(rename = "Full-House")]
    FullHouse = 4,
    #[serde(rename = "Four-of-a-Kind")]
    FourOfAKind = 5,
}

impl HandCategory {
    pub const COUNT: usize = 6;

    /// Priority order used for reporting.
    pub const ALL: [HandCategory; 6] = [
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HandCategory::FourOfAKind => "Four-of-a-Kind",
            HandCategory::FullHouse => "Full-House",
            HandCategory::ThreeOfAKind => "Three-of-a-Kind",
            HandCategory::TwoPair => "Two-Pair",
            HandCategory::OnePair => "One-Pair",
            HandCategory::HighCard => "High-Card",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Exact lookup in the pattern table; `None` when the pattern has no row.
    ///
    /// Matching is on the grouped part of the pattern, which for five cards is
    /// the same as matching `[4,1]`, `[3,2]`, `[3,1,1]`, `[2,2,1]`, `[2,1,1,1]`
    /// and all-distinct exactly. A superset never matches: `[2,2,2]` is not
    /// Two-Pair.
    pub fn from_pattern(pattern: &MultiplicityPattern) -> Option<HandCategory> {
        match pattern.grouped() {
            [4] => Some(HandCategory::FourOfAKind),
            [3, 2] => Some(HandCategory::FullHouse),
            [3] => Some(HandCategory::ThreeOfAKind),
            [2, 2] => Some(HandCategory::TwoPair),
            [2] => Some(HandCategory::OnePair),
            [] => Some(HandCategory::HighCard),
            _ => None,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full outcome of classifying one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub pattern: MultiplicityPattern,
    pub category: HandCategory,
    /// False when the pattern had no table row and fell back to High-Card.
    pub matched: bool,
}

pub fn analyze_cards(cards: &[Card]) -> Classification {
    let pattern = MultiplicityPattern::from_cards(cards);
    match HandCategory::from_pattern(&pattern) {
        Some(category) => Classification {
            pattern,
            category,
            matched: true,
        },
        None => Classification {
            pattern,
            category: HandCategory::HighCard,
            matched: false,
        },
    }
}

/// Classifies a hand by its rank-multiplicity pattern. Suits are ignored.
pub fn classify(hand: &Hand) -> HandCategory {
    classify_cards(hand.cards())
}

pub fn classify_cards(cards: &[Card]) -> HandCategory {
    analyze_cards(cards).category
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_strips_singletons() {
        let p = MultiplicityPattern::from(vec![1, 2, 1, 2, 2]);
        assert_eq!(p.as_slice(), &[2, 2, 2, 1, 1]);
        assert_eq!(p.grouped(), &[2, 2, 2]);
        assert_eq!(MultiplicityPattern::from(vec![1, 1]).grouped(), &[] as &[u8]);
    }

    #[test]
    fn pattern_display() {
        assert_eq!(MultiplicityPattern::from(vec![2, 3]).to_string(), "[3, 2]");
        assert_eq!(MultiplicityPattern::from(vec![]).to_string(), "[]");
    }

    #[test]
    fn table_rows_for_five_cards() {
        let rows: [(&[u8], HandCategory); 6] = [
            (&[4, 1], HandCategory::FourOfAKind),
            (&[3, 2], HandCategory::FullHouse),
            (&[3, 1, 1], HandCategory::ThreeOfAKind),
            (&[2, 2, 1], HandCategory::TwoPair),
            (&[2, 1, 1, 1], HandCategory::OnePair),
            (&[1, 1, 1, 1, 1], HandCategory::HighCard),
        ];
        for (counts, expected) in rows {
            let p = MultiplicityPattern::from(counts.to_vec());
            assert_eq!(HandCategory::from_pattern(&p), Some(expected), "{}", p);
        }
    }

    #[test]
    fn unmatched_patterns_have_no_row() {
        for counts in [vec![2, 2, 2, 1, 1], vec![4, 2, 1, 1], vec![3, 3, 1, 1]] {
            let p = MultiplicityPattern::from(counts);
            assert_eq!(HandCategory::from_pattern(&p), None, "{}", p);
        }
    }

    #[test]
    fn all_lists_each_category_once_in_priority_order() {
        assert_eq!(HandCategory::ALL[0], HandCategory::FourOfAKind);
        assert_eq!(HandCategory::ALL[5], HandCategory::HighCard);
        let mut idx: Vec<usize> = HandCategory::ALL.iter().map(|c| c.index()).collect();
        idx.sort_unstable();
        assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);
    }
}
