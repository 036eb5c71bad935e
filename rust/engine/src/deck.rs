use crate::cards::{full_deck, Card};

/// The immutable 52-card reference set.
///
/// Built once and shared by reference. Sampling never mutates it; every draw
/// is "without replacement" only within that one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Builds the standard deck. Same 52 cards in the same order on every call.
pub fn build_deck() -> Deck {
    Deck::standard()
}

impl Deck {
    pub fn standard() -> Self {
        Self { cards: full_deck() }
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

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
