use rand::Rng;

use crate::deck::Deck;
use crate::errors::SimError;
use crate::hand::Hand;

/// Draws `size` distinct cards uniformly at random, without replacement.
///
/// Every `size`-subset of the deck is equally likely and the returned order
/// is the random draw order. The deck is left untouched.
pub fn draw_hand<R: Rng + ?Sized>(deck: &Deck, size: usize, rng: &mut R) -> Result<Hand, SimError> {
    check_size(deck, size)?;
    let cards = deck.cards();
    let picked = rand::seq::index::sample(rng, cards.len(), size);
    Ok(Hand::new(picked.iter().map(|i| cards[i]).collect()))
}

pub(crate) fn check_size(deck: &Deck, size: usize) -> Result<(), SimError> {
    if size < 1 || size > deck.len() {
        return Err(SimError::InvalidSize {
            size,
            deck_size: deck.len(),
        });
    }
    Ok(())
}
