//! Card label parsing for the `classify` command.
//!
//! Accepts labels like `As`, `10h`, `Th`, `K♠` or `qD`:
//! - Rank: `2`-`10`, `T`, `J`, `Q`, `K`, `A` (case-insensitive)
//! - Suit: `s`, `h`, `d`, `c` or `♠`, `♥`, `♦`, `♣`
//!
//! ## Error Handling
//!
//! [`parse_cards`] checks every label before failing so that all malformed
//! or repeated cards are reported together.

use std::collections::HashSet;

use handsim_engine::cards::{Card, Rank, Suit};

use crate::error::BatchValidationError;

/// Parse one card label.
///
/// # Example
///
/// ```rust
/// use handsim_cli::validation::parse_card;
/// use handsim_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(parse_card("10h"), Ok(Card::new(Rank::Ten, Suit::Hearts)));
/// assert_eq!(parse_card("Th"), Ok(Card::new(Rank::Ten, Suit::Hearts)));
/// assert_eq!(parse_card("k♠"), Ok(Card::new(Rank::King, Suit::Spades)));
/// assert!(parse_card("1x").is_err());
/// ```
pub fn parse_card(label: &str) -> Result<Card, String> {
    let label = label.trim();
    let mut chars = label.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| "empty card label".to_string())?;
    let rank_part = chars.as_str();
    if rank_part.is_empty() {
        return Err("missing rank".to_string());
    }
    let rank = parse_rank(rank_part)?;
    let suit = parse_suit(suit_char)?;
    Ok(Card::new(rank, suit))
}

fn parse_rank(s: &str) -> Result<Rank, String> {
    let rank = match s.to_ascii_uppercase().as_str() {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" | "T" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        _ => return Err(format!("unknown rank '{}'", s)),
    };
    Ok(rank)
}

fn parse_suit(c: char) -> Result<Suit, String> {
    match c.to_ascii_lowercase() {
        's' | '♠' => Ok(Suit::Spades),
        'h' | '♥' => Ok(Suit::Hearts),
        'd' | '♦' => Ok(Suit::Diamonds),
        'c' | '♣' => Ok(Suit::Clubs),
        _ => Err(format!("unknown suit '{}'", c)),
    }
}

/// Parse a list of card labels, rejecting malformed and duplicate cards.
///
/// Cards keep the order they were given in.
pub fn parse_cards<S: AsRef<str>>(
    labels: &[S],
) -> Result<Vec<Card>, Vec<BatchValidationError<String>>> {
    let mut cards = Vec::with_capacity(labels.len());
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for label in labels {
        let label = label.as_ref();
        match parse_card(label) {
            Ok(card) => {
                if seen.insert(card) {
                    cards.push(card);
                } else {
                    errors.push(BatchValidationError {
                        item_context: label.to_string(),
                        message: "duplicate card".to_string(),
                    });
                }
            }
            Err(message) => errors.push(BatchValidationError {
                item_context: label.to_string(),
                message,
            }),
        }
    }

    if errors.is_empty() {
        Ok(cards)
    } else {
        Err(errors)
    }
}
