//! Card, hand and report formatters for terminal display.
//!
//! Pure functions that turn engine values into text. Suits render as Unicode
//! symbols with an ASCII fallback for terminals that cannot show them, and
//! red suits can optionally be coloured.
//!
//! - **Unicode mode**: ♠ ♥ ♦ ♣
//! - **ASCII mode**: s h d c
//!
//! ## Example
//!
//! ```rust
//! use handsim_engine::cards::{Card, Rank, Suit};
//! use handsim_cli::formatters::{format_card, format_hand};
//!
//! let ten_spades = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten_spades) == "10♠" || format_card(&ten_spades) == "10s");
//!
//! let hand = vec![ten_spades, Card::new(Rank::King, Suit::Hearts)];
//! assert!(format_hand(&hand, false).starts_with("10"));
//! ```

use colored::Colorize;
use handsim_engine::cards::{Card, Rank, Suit};
use handsim_engine::hand::Classification;
use handsim_engine::stats::SimulationResult;

/// Width of the longest bar in the chart.
pub const BAR_WIDTH: usize = 40;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
        .to_string()
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        }
        .to_string()
    }
}

/// Rank label: 2-10, J, Q, K, A.
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// String like "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards separated by spaces, hearts and diamonds in red when `color` is set.
pub fn format_hand(cards: &[Card], color: bool) -> String {
    let labels: Vec<String> = cards
        .iter()
        .map(|c| {
            let label = format_card(c);
            if color && c.suit.is_red() {
                label.red().to_string()
            } else {
                label
            }
        })
        .collect();
    labels.join(" ")
}

/// A bar proportional to `value / max`, at most `width` characters.
pub fn render_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round() as usize;
    "#".repeat(len.min(width))
}

/// Multi-line summary of one classified hand.
pub fn format_classification(cards: &[Card], analysis: &Classification, color: bool) -> String {
    let mut s = format!(
        "Hand: {}\nPattern: {}\nCategory: {}",
        format_hand(cards, color),
        analysis.pattern,
        analysis.category
    );
    if !analysis.matched {
        s.push_str(" (no table row for this pattern)");
    }
    s
}

/// Text report for one run: counts, percentages, bar chart and mode hand.
pub fn format_report(result: &SimulationResult, color: bool) -> String {
    let mut lines = vec![format!(
        "== {}-card hands ({} trials) ==",
        result.hand_size, result.trials
    )];
    let rows = result.frequencies();
    let max_pct = rows.iter().map(|&(_, _, p)| p).fold(0.0, f64::max);
    let count_width = result.trials.to_string().len();
    for (category, count, pct) in rows {
        lines.push(format!(
            "{:<16} {:>w$} {:>6.2}% |{}",
            category.label(),
            count,
            pct,
            render_bar(pct, max_pct, BAR_WIDTH),
            w = count_width
        ));
    }
    if result.unmatched > 0 {
        lines.push(format!(
            "Unmatched patterns counted as High-Card: {}",
            result.unmatched
        ));
        let top: Vec<String> = result
            .patterns
            .iter()
            .take(5)
            .map(|p| format!("{} x{}", p.pattern, p.count))
            .collect();
        lines.push(format!("Top patterns: {}", top.join(", ")));
    }
    lines.push(format!(
        "Most frequent hand ({}x of {} distinct): {}",
        result.mode_hand_count,
        result.distinct_hands,
        format_hand(result.mode_hand.cards(), color)
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use handsim_engine::hand::analyze_cards;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "10");
        assert_eq!(format_rank(&Rank::Jack), "J");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_hand_plain() {
        let cards = [
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let s = format_hand(&cards, false);
        assert!(s == "10♠ K♥" || s == "10s Kh", "{}", s);
    }

    #[test]
    fn test_render_bar_scales_to_max() {
        assert_eq!(render_bar(50.0, 50.0, 10), "##########");
        assert_eq!(render_bar(25.0, 50.0, 10), "#####");
        assert_eq!(render_bar(0.0, 50.0, 10), "");
        assert_eq!(render_bar(1.0, 0.0, 10), "");
    }

    #[test]
    fn test_format_classification_flags_unmatched() {
        let cards = [
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Six, Suit::Spades),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Hearts),
        ];
        let text = format_classification(&cards, &analyze_cards(&cards), false);
        assert!(text.contains("Pattern: [2, 2, 2]"));
        assert!(text.contains("Category: High-Card"));
        assert!(text.contains("no table row"));
    }
}
