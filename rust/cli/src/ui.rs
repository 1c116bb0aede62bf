//! UI helper functions for terminal output formatting.

use casino_engine::cards::Card;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Space-separated cards, or `-` for none.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Seat 0 (you)` for the human, `Seat N` otherwise.
pub fn seat_label(seat: usize) -> String {
    if seat == casino_engine::table::HUMAN_SEAT {
        format!("Seat {} (you)", seat)
    } else {
        format!("Seat {}", seat)
    }
}
