use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card count: expected {expected}, got {actual}")]
    InvalidCardCount { expected: usize, actual: usize },
    #[error("Seat {seat} out of range (table has {seats} seats)")]
    SeatOutOfRange { seat: usize, seats: usize },
    #[error("Invalid raise to {amount}: must be within {min}..={max}")]
    InvalidRaise { amount: u32, min: u32, max: u32 },
    #[error("Hole cards already full for seat {0}")]
    HoleCardsFull(usize),
    #[error("Invalid card text: {0:?}")]
    InvalidCard(String),
    #[error("No winners at showdown")]
    NoWinners,
    #[error("Table holds {total} chips, more than a hand can track ({max})")]
    TableChipsOverflow { total: u64, max: u32 },
}
