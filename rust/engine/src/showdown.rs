use tracing::info;

use crate::errors::GameError;
use crate::hand::{best_hand_from_seven, HandRank};
use crate::pot::split_pot;
use crate::table::TableState;

/// Ranked hands and pot shares at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    /// Best hand of every seat still in, in seat order
    pub ranks: Vec<(usize, HandRank)>,
    /// The winning hand value
    pub best: HandRank,
    /// Seats holding `best`, in seat order
    pub winners: Vec<usize>,
    /// `(seat, chips)` per winner; the first winner takes any odd chips
    pub payouts: Vec<(usize, u32)>,
}

impl ShowdownResult {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    pub fn payout_for(&self, seat: usize) -> u32 {
        self.payouts
            .iter()
            .find(|(s, _)| *s == seat)
            .map_or(0, |(_, amount)| *amount)
    }
}

/// Ranks every seat still holding cards and divides the pot among the best.
///
/// Folded seats are never ranked. All-in seats are ranked like any other and
/// may take the whole pot.
pub fn resolve(table: &TableState) -> Result<ShowdownResult, GameError> {
    let community = table.community();
    let mut ranks = Vec::new();
    for seat in table.seats().in_hand() {
        let hole = seat.hole().ok_or(GameError::InvalidCardCount {
            expected: 7,
            actual: community.len() + seat.hole_cards().iter().flatten().count(),
        })?;
        ranks.push((seat.index(), best_hand_from_seven(&hole, community)?));
    }

    let best = ranks
        .iter()
        .map(|(_, rank)| *rank)
        .max()
        .ok_or(GameError::NoWinners)?;
    let winners: Vec<usize> = ranks
        .iter()
        .filter(|(_, rank)| *rank == best)
        .map(|(seat, _)| *seat)
        .collect();
    let payouts = split_pot(table.pot(), &winners);
    info!(?winners, hand = best.name(), pot = table.pot(), "showdown resolved");

    Ok(ShowdownResult {
        ranks,
        best,
        winners,
        payouts,
    })
}
