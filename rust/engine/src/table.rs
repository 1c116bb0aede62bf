//! Table-level state for a single hand: the seats, the board, and the pot.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::Card;
use crate::errors::GameError;
use crate::ledger::BetLedger;
use crate::player::SeatState;
use crate::pot::Pot;

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 9;
/// The human always sits in seat 0.
pub const HUMAN_SEAT: usize = 0;
pub const MAX_COMMUNITY: usize = 5;

/// Small and big blind amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Self {
        Self { small, big }
    }
}

/// Fixed-size ordered collection of seats with index-checked access.
#[derive(Debug, Clone)]
pub struct Seats {
    seats: Vec<SeatState>,
}

impl Seats {
    /// Seat count is clamped to `MIN_SEATS..=MAX_SEATS`.
    pub fn new(count: usize, human_stack: u32, opponent_stack: u32) -> Self {
        let count = count.clamp(MIN_SEATS, MAX_SEATS);
        let seats = (0..count)
            .map(|i| {
                if i == HUMAN_SEAT {
                    SeatState::new(i, human_stack, true)
                } else {
                    SeatState::new(i, opponent_stack, false)
                }
            })
            .collect();
        Self { seats }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn get(&self, seat: usize) -> Result<&SeatState, GameError> {
        let seats = self.seats.len();
        self.seats
            .get(seat)
            .ok_or(GameError::SeatOutOfRange { seat, seats })
    }

    pub fn get_mut(&mut self, seat: usize) -> Result<&mut SeatState, GameError> {
        let seats = self.seats.len();
        self.seats
            .get_mut(seat)
            .ok_or(GameError::SeatOutOfRange { seat, seats })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeatState> {
        self.seats.iter()
    }

    /// Seat `steps` positions clockwise from `from`.
    pub fn clockwise(&self, from: usize, steps: usize) -> usize {
        (from + steps) % self.seats.len()
    }

    /// Seats that have not folded.
    pub fn in_hand(&self) -> impl Iterator<Item = &SeatState> {
        self.seats.iter().filter(|s| s.in_hand())
    }

    pub fn in_hand_count(&self) -> usize {
        self.in_hand().count()
    }

    pub fn total_contributions(&self) -> u32 {
        self.seats.iter().map(SeatState::contribution).sum()
    }
}

/// Chips on the table when a hand starts: the human's balance plus every
/// opponent stack.
///
/// The pot and contributions are `u32`; a hand may only start while this
/// fits, which bounds every later sum.
pub fn table_chips(seat_count: usize, human_stack: u32, opponent_stack: u32) -> u64 {
    let opponents = seat_count.clamp(MIN_SEATS, MAX_SEATS) as u64 - 1;
    u64::from(human_stack) + u64::from(opponent_stack) * opponents
}

/// Everything one hand mutates. Owned exclusively by the running hand.
#[derive(Debug, Clone)]
pub struct TableState {
    seats: Seats,
    community: Vec<Card>,
    pot: Pot,
    current_bet: u32,
    blinds: Blinds,
    dealer: usize,
}

impl TableState {
    pub fn new(seats: Seats, blinds: Blinds, dealer: usize) -> Self {
        let dealer = dealer % seats.len();
        Self {
            seats,
            community: Vec::with_capacity(MAX_COMMUNITY),
            pot: Pot::new(),
            current_bet: 0,
            blinds,
            dealer,
        }
    }

    pub fn seats(&self) -> &Seats {
        &self.seats
    }
    pub fn seat(&self, seat: usize) -> Result<&SeatState, GameError> {
        self.seats.get(seat)
    }
    pub fn seat_mut(&mut self, seat: usize) -> Result<&mut SeatState, GameError> {
        self.seats.get_mut(seat)
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot.total()
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Reveals one community card; the board never exceeds five.
    pub fn reveal(&mut self, card: Card) {
        if self.community.len() < MAX_COMMUNITY {
            self.community.push(card);
        }
    }

    /// Outstanding amount `seat` must add to match the current bet.
    pub fn to_call(&self, seat: usize) -> Result<u32, GameError> {
        Ok(self
            .current_bet
            .saturating_sub(self.seats.get(seat)?.contribution()))
    }

    /// Moves chips from `seat` into the pot, degrading to an all-in when the
    /// seat cannot cover `amount`. The human seat pays through `ledger`.
    ///
    /// Returns the chips actually committed.
    pub fn commit(
        &mut self,
        seat: usize,
        amount: u32,
        ledger: &mut dyn BetLedger,
    ) -> Result<u32, GameError> {
        if amount == 0 {
            return Ok(0);
        }
        let state = self.seats.get_mut(seat)?;
        let paid = if state.is_human() {
            if ledger.place_bet(amount) {
                state.commit(amount)
            } else {
                let rest = ledger.balance();
                info!(seat, amount, balance = rest, "insufficient funds, going all-in");
                if rest > 0 && !ledger.place_bet(rest) {
                    state.sync_stack(ledger.balance());
                    return Ok(0);
                }
                state.sync_stack(rest);
                state.commit(rest)
            }
        } else {
            if amount > state.stack() {
                info!(seat, amount, stack = state.stack(), "insufficient funds, going all-in");
            }
            state.commit(amount)
        };
        let contribution = state.contribution();
        self.pot.add(paid);
        if contribution > self.current_bet {
            self.current_bet = contribution;
        }
        debug_assert_eq!(self.pot.total(), self.seats.total_contributions());
        Ok(paid)
    }

    /// Posts small and big blinds from the two seats clockwise of the dealer.
    ///
    /// Returns `(small_blind_seat, big_blind_seat)`.
    pub fn post_blinds(&mut self, ledger: &mut dyn BetLedger) -> Result<(usize, usize), GameError> {
        let sb_seat = self.seats.clockwise(self.dealer, 1);
        let bb_seat = self.seats.clockwise(self.dealer, 2);
        let Blinds { small, big } = self.blinds;
        self.commit(sb_seat, small, ledger)?;
        self.commit(bb_seat, big, ledger)?;
        // a short big blind still sets the level to match
        self.current_bet = self.current_bet.max(big);
        Ok((sb_seat, bb_seat))
    }

    /// Pot equals the sum of all seat contributions.
    pub fn pot_check(&self) -> bool {
        self.pot.total() == self.seats.total_contributions()
    }
}
