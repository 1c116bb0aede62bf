use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{
    play_hand, HandConfig, HandContext, HandOutcome, DEFAULT_MAX_RAISE_MULTIPLE,
    DEFAULT_OPPONENT_STACK,
};
use crate::errors::GameError;
use crate::table::{Blinds, MAX_SEATS, MIN_SEATS};

/// Blind levels and how they grow over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindSchedule {
    pub blinds: Blinds,
    /// Hands between increases
    pub increase_interval: u32,
    /// Added to both blinds at each increase
    pub increase_amount: u32,
}

impl BlindSchedule {
    pub fn new(blinds: Blinds, increase_interval: u32, increase_amount: u32) -> Self {
        Self {
            blinds,
            increase_interval: increase_interval.max(1),
            increase_amount,
        }
    }

    /// Blind level in effect after `hands_completed` hands.
    pub fn level_after(&self, hands_completed: u32) -> Blinds {
        let steps = hands_completed / self.increase_interval;
        let raise = self.increase_amount.saturating_mul(steps);
        Blinds::new(
            self.blinds.small.saturating_add(raise),
            self.blinds.big.saturating_add(raise),
        )
    }
}

/// Session state carried across hands: button position and blind level.
///
/// Rotates the dealer one seat clockwise after every hand and raises both
/// blinds each time the completed-hand count reaches a multiple of the
/// schedule interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    schedule: BlindSchedule,
    blinds: Blinds,
    seat_count: usize,
    dealer: usize,
    hands_completed: u32,
    opponent_stack: u32,
    max_raise_multiple: u32,
}

impl GameState {
    /// Seat count is clamped to `MIN_SEATS..=MAX_SEATS`; the dealer starts at seat 0.
    pub fn new(seat_count: usize, schedule: BlindSchedule) -> Self {
        Self {
            schedule,
            blinds: schedule.blinds,
            seat_count: seat_count.clamp(MIN_SEATS, MAX_SEATS),
            dealer: 0,
            hands_completed: 0,
            opponent_stack: DEFAULT_OPPONENT_STACK,
            max_raise_multiple: DEFAULT_MAX_RAISE_MULTIPLE,
        }
    }

    pub fn with_opponent_stack(mut self, stack: u32) -> Self {
        self.opponent_stack = stack;
        self
    }

    pub fn with_max_raise_multiple(mut self, multiple: u32) -> Self {
        self.max_raise_multiple = multiple.max(1);
        self
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn seat_count(&self) -> usize {
        self.seat_count
    }
    pub fn hands_completed(&self) -> u32 {
        self.hands_completed
    }

    /// Parameters of the next hand to be played.
    pub fn hand_config(&self) -> HandConfig {
        HandConfig {
            seat_count: self.seat_count,
            blinds: self.blinds,
            dealer: self.dealer,
            opponent_stack: self.opponent_stack,
            raise_step: self.blinds.big,
            max_raise_step: self.blinds.big.saturating_mul(self.max_raise_multiple),
        }
    }

    /// Refills and reshuffles the deck, plays one hand, then advances the
    /// button and blind level.
    pub fn play_next_hand(&mut self, ctx: &mut HandContext<'_>) -> Result<HandOutcome, GameError> {
        ctx.deck.refill();
        ctx.deck.shuffle();
        let outcome = play_hand(self.hand_config(), ctx)?;
        self.complete_hand();
        Ok(outcome)
    }

    /// Advances the session by one finished hand.
    pub fn complete_hand(&mut self) {
        self.hands_completed += 1;
        self.dealer = (self.dealer + 1) % self.seat_count;
        let next = self.schedule.level_after(self.hands_completed);
        if next != self.blinds {
            info!(
                hands = self.hands_completed,
                small = next.small,
                big = next.big,
                "blinds increased"
            );
            self.blinds = next;
        }
    }
}
