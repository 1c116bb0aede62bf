use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Represents a seat's decision during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check when nothing is owed, otherwise call the outstanding amount
    CheckOrCall,
    /// Raise the bet to match to the given total
    Raise(u32),
}

/// Betting status of a seat for the current hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatStatus {
    Active,
    Folded,
    /// Committed everything; cannot bet further but can still win.
    AllIn,
}

/// Per-hand state of one seat at the table.
///
/// Created fresh for every hand. The human seat mirrors its stack from the
/// bet ledger; opponents receive a fixed stack each hand.
#[derive(Debug, Clone)]
pub struct SeatState {
    /// Seat index at the table
    index: usize,
    is_human: bool,
    /// Chips still available to bet this hand
    stack: u32,
    /// Cumulative chips put into the pot this hand
    contribution: u32,
    status: SeatStatus,
    /// Hole cards (up to 2 cards)
    hole: [Option<Card>; 2],
}

impl SeatState {
    pub fn new(index: usize, stack: u32, is_human: bool) -> Self {
        Self {
            index,
            is_human,
            stack,
            contribution: 0,
            status: SeatStatus::Active,
            hole: [None, None],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn contribution(&self) -> u32 {
        self.contribution
    }
    pub fn status(&self) -> SeatStatus {
        self.status
    }

    /// Active or all-in: still eligible for the pot.
    pub fn in_hand(&self) -> bool {
        self.status != SeatStatus::Folded
    }

    /// Still able to act in a betting round.
    pub fn can_act(&self) -> bool {
        self.status == SeatStatus::Active
    }

    pub fn fold(&mut self) {
        self.status = SeatStatus::Folded;
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards, once dealt.
    pub fn hole(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(GameError::HoleCardsFull(self.index))
        }
    }

    /// Moves up to `amount` from the stack into this seat's contribution.
    ///
    /// Returns the chips actually committed; emptying the stack marks the
    /// seat all-in.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.contribution += paid;
        if self.stack == 0 && self.status == SeatStatus::Active {
            self.status = SeatStatus::AllIn;
        }
        paid
    }

    /// Forces the stack to the ledger's view of the balance.
    pub(crate) fn sync_stack(&mut self, stack: u32) {
        self.stack = stack;
        if stack == 0 && self.status == SeatStatus::Active {
            self.status = SeatStatus::AllIn;
        }
    }
}
