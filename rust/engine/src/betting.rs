//! One betting stage as a small state machine.
//!
//! A round starts `Collecting`, lets the human act first and then every
//! opponent still able to bet in seat order, each exactly once, and ends
//! `Resolved` or `AllButOneFolded`. A human fold ends the round (and the
//! hand) immediately.

use rand::RngCore;
use tracing::{debug, warn};

use crate::engine::HandContext;
use crate::errors::GameError;
use crate::ledger::BetLedger;
use crate::logger::{HandRecord, Stage};
use crate::player::PlayerAction;
use crate::policy::{ActionRequest, ActionSource, OpponentPolicy};
use crate::rules::{check_or_call, raise_bounds, validate_action, ValidatedAction};
use crate::table::TableState;

/// Attempts the human gets to produce a legal action before it is
/// replaced by check/call.
pub const MAX_ACTION_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Collecting,
    /// Two or more seats remain; the hand moves on.
    Resolved,
    /// Only `winner` still holds cards.
    AllButOneFolded { winner: usize },
}

#[derive(Debug, Clone)]
pub struct BettingRound {
    stage: Stage,
    raise_step: u32,
    max_raise_step: u32,
    state: RoundState,
}

impl BettingRound {
    pub fn new(stage: Stage, raise_step: u32, max_raise_step: u32) -> Self {
        Self {
            stage,
            raise_step,
            max_raise_step,
            state: RoundState::Collecting,
        }
    }

    /// Runs the round to resolution, mutating seats, pot, and current bet.
    pub fn run(
        &mut self,
        table: &mut TableState,
        ctx: &mut HandContext<'_>,
        record: &mut HandRecord,
    ) -> Result<RoundState, GameError> {
        self.state = RoundState::Collecting;
        for seat in 0..table.seat_count() {
            if table.seats().in_hand_count() < 2 {
                break;
            }
            let state = table.seat(seat)?;
            if !state.can_act() {
                continue;
            }
            let is_human = state.is_human();
            let request = self.request_for(table, seat)?;
            let action = if is_human {
                self.ask_human(&request, &mut *ctx.human)
            } else {
                self.ask_opponent(&request, ctx.policy, &mut *ctx.rng)
            };
            self.apply(table, &request, action, &mut *ctx.ledger, record)?;

            if is_human && !table.seat(seat)?.in_hand() {
                let winner = first_in_hand(table)?;
                debug!(stage = ?self.stage, winner, "human folded, hand over");
                self.state = RoundState::AllButOneFolded { winner };
                return Ok(self.state);
            }
        }

        self.state = if table.seats().in_hand_count() == 1 {
            RoundState::AllButOneFolded {
                winner: first_in_hand(table)?,
            }
        } else {
            RoundState::Resolved
        };
        Ok(self.state)
    }

    /// Builds the request a seat sees when asked to act.
    pub fn request_for(&self, table: &TableState, seat: usize) -> Result<ActionRequest, GameError> {
        let state = table.seat(seat)?;
        let hole = state.hole().ok_or(GameError::InvalidCardCount {
            expected: 2,
            actual: state.hole_cards().iter().flatten().count(),
        })?;
        let current_bet = table.current_bet();
        let (min_raise_to, max_raise_to) =
            raise_bounds(current_bet, self.raise_step, self.max_raise_step);
        Ok(ActionRequest {
            seat,
            stage: self.stage,
            hole,
            community: table.community().to_vec(),
            pot: table.pot(),
            current_bet,
            contribution: state.contribution(),
            to_call: table.to_call(seat)?,
            balance: state.stack(),
            min_raise_to,
            max_raise_to,
            seats_in_hand: table.seats().in_hand_count(),
        })
    }

    fn ask_human(&self, request: &ActionRequest, human: &mut dyn ActionSource) -> ValidatedAction {
        for _ in 0..MAX_ACTION_ATTEMPTS {
            let action = human.request_action(request);
            match validate_action(request, action) {
                Ok(validated) => return validated,
                Err(e) => {
                    warn!(seat = request.seat, error = %e, "rejected human action");
                    human.notify_rejected(request, &e);
                }
            }
        }
        check_or_call(request)
    }

    fn ask_opponent(
        &self,
        request: &ActionRequest,
        policy: &dyn OpponentPolicy,
        rng: &mut dyn RngCore,
    ) -> ValidatedAction {
        let action = policy.decide(request, rng);
        validate_action(request, action).unwrap_or_else(|e| {
            warn!(
                seat = request.seat,
                policy = policy.name(),
                error = %e,
                "rejected opponent action"
            );
            check_or_call(request)
        })
    }

    fn apply(
        &self,
        table: &mut TableState,
        request: &ActionRequest,
        action: ValidatedAction,
        ledger: &mut dyn BetLedger,
        record: &mut HandRecord,
    ) -> Result<(), GameError> {
        let seat = request.seat;
        if action == ValidatedAction::Fold {
            table.seat_mut(seat)?.fold();
        }
        let paid = table.commit(seat, action.amount(), ledger)?;
        let logged = match action {
            ValidatedAction::Fold => PlayerAction::Fold,
            ValidatedAction::Check | ValidatedAction::Call(_) => PlayerAction::CheckOrCall,
            ValidatedAction::Raise { to, .. } => PlayerAction::Raise(to),
            ValidatedAction::AllIn(_) => {
                let total = table.seat(seat)?.contribution();
                if total > request.current_bet {
                    PlayerAction::Raise(total)
                } else {
                    PlayerAction::CheckOrCall
                }
            }
        };
        debug!(
            stage = ?self.stage,
            seat,
            action = ?logged,
            paid,
            pot = table.pot(),
            "seat acted"
        );
        record.push(seat, self.stage, logged, paid);
        Ok(())
    }
}

fn first_in_hand(table: &TableState) -> Result<usize, GameError> {
    table
        .seats()
        .in_hand()
        .next()
        .map(|s| s.index())
        .ok_or(GameError::NoWinners)
}
