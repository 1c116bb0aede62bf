//! Decision seams: where a betting round asks a seat what to do.
//!
//! The human seat is answered by an [`ActionSource`] (the console in the
//! CLI, a script in tests); every other seat by an [`OpponentPolicy`].

use rand::RngCore;

use crate::cards::Card;
use crate::errors::GameError;
use crate::logger::Stage;
use crate::player::PlayerAction;

/// Snapshot of the table offered to a seat when it is asked to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub seat: usize,
    pub stage: Stage,
    pub hole: [Card; 2],
    pub community: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    /// Seat's cumulative contribution this hand
    pub contribution: u32,
    /// Outstanding amount to match the current bet
    pub to_call: u32,
    /// Chips the seat can still put in
    pub balance: u32,
    /// Smallest legal `Raise` target
    pub min_raise_to: u32,
    /// Largest legal `Raise` target
    pub max_raise_to: u32,
    /// Seats still holding cards, this one included
    pub seats_in_hand: usize,
}

/// Blocking source of the human player's actions.
pub trait ActionSource {
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction;

    /// Told when the previous answer was not legal; the request is repeated.
    fn notify_rejected(&mut self, _request: &ActionRequest, _error: &GameError) {}
}

/// Scripted decision policy for non-human seats.
pub trait OpponentPolicy {
    fn decide(&self, request: &ActionRequest, rng: &mut dyn RngCore) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Action source replaying a fixed script, then checking/calling.
#[derive(Debug, Clone, Default)]
pub struct ScriptedActions {
    actions: std::collections::VecDeque<PlayerAction>,
    rejections: usize,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            rejections: 0,
        }
    }

    pub fn rejections(&self) -> usize {
        self.rejections
    }
}

impl ActionSource for ScriptedActions {
    fn request_action(&mut self, _request: &ActionRequest) -> PlayerAction {
        self.actions.pop_front().unwrap_or(PlayerAction::CheckOrCall)
    }

    fn notify_rejected(&mut self, _request: &ActionRequest, _error: &GameError) {
        self.rejections += 1;
    }
}

/// Lets an opponent policy drive the human seat (auto-pilot / simulation).
pub struct PolicyActions<'a, R: RngCore> {
    policy: &'a dyn OpponentPolicy,
    rng: R,
}

impl<'a, R: RngCore> PolicyActions<'a, R> {
    pub fn new(policy: &'a dyn OpponentPolicy, rng: R) -> Self {
        Self { policy, rng }
    }
}

impl<R: RngCore> ActionSource for PolicyActions<'_, R> {
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction {
        self.policy.decide(request, &mut self.rng)
    }
}
