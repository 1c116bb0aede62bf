use crate::errors::GameError;
use crate::player::PlayerAction as A;
use crate::policy::ActionRequest;

/// An action resolved against the seat's balance: the chips it will move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    /// Raise to `to`, putting in `amount` more chips
    Raise { to: u32, amount: u32 },
    AllIn(u32),
}

impl ValidatedAction {
    /// Chips this action puts into the pot.
    pub fn amount(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(a) | ValidatedAction::AllIn(a) => *a,
            ValidatedAction::Raise { amount, .. } => *amount,
        }
    }
}

/// Legal raise targets for a given bet level: `[current + step, current + max_step]`.
pub fn raise_bounds(current_bet: u32, step: u32, max_step: u32) -> (u32, u32) {
    let min = current_bet.saturating_add(step);
    let max = current_bet.saturating_add(max_step.max(step));
    (min, max)
}

/// Check when nothing is owed, otherwise call; short stacks go all-in.
pub fn check_or_call(request: &ActionRequest) -> ValidatedAction {
    if request.to_call == 0 {
        ValidatedAction::Check
    } else if request.balance <= request.to_call {
        ValidatedAction::AllIn(request.balance)
    } else {
        ValidatedAction::Call(request.to_call)
    }
}

/// Validates a seat action against the request it answers.
///
/// Insufficient funds are never an error: a call or raise the seat cannot
/// cover becomes an all-in for its remaining balance.
///
/// # Errors
///
/// [`GameError::InvalidRaise`] when a raise target lies outside
/// `request.min_raise_to..=request.max_raise_to`.
///
/// # Examples
///
/// ```
/// use casino_engine::logger::Stage;
/// use casino_engine::player::PlayerAction;
/// use casino_engine::policy::ActionRequest;
/// use casino_engine::rules::{validate_action, ValidatedAction};
/// use casino_engine::cards::parse_cards;
///
/// let hole = parse_cards("As Kd").unwrap();
/// let request = ActionRequest {
///     seat: 0,
///     stage: Stage::PreFlop,
///     hole: [hole[0], hole[1]],
///     community: vec![],
///     pot: 15,
///     current_bet: 10,
///     contribution: 0,
///     to_call: 10,
///     balance: 1000,
///     min_raise_to: 20,
///     max_raise_to: 110,
///     seats_in_hand: 3,
/// };
/// assert_eq!(
///     validate_action(&request, PlayerAction::CheckOrCall),
///     Ok(ValidatedAction::Call(10))
/// );
/// assert!(validate_action(&request, PlayerAction::Raise(15)).is_err());
/// ```
pub fn validate_action(request: &ActionRequest, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::CheckOrCall => Ok(check_or_call(request)),
        A::Raise(to) => {
            if to < request.min_raise_to || to > request.max_raise_to {
                return Err(GameError::InvalidRaise {
                    amount: to,
                    min: request.min_raise_to,
                    max: request.max_raise_to,
                });
            }
            let amount = to.saturating_sub(request.contribution);
            if amount >= request.balance {
                Ok(ValidatedAction::AllIn(request.balance))
            } else {
                Ok(ValidatedAction::Raise { to, amount })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::logger::Stage;

    fn request(to_call: u32, balance: u32) -> ActionRequest {
        let c = Card::new(Rank::Two, Suit::Clubs);
        ActionRequest {
            seat: 0,
            stage: Stage::Flop,
            hole: [c, c],
            community: vec![],
            pot: 100,
            current_bet: 50,
            contribution: 50 - to_call,
            to_call,
            balance,
            min_raise_to: 60,
            max_raise_to: 150,
            seats_in_hand: 2,
        }
    }

    #[test]
    fn check_when_nothing_owed() {
        assert_eq!(
            validate_action(&request(0, 100), A::CheckOrCall),
            Ok(ValidatedAction::Check)
        );
    }

    #[test]
    fn short_call_becomes_all_in() {
        assert_eq!(
            validate_action(&request(30, 20), A::CheckOrCall),
            Ok(ValidatedAction::AllIn(20))
        );
    }

    #[test]
    fn raise_outside_bounds_is_rejected() {
        assert!(matches!(
            validate_action(&request(0, 500), A::Raise(59)),
            Err(GameError::InvalidRaise { min: 60, max: 150, .. })
        ));
        assert!(validate_action(&request(0, 500), A::Raise(151)).is_err());
    }

    #[test]
    fn raise_pays_difference_to_target() {
        assert_eq!(
            validate_action(&request(10, 500), A::Raise(100)),
            Ok(ValidatedAction::Raise { to: 100, amount: 60 })
        );
    }

    #[test]
    fn raise_beyond_balance_becomes_all_in() {
        assert_eq!(
            validate_action(&request(0, 40), A::Raise(100)),
            Ok(ValidatedAction::AllIn(40))
        );
    }

    #[test]
    fn bounds_follow_current_bet() {
        assert_eq!(raise_bounds(20, 10, 100), (30, 120));
        assert_eq!(raise_bounds(0, 10, 5), (10, 10));
    }
}
