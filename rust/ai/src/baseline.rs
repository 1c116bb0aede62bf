//! Rule-based opponents.
//!
//! [`BaselineAI`] rates its hand by category only: a pocket pair counts as
//! one pair before the flop, and after it the best hand over the revealed
//! cards decides. Each stage has a minimum category below which the seat may
//! fold to a bet; two pair or better may raise by the minimum increment.

use casino_engine::hand::{best_hand, Category};
use casino_engine::logger::Stage;
use casino_engine::player::PlayerAction;
use casino_engine::policy::{ActionRequest, OpponentPolicy};
use rand::{Rng, RngCore};

pub const DEFAULT_FOLD_CHANCE: f64 = 0.5;
pub const DEFAULT_RAISE_CHANCE: f64 = 0.3;

/// Threshold-and-dice opponent.
///
/// # Example
///
/// ```rust
/// use casino_ai::baseline::BaselineAI;
/// use casino_engine::policy::OpponentPolicy;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "baseline");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineAI {
    fold_chance: f64,
    raise_chance: f64,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self::with_chances(DEFAULT_FOLD_CHANCE, DEFAULT_RAISE_CHANCE)
    }

    /// Probabilities are clamped to `0.0..=1.0`.
    pub fn with_chances(fold_chance: f64, raise_chance: f64) -> Self {
        Self {
            fold_chance: fold_chance.clamp(0.0, 1.0),
            raise_chance: raise_chance.clamp(0.0, 1.0),
        }
    }

    pub fn fold_chance(&self) -> f64 {
        self.fold_chance
    }

    pub fn raise_chance(&self) -> f64 {
        self.raise_chance
    }

    /// Weakest category the seat continues with unconditionally.
    pub fn threshold(stage: Stage) -> Category {
        match stage {
            Stage::PreFlop | Stage::Flop => Category::HighCard,
            Stage::Turn | Stage::River | Stage::Showdown => Category::OnePair,
        }
    }

    /// Hand category from the cards visible to the seat.
    pub fn strength(request: &ActionRequest) -> Category {
        if request.community.is_empty() {
            let [a, b] = request.hole;
            return if a.rank == b.rank {
                Category::OnePair
            } else {
                Category::HighCard
            };
        }
        let mut cards = request.hole.to_vec();
        cards.extend_from_slice(&request.community);
        best_hand(&cards).map_or(Category::HighCard, |rank| rank.category())
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for BaselineAI {
    fn decide(&self, request: &ActionRequest, rng: &mut dyn RngCore) -> PlayerAction {
        let strength = Self::strength(request);
        if strength < Self::threshold(request.stage)
            && request.to_call > 0
            && rng.random_bool(self.fold_chance)
        {
            return PlayerAction::Fold;
        }
        if strength >= Category::TwoPair && rng.random_bool(self.raise_chance) {
            return PlayerAction::Raise(request.min_raise_to);
        }
        PlayerAction::CheckOrCall
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

/// Never folds, never raises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassiveAI;

impl OpponentPolicy for PassiveAI {
    fn decide(&self, _request: &ActionRequest, _rng: &mut dyn RngCore) -> PlayerAction {
        PlayerAction::CheckOrCall
    }

    fn name(&self) -> &str {
        "passive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casino_engine::cards::parse_cards;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn request(stage: Stage, hole: &str, board: &str, to_call: u32) -> ActionRequest {
        let hole = parse_cards(hole).unwrap();
        ActionRequest {
            seat: 1,
            stage,
            hole: [hole[0], hole[1]],
            community: parse_cards(board).unwrap(),
            pot: 40,
            current_bet: 20,
            contribution: 20 - to_call,
            to_call,
            balance: 500,
            min_raise_to: 30,
            max_raise_to: 120,
            seats_in_hand: 3,
        }
    }

    #[test]
    fn preflop_pair_counts_as_one_pair() {
        assert_eq!(
            BaselineAI::strength(&request(Stage::PreFlop, "9c 9d", "", 10)),
            Category::OnePair
        );
        assert_eq!(
            BaselineAI::strength(&request(Stage::PreFlop, "Ac Kd", "", 10)),
            Category::HighCard
        );
    }

    #[test]
    fn postflop_strength_uses_revealed_cards() {
        let r = request(Stage::Turn, "9c 4d", "9h 4s Kc 2d", 0);
        assert_eq!(BaselineAI::strength(&r), Category::TwoPair);
    }

    #[test]
    fn weak_hand_facing_bet_folds_when_the_dice_say_so() {
        let ai = BaselineAI::with_chances(1.0, 0.0);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let r = request(Stage::River, "2c 7d", "9h 4s Kc Jd 3s", 10);
        assert_eq!(ai.decide(&r, &mut rng), PlayerAction::Fold);
    }

    #[test]
    fn weak_hand_never_folds_a_free_check() {
        let ai = BaselineAI::with_chances(1.0, 0.0);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let r = request(Stage::River, "2c 7d", "9h 4s Kc Jd 3s", 0);
        assert_eq!(ai.decide(&r, &mut rng), PlayerAction::CheckOrCall);
    }

    #[test]
    fn strong_hand_raises_by_minimum() {
        let ai = BaselineAI::with_chances(0.0, 1.0);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let r = request(Stage::Flop, "Kh Kd", "Kc 4s 4d", 20);
        assert_eq!(ai.decide(&r, &mut rng), PlayerAction::Raise(30));
    }

    #[test]
    fn decisions_replay_with_the_same_seed() {
        let ai = BaselineAI::new();
        let r = request(Stage::Turn, "2c 7d", "9h 4s Kc Jd", 10);
        let run = |seed| {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            (0..50).map(|_| ai.decide(&r, &mut rng)).collect::<Vec<_>>()
        };
        let a = run(9);
        assert_eq!(a, run(9));
        assert!(a.contains(&PlayerAction::Fold));
        assert!(a.contains(&PlayerAction::CheckOrCall));
    }

    #[test]
    fn chances_are_clamped() {
        let ai = BaselineAI::with_chances(3.0, -1.0);
        assert_eq!(ai.fold_chance(), 1.0);
        assert_eq!(ai.raise_chance(), 0.0);
    }

    #[test]
    fn passive_always_calls() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let r = request(Stage::River, "2c 7d", "9h 4s Kc Jd 3s", 100);
        assert_eq!(PassiveAI.decide(&r, &mut rng), PlayerAction::CheckOrCall);
    }
}
