use casino_engine::deck::{CardSource, Deck};
use casino_engine::engine::HandContext;
use casino_engine::game::{BlindSchedule, GameState};
use casino_engine::ledger::{Bankroll, BetLedger};
use casino_engine::player::PlayerAction;
use casino_engine::policy::{ActionRequest, OpponentPolicy, ScriptedActions};
use casino_engine::table::Blinds;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

struct CallStation;

impl OpponentPolicy for CallStation {
    fn decide(&self, _request: &ActionRequest, _rng: &mut dyn RngCore) -> PlayerAction {
        PlayerAction::CheckOrCall
    }
    fn name(&self) -> &str {
        "call"
    }
}

#[test]
fn session_rotates_dealer_and_escalates_blinds() {
    let mut game = GameState::new(3, BlindSchedule::new(Blinds::new(5, 10), 2, 5));
    let mut deck = Deck::new_with_seed(11);
    let mut ledger = Bankroll::new(1_000);
    let mut human = ScriptedActions::default();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut ctx = HandContext {
        deck: &mut deck,
        ledger: &mut ledger,
        human: &mut human,
        policy: &CallStation,
        rng: &mut rng,
    };

    let mut dealers = Vec::new();
    let mut big_blinds = Vec::new();
    for _ in 0..5 {
        dealers.push(game.dealer());
        big_blinds.push(game.blinds().big);
        let outcome = game.play_next_hand(&mut ctx).unwrap();
        assert_eq!(outcome.record.dealer, *dealers.last().unwrap());
    }
    assert_eq!(dealers, vec![0, 1, 2, 0, 1]);
    assert_eq!(big_blinds, vec![10, 10, 15, 15, 20]);
    assert_eq!(game.hands_completed(), 5);
}

#[test]
fn every_chip_in_the_pot_is_accounted_for() {
    let mut game = GameState::new(4, BlindSchedule::new(Blinds::new(5, 10), 10, 5));
    let mut deck = Deck::new_with_seed(2024);
    let mut ledger = Bankroll::new(1_000);
    let mut human = ScriptedActions::new([PlayerAction::Raise(30)]);
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut ctx = HandContext {
        deck: &mut deck,
        ledger: &mut ledger,
        human: &mut human,
        policy: &CallStation,
        rng: &mut rng,
    };

    let mut net = 0i64;
    for _ in 0..8 {
        let outcome = game.play_next_hand(&mut ctx).unwrap();
        let posted: u32 = outcome.record.posted.iter().map(|(_, chips)| chips).sum();
        let acted: u32 = outcome.record.actions.iter().map(|a| a.amount).sum();
        assert_eq!(posted + acted, outcome.pot_awarded);
        assert!(!outcome.winner_seats.is_empty());
        assert!(outcome.record.board.len() <= 5);
        net += outcome.human_net();
    }
    assert_eq!(i64::from(ledger.balance()), 1_000 + net);
}

#[test]
fn same_seed_replays_the_same_session() {
    fn play(seed: u64) -> Vec<(Vec<usize>, u32)> {
        let mut game = GameState::new(5, BlindSchedule::new(Blinds::new(5, 10), 3, 5));
        let mut deck = Deck::new_with_seed(seed);
        let mut ledger = Bankroll::new(500);
        let mut human = ScriptedActions::default();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut ctx = HandContext {
            deck: &mut deck,
            ledger: &mut ledger,
            human: &mut human,
            policy: &CallStation,
            rng: &mut rng,
        };
        (0..4)
            .map(|_| {
                let o = game.play_next_hand(&mut ctx).unwrap();
                (o.winner_seats, o.pot_awarded)
            })
            .collect()
    }
    assert_eq!(play(77), play(77));
}

#[test]
fn deck_is_refilled_before_each_hand() {
    let mut game = GameState::new(9, BlindSchedule::new(Blinds::new(1, 2), 5, 1));
    let mut deck = Deck::new_with_seed(5);
    let mut ledger = Bankroll::new(200);
    let mut human = ScriptedActions::default();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    {
        let mut ctx = HandContext {
            deck: &mut deck,
            ledger: &mut ledger,
            human: &mut human,
            policy: &CallStation,
            rng: &mut rng,
        };
        game.play_next_hand(&mut ctx).unwrap();
    }
    // 18 hole cards, 5 board cards, 3 burns
    assert_eq!(deck.remaining(), 52 - 26);
}
