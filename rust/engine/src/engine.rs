use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::betting::{BettingRound, RoundState};
use crate::deck::CardSource;
use crate::errors::GameError;
use crate::hand::HandRank;
use crate::ledger::BetLedger;
use crate::logger::{HandRecord, ShowdownInfo, Stage};
use crate::policy::{ActionSource, OpponentPolicy};
use crate::showdown::{self, ShowdownResult};
use crate::table::{table_chips, Blinds, Seats, TableState, HUMAN_SEAT};

/// Chips every opponent seat starts a hand with.
pub const DEFAULT_OPPONENT_STACK: u32 = 500;
/// Largest raise increment, in big blinds.
pub const DEFAULT_MAX_RAISE_MULTIPLE: u32 = 10;

/// Borrowed collaborators one hand is played against.
///
/// The hand owns none of them: the deck, bankroll, and decision sources
/// outlive it and are shared across a session.
pub struct HandContext<'a> {
    pub deck: &'a mut dyn CardSource,
    pub ledger: &'a mut dyn BetLedger,
    pub human: &'a mut dyn ActionSource,
    pub policy: &'a dyn OpponentPolicy,
    pub rng: &'a mut dyn RngCore,
}

/// Per-hand parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfig {
    pub seat_count: usize,
    pub blinds: Blinds,
    pub dealer: usize,
    pub opponent_stack: u32,
    /// Smallest raise increment over the current bet
    pub raise_step: u32,
    /// Largest raise increment over the current bet
    pub max_raise_step: u32,
}

impl HandConfig {
    /// Raise increments default to one big blind up to
    /// [`DEFAULT_MAX_RAISE_MULTIPLE`] big blinds.
    pub fn new(seat_count: usize, blinds: Blinds, dealer: usize) -> Self {
        Self {
            seat_count,
            blinds,
            dealer,
            opponent_stack: DEFAULT_OPPONENT_STACK,
            raise_step: blinds.big,
            max_raise_step: blinds.big.saturating_mul(DEFAULT_MAX_RAISE_MULTIPLE),
        }
    }
}

/// How a hand ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOutcome {
    pub pot_awarded: u32,
    /// Seats that took (a share of) the pot, in seat order
    pub winner_seats: Vec<usize>,
    /// Winning hand; `None` when everyone else folded
    pub hand_rank: Option<HandRank>,
    pub ended_by_fold: bool,
    /// Chips the human put into this hand
    pub human_stake: u32,
    /// Chips paid back to the human
    pub human_payout: u32,
    pub record: HandRecord,
}

impl HandOutcome {
    pub fn hand_rank_name(&self) -> &'static str {
        self.hand_rank.map_or("Uncontested", |rank| rank.name())
    }

    /// Net chips won (positive) or lost (negative) by the human.
    pub fn human_net(&self) -> i64 {
        i64::from(self.human_payout) - i64::from(self.human_stake)
    }
}

/// One hand from blinds to settlement.
///
/// Stages advance pre-flop, flop, turn, river, showdown. Each stage burns
/// one card before revealing its community cards. The hand ends early when
/// a betting round leaves a single seat holding cards.
#[derive(Debug)]
pub struct HandSession {
    config: HandConfig,
    table: TableState,
    record: HandRecord,
}

impl HandSession {
    /// Fresh seats; the human brings `human_balance` to the table.
    ///
    /// # Errors
    ///
    /// [`GameError::TableChipsOverflow`] when the human balance plus every
    /// opponent stack does not fit in a `u32` pot.
    pub fn new(config: HandConfig, human_balance: u32) -> Result<Self, GameError> {
        let total = table_chips(config.seat_count, human_balance, config.opponent_stack);
        if total > u64::from(u32::MAX) {
            return Err(GameError::TableChipsOverflow {
                total,
                max: u32::MAX,
            });
        }
        let seats = Seats::new(config.seat_count, human_balance, config.opponent_stack);
        let table = TableState::new(seats, config.blinds, config.dealer);
        let record = HandRecord::new(table.dealer());
        Ok(Self {
            config,
            table,
            record,
        })
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Plays the hand to completion and settles the human's result.
    ///
    /// The deck is dealt as found; callers reshuffle between hands.
    pub fn play(mut self, ctx: &mut HandContext<'_>) -> Result<HandOutcome, GameError> {
        let (sb, bb) = self.table.post_blinds(&mut *ctx.ledger)?;
        self.record.posted = vec![
            (sb, self.table.seat(sb)?.contribution()),
            (bb, self.table.seat(bb)?.contribution()),
        ];
        debug!(dealer = self.table.dealer(), sb, bb, "blinds posted");

        self.deal_hole_cards(&mut *ctx.deck)?;

        for stage in Stage::BETTING {
            self.reveal(stage, &mut *ctx.deck);
            let mut round =
                BettingRound::new(stage, self.config.raise_step, self.config.max_raise_step);
            if let RoundState::AllButOneFolded { winner } =
                round.run(&mut self.table, ctx, &mut self.record)?
            {
                return Ok(self.award_uncontested(winner, &mut *ctx.ledger));
            }
        }

        let result = showdown::resolve(&self.table)?;
        Ok(self.settle_showdown(result, &mut *ctx.ledger))
    }

    /// Two cards to every seat, one at a time, starting left of the dealer.
    fn deal_hole_cards(&mut self, deck: &mut dyn CardSource) -> Result<(), GameError> {
        let dealer = self.table.dealer();
        let seats = self.table.seat_count();
        for _ in 0..2 {
            for step in 1..=seats {
                let seat = self.table.seats().clockwise(dealer, step);
                self.table.seat_mut(seat)?.give_card(deck.deal_card())?;
            }
        }
        Ok(())
    }

    fn reveal(&mut self, stage: Stage, deck: &mut dyn CardSource) {
        let count = stage.cards_revealed();
        if count == 0 {
            return;
        }
        deck.burn_card();
        for _ in 0..count {
            self.table.reveal(deck.deal_card());
        }
        debug!(?stage, board = self.table.community().len(), "community cards revealed");
    }

    fn award_uncontested(mut self, winner: usize, ledger: &mut dyn BetLedger) -> HandOutcome {
        let pot = self.table.pot();
        let human_stake = self.human_stake();
        let human_payout = if winner == HUMAN_SEAT {
            ledger.process_win(human_stake, pot);
            pot
        } else {
            ledger.process_loss(human_stake);
            0
        };
        info!(winner, pot, "hand won uncontested");
        self.record.showdown = Some(ShowdownInfo {
            winners: vec![winner],
            notes: Some("uncontested".to_string()),
        });
        self.finish(vec![winner], None, true, human_stake, human_payout)
    }

    fn settle_showdown(
        mut self,
        result: ShowdownResult,
        ledger: &mut dyn BetLedger,
    ) -> HandOutcome {
        let human_stake = self.human_stake();
        let human_payout = result.payout_for(HUMAN_SEAT);
        if result.winners.contains(&HUMAN_SEAT) {
            ledger.process_win(human_stake, human_payout);
        } else {
            ledger.process_loss(human_stake);
        }
        let note = if result.is_split() {
            format!("split pot, {}", result.best.name())
        } else {
            result.best.name().to_string()
        };
        self.record.showdown = Some(ShowdownInfo {
            winners: result.winners.clone(),
            notes: Some(note),
        });
        self.finish(result.winners, Some(result.best), false, human_stake, human_payout)
    }

    fn human_stake(&self) -> u32 {
        self.table
            .seat(HUMAN_SEAT)
            .map_or(0, |seat| seat.contribution())
    }

    fn finish(
        mut self,
        winner_seats: Vec<usize>,
        hand_rank: Option<HandRank>,
        ended_by_fold: bool,
        human_stake: u32,
        human_payout: u32,
    ) -> HandOutcome {
        self.record.board = self.table.community().to_vec();
        self.record.pot = self.table.pot();
        HandOutcome {
            pot_awarded: self.table.pot(),
            winner_seats,
            hand_rank,
            ended_by_fold,
            human_stake,
            human_payout,
            record: self.record,
        }
    }
}

/// Plays one complete hand with the human's current ledger balance.
pub fn play_hand(config: HandConfig, ctx: &mut HandContext<'_>) -> Result<HandOutcome, GameError> {
    HandSession::new(config, ctx.ledger.balance())?.play(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::StackedDeck;
    use crate::ledger::Bankroll;
    use crate::player::PlayerAction;
    use crate::policy::{ActionRequest, ScriptedActions};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    struct AlwaysCall;

    impl OpponentPolicy for AlwaysCall {
        fn decide(&self, _request: &ActionRequest, _rng: &mut dyn RngCore) -> PlayerAction {
            PlayerAction::CheckOrCall
        }
        fn name(&self) -> &str {
            "call"
        }
    }

    // heads-up, dealer 1: deal order seat 0, seat 1, seat 0, seat 1
    fn stacked(cards: &str) -> StackedDeck {
        StackedDeck::new(parse_cards(cards).unwrap())
    }

    #[test]
    fn human_fold_forfeits_blind() {
        let mut deck = stacked("As Ah Kd Kc 2c 7d 8h 9s Jc 3d Qd 4h");
        let mut ledger = Bankroll::new(100);
        let mut human = ScriptedActions::new([PlayerAction::Fold]);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut ctx = HandContext {
            deck: &mut deck,
            ledger: &mut ledger,
            human: &mut human,
            policy: &AlwaysCall,
            rng: &mut rng,
        };
        let outcome = play_hand(HandConfig::new(2, Blinds::new(5, 10), 1), &mut ctx).unwrap();
        assert!(outcome.ended_by_fold);
        assert_eq!(outcome.winner_seats, vec![1]);
        assert_eq!(outcome.pot_awarded, 15);
        assert_eq!(outcome.hand_rank_name(), "Uncontested");
        assert_eq!(ledger.balance(), 95);
        assert_eq!(ledger.total_losses(), 5);
    }

    #[test]
    fn showdown_pays_the_best_hand() {
        // seat 0: As Ad, seat 1: Kd Kc; board 2c 7d 8h, 3d, 4h after burns
        let mut deck = stacked("As Kd Ad Kc 9s 2c 7d 8h Jc 3d Qh 4h");
        let mut ledger = Bankroll::new(100);
        let mut human = ScriptedActions::default();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut ctx = HandContext {
            deck: &mut deck,
            ledger: &mut ledger,
            human: &mut human,
            policy: &AlwaysCall,
            rng: &mut rng,
        };
        let outcome = play_hand(HandConfig::new(2, Blinds::new(5, 10), 1), &mut ctx).unwrap();
        assert!(!outcome.ended_by_fold);
        assert_eq!(outcome.winner_seats, vec![0]);
        assert_eq!(outcome.hand_rank_name(), "One Pair");
        assert_eq!(outcome.pot_awarded, 20);
        assert_eq!(outcome.record.board.len(), 5);
        assert_eq!(ledger.balance(), 110);
        assert_eq!(outcome.human_net(), 10);
    }

    #[test]
    fn oversized_stacks_are_refused_before_blinds() {
        let mut deck = stacked("As Kd Ad Kc 9s 2c 7d 8h Jc 3d Qh 4h");
        let mut ledger = Bankroll::new(u32::MAX);
        let mut human = ScriptedActions::default();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut ctx = HandContext {
            deck: &mut deck,
            ledger: &mut ledger,
            human: &mut human,
            policy: &AlwaysCall,
            rng: &mut rng,
        };
        let mut config = HandConfig::new(3, Blinds::new(1 << 31, (1 << 31) + 1), 0);
        config.opponent_stack = u32::MAX;
        let result = play_hand(config, &mut ctx);
        assert!(matches!(result, Err(GameError::TableChipsOverflow { .. })));
        assert_eq!(ledger.balance(), u32::MAX);
        assert_eq!(ledger.total_losses(), 0);
    }

    #[test]
    fn stacks_up_to_the_limit_still_play() {
        let mut deck = stacked("As Kd Ad Kc 9s 2c 7d 8h Jc 3d Qh 4h");
        let mut ledger = Bankroll::new(u32::MAX / 2);
        let mut human = ScriptedActions::new([PlayerAction::Fold]);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut ctx = HandContext {
            deck: &mut deck,
            ledger: &mut ledger,
            human: &mut human,
            policy: &AlwaysCall,
            rng: &mut rng,
        };
        let mut config = HandConfig::new(2, Blinds::new(1 << 30, (1 << 30) + 1), 1);
        config.opponent_stack = u32::MAX - u32::MAX / 2;
        let outcome = play_hand(config, &mut ctx).unwrap();
        assert_eq!(outcome.pot_awarded, (1 << 30) + (1 << 30) + 1);
        assert_eq!(ledger.balance(), u32::MAX / 2 - (1 << 30));
    }
}
