//! Command handler modules for the casino CLI.
//!
//! Each command is implemented in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum
//!
//! The session commands (`play`, `sim`) share the setup in this module:
//! config plus command-line overrides, seeded randomness, and the per-hand
//! report.

mod cfg;
mod play;
mod rank;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;

use std::io::Write;
use std::path::PathBuf;

use casino_ai::create_ai;
use casino_engine::deck::Deck;
use casino_engine::engine::HandOutcome;
use casino_engine::game::{BlindSchedule, GameState};
use casino_engine::ledger::{Bankroll, BetLedger};
use casino_engine::policy::OpponentPolicy;
use casino_engine::table::Blinds;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cli::SessionArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

/// Everything a session command needs before its first hand.
pub(crate) struct Session {
    pub config: Config,
    pub hands: u32,
    pub seed: u64,
    pub history: Option<PathBuf>,
    pub game: GameState,
    pub deck: Deck,
    pub ledger: Bankroll,
    pub policy: Box<dyn OpponentPolicy>,
    pub rng: ChaCha20Rng,
}

impl Session {
    /// Config file and environment first, then command-line flags. The
    /// merged result is validated once, so a flag can replace a bad value.
    pub fn resolve(args: SessionArgs, default_hands: u32) -> Result<Self, CliError> {
        let mut config = config::load_unvalidated()?;
        if let Some(seats) = args.seats {
            config.seats = usize::from(seats);
        }
        if let Some(ai) = args.ai {
            config.ai = ai;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        config::validate(&config)?;

        let hands = args.hands.unwrap_or(default_hands);
        if hands == 0 {
            return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        let policy = create_ai(&config.ai)
            .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", config.ai)))?;

        let schedule = BlindSchedule::new(
            Blinds::new(config.small_blind, config.big_blind),
            config.blind_increase_interval,
            config.blind_increase_amount,
        );
        let game = GameState::new(config.seats, schedule)
            .with_opponent_stack(config.opponent_stack)
            .with_max_raise_multiple(config.max_raise_multiple);

        Ok(Self {
            hands,
            seed,
            history: args.history,
            game,
            deck: Deck::new_with_seed(seed),
            ledger: Bankroll::new(config.starting_balance),
            policy,
            rng: ChaCha20Rng::seed_from_u64(seed.wrapping_add(1)),
            config,
        })
    }

    pub fn write_header(&self, command: &str, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{}: seats={} hands={} seed={} ai={}",
            command,
            self.config.seats,
            self.hands,
            self.seed,
            self.policy.name()
        )?;
        writeln!(out, "Balance: {}", self.ledger.balance())
    }

    pub fn write_summary(&self, played: u32, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Hands played: {}", played)?;
        writeln!(out, "Final balance: {}", self.ledger.balance())?;
        writeln!(out, "Total earnings: {}", self.ledger.total_earnings())?;
        writeln!(out, "Total losses: {}", self.ledger.total_losses())
    }
}

/// One line per finished hand.
pub(crate) fn write_outcome(
    out: &mut dyn Write,
    hand: u32,
    outcome: &HandOutcome,
) -> std::io::Result<()> {
    let winners = outcome
        .winner_seats
        .iter()
        .map(|&s| ui::seat_label(s))
        .collect::<Vec<_>>()
        .join(", ");
    let verb = if outcome.winner_seats.len() > 1 {
        "split"
    } else {
        "won"
    };
    writeln!(
        out,
        "Hand {}: {} {} pot {} ({}) board {}",
        hand,
        winners,
        verb,
        outcome.pot_awarded,
        outcome.hand_rank_name(),
        ui::format_cards(&outcome.record.board)
    )
}
