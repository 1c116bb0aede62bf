//! `sim` command: the human seat is played by a scripted policy.
//!
//! Useful for non-interactive runs and for checking that a seed reproduces
//! a whole session.

use casino_ai::BaselineAI;
use casino_engine::engine::HandContext;
use casino_engine::ledger::BetLedger;
use casino_engine::logger::HandLogger;
use casino_engine::policy::PolicyActions;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tracing::info;

use super::{Session, write_outcome};
use crate::cli::SessionArgs;
use crate::error::CliError;
use crate::io_utils::open_history;

const DEFAULT_HANDS: u32 = 100;

pub fn handle_sim_command(
    args: SessionArgs,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut session = Session::resolve(args, DEFAULT_HANDS)?;
    let mut history = match &session.history {
        Some(path) => Some(HandLogger::new(open_history(path).map_err(CliError::InvalidInput)?)),
        None => None,
    };
    session.write_header("sim", out)?;

    let autopilot = BaselineAI::new();
    let autopilot_rng = ChaCha20Rng::seed_from_u64(session.seed.wrapping_add(2));
    let mut human = PolicyActions::new(&autopilot, autopilot_rng);
    let mut played = 0u32;
    for hand in 1..=session.hands {
        if session.ledger.balance() == 0 {
            writeln!(out, "Human seat is out of chips.")?;
            break;
        }
        let mut outcome = {
            let mut ctx = HandContext {
                deck: &mut session.deck,
                ledger: &mut session.ledger,
                human: &mut human,
                policy: session.policy.as_ref(),
                rng: &mut session.rng,
            };
            session.game.play_next_hand(&mut ctx)?
        };
        played += 1;
        write_outcome(out, hand, &outcome)?;
        if let Some(logger) = history.as_mut() {
            outcome.record.seed = Some(session.seed);
            logger.write(&outcome.record)?;
        }
    }
    info!(played, balance = session.ledger.balance(), "simulation finished");

    session.write_summary(played, out)?;
    Ok(())
}
