//! # Play Command
//!
//! Interactive Hold'em: the human seat's actions are read line by line from
//! an input stream, every other seat follows the configured opponent policy.
//!
//! - Input is parsed by [`parse_player_action`]; unparseable lines are
//!   reported and asked again without counting as an attempt
//! - Illegal raises are rejected by the engine and re-requested
//! - `q`, `quit`, or end of input folds the current hand and ends the session

use casino_engine::engine::HandContext;
use casino_engine::errors::GameError;
use casino_engine::ledger::BetLedger;
use casino_engine::logger::{HandLogger, Stage};
use casino_engine::player::PlayerAction;
use casino_engine::policy::{ActionRequest, ActionSource};
use std::io::{BufRead, Write};

use super::{Session, write_outcome};
use crate::cli::SessionArgs;
use crate::error::CliError;
use crate::io_utils::{open_history, read_stdin_line};
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

const DEFAULT_HANDS: u32 = 1;

/// Handle the play command: interactive hands until the count is reached,
/// the human runs out of chips, or quits.
pub fn handle_play_command(
    args: SessionArgs,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut session = Session::resolve(args, DEFAULT_HANDS)?;
    let mut history = match &session.history {
        Some(path) => Some(HandLogger::new(open_history(path).map_err(CliError::InvalidInput)?)),
        None => None,
    };
    session.write_header("play", out)?;

    let mut console = ConsoleActions::new(stdin, out, err);
    let mut played = 0u32;
    for hand in 1..=session.hands {
        if session.ledger.balance() == 0 {
            writeln!(console.out(), "You are out of chips.")?;
            break;
        }
        let blinds = session.game.blinds();
        writeln!(
            console.out(),
            "\nHand {} | dealer {} | blinds {}/{} | balance {}",
            hand,
            ui::seat_label(session.game.dealer()),
            blinds.small,
            blinds.big,
            session.ledger.balance()
        )?;

        let mut outcome = {
            let mut ctx = HandContext {
                deck: &mut session.deck,
                ledger: &mut session.ledger,
                human: &mut console,
                policy: session.policy.as_ref(),
                rng: &mut session.rng,
            };
            session.game.play_next_hand(&mut ctx)?
        };
        played += 1;
        write_outcome(console.out(), hand, &outcome)?;
        if let Some(logger) = history.as_mut() {
            outcome.record.seed = Some(session.seed);
            logger.write(&outcome.record)?;
        }
        if console.quit_requested() {
            writeln!(console.out(), "Quitting after hand {}.", hand)?;
            break;
        }
    }

    session.write_summary(played, console.out())?;
    Ok(())
}

/// Human action source backed by line input.
struct ConsoleActions<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    quit: bool,
}

impl<'a> ConsoleActions<'a> {
    fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            input,
            out,
            err,
            quit: false,
        }
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }

    fn prompt(&mut self, request: &ActionRequest) -> std::io::Result<()> {
        if request.stage == Stage::PreFlop && request.community.is_empty() {
            writeln!(self.out, "Your cards: {}", ui::format_cards(&request.hole))?;
        }
        writeln!(
            self.out,
            "{:?} | board {} | pot {} | to call {} | stack {}",
            request.stage,
            ui::format_cards(&request.community),
            request.pot,
            request.to_call,
            request.balance
        )?;
        write!(
            self.out,
            "Action (f)old, (c)heck/call, (r)aise {}-{}, (q)uit: ",
            request.min_raise_to, request.max_raise_to
        )?;
        self.out.flush()
    }
}

impl ActionSource for ConsoleActions<'_> {
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction {
        if self.quit {
            return PlayerAction::Fold;
        }
        loop {
            let _ = self.prompt(request);
            let Some(line) = read_stdin_line(self.input) else {
                let _ = writeln!(self.out);
                self.quit = true;
                return PlayerAction::Fold;
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => return action,
                ParseResult::Quit => {
                    self.quit = true;
                    return PlayerAction::Fold;
                }
                ParseResult::Invalid(msg) => {
                    let _ = ui::write_error(self.err, &msg);
                }
            }
        }
    }

    fn notify_rejected(&mut self, _request: &ActionRequest, error: &GameError) {
        let _ = ui::write_error(self.err, &error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn play(args: SessionArgs, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(args, &mut stdin, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn args(hands: u32) -> SessionArgs {
        SessionArgs {
            hands: Some(hands),
            seed: Some(42),
            seats: Some(3),
            ai: Some("passive".into()),
            history: None,
        }
    }

    #[test]
    #[serial]
    fn quit_folds_and_ends_session() {
        let (result, out, _) = play(args(5), "q\n");
        assert!(result.is_ok());
        assert!(out.contains("Hand 1"));
        assert!(out.contains("Quitting after hand 1."));
        assert!(out.contains("Hands played: 1"));
        assert!(!out.contains("Hand 2 "));
    }

    #[test]
    #[serial]
    fn end_of_input_behaves_like_quit() {
        let (result, out, _) = play(args(3), "");
        assert!(result.is_ok());
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    #[serial]
    fn garbage_input_is_reported_and_asked_again() {
        let (result, out, err) = play(args(1), "dance\nc\nc\nc\nc\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'dance'"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    #[serial]
    fn out_of_range_raise_is_rejected_by_engine() {
        let (result, _, err) = play(args(1), "r 1\nc\nc\nc\nc\n");
        assert!(result.is_ok());
        assert!(err.contains("Error: "), "{err}");
    }

    #[test]
    #[serial]
    fn zero_hands_is_invalid() {
        let (result, _, _) = play(args(0), "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn history_is_written_as_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hands.jsonl");
        let mut session = args(2);
        session.history = Some(path.clone());
        let (result, _, _) = play(session, "c\nc\nc\nc\nc\nc\nc\nc\n");
        assert!(result.is_ok());
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["seed"], 42);
    }
}
