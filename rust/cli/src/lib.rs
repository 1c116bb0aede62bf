//! # Casino CLI Library
//!
//! Console harness for the `casino-engine` Hold'em core: one human seat
//! against scripted opponents, plus a few inspection commands.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the appropriate
//! subcommand, writing to the given output streams and returning the exit
//! code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["casino", "sim", "--hands", "10", "--seed", "42"];
//! let code = casino_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands interactively, reading actions from stdin
//! - `sim`: Let a scripted policy play the human seat
//! - `rank`: Rank 5 to 7 cards given as text
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{CasinoCli, Commands};
use commands::{handle_cfg_command, handle_play_command, handle_rank_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "rank", "cfg"];

/// Main entry point for the CLI application.
///
/// Interactive input for `play` is read from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["casino", "rank", "As", "Ks", "Qs", "Js", "Ts"];
/// let code = casino_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with an explicit input stream for interactive commands.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CasinoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play { session } => handle_play_command(session, input, out, err),
        Commands::Sim { session } => handle_sim_command(session, out, err),
        Commands::Rank { cards } => handle_rank_command(&cards, out),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: casino <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: casino --help");
    exit_code::ERROR
}
