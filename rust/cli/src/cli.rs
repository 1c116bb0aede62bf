use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "casino",
    version,
    about = "No-Limit Texas Hold'em against scripted opponents"
)]
pub struct CasinoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Options shared by the session commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Number of hands to play
    #[arg(long)]
    pub hands: Option<u32>,
    /// RNG seed for the deck and opponents
    #[arg(long)]
    pub seed: Option<u64>,
    /// Seats at the table, the human included
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=9))]
    pub seats: Option<u8>,
    /// Opponent policy (baseline, passive)
    #[arg(long)]
    pub ai: Option<String>,
    /// Append every hand as a JSON line to this file
    #[arg(long)]
    pub history: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands interactively; actions are read from stdin
    Play {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Let a scripted policy play the human seat
    Sim {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Rank 5 to 7 cards, e.g. `casino rank As Ks Qs Js Ts`
    Rank {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_are_range_checked() {
        assert!(CasinoCli::try_parse_from(["casino", "play", "--seats", "1"]).is_err());
        assert!(CasinoCli::try_parse_from(["casino", "play", "--seats", "10"]).is_err());
        assert!(CasinoCli::try_parse_from(["casino", "sim", "--seats", "9"]).is_ok());
    }

    #[test]
    fn rank_requires_cards() {
        assert!(CasinoCli::try_parse_from(["casino", "rank"]).is_err());
        let cli = CasinoCli::try_parse_from(["casino", "rank", "As", "Kd"]).unwrap();
        match cli.cmd {
            Commands::Rank { cards } => assert_eq!(cards, vec!["As", "Kd"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn every_subcommand_parses() {
        for args in [
            vec!["casino", "cfg"],
            vec!["casino", "play", "--hands", "3", "--seed", "1"],
            vec!["casino", "sim", "--ai", "passive", "--history", "h.jsonl"],
            vec!["casino", "rank", "As Ks Qs Js Ts"],
        ] {
            assert!(CasinoCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }
}
