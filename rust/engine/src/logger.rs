use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerAction;

/// Represents a stage of a Texas Hold'em hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    /// Hole cards dealt, no board
    PreFlop,
    /// 3 community cards
    Flop,
    /// 4th community card
    Turn,
    /// 5th community card
    River,
    /// Remaining hands revealed and ranked
    Showdown,
}

impl Stage {
    /// Betting stages in order.
    pub const BETTING: [Stage; 4] = [Stage::PreFlop, Stage::Flop, Stage::Turn, Stage::River];

    /// Community cards revealed when entering this stage.
    pub fn cards_revealed(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::PreFlop | Stage::Showdown => 0,
        }
    }
}

/// Records a single seat action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index (0 is the human)
    pub seat: usize,
    /// The stage when this action occurred
    pub stage: Stage,
    /// The action as applied (after validation)
    pub action: PlayerAction,
    /// Chips moved into the pot by this action
    pub amount: u32,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won (a share of) the pot
    pub winners: Vec<usize>,
    /// Optional notes about the outcome (e.g. "split pot", winning hand name)
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of one hand: actions, board, and outcome.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Identifier (format: YYYYMMDD-NNNNNN), assigned by [`HandLogger`]
    #[serde(default)]
    pub hand_id: Option<String>,
    /// RNG seed used for the session, if known
    pub seed: Option<u64>,
    pub dealer: usize,
    /// Blinds as `(seat, chips posted)`, small blind first
    #[serde(default)]
    pub posted: Vec<(usize, u32)>,
    /// Voluntary seat actions in order; forced blinds are in `posted`
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    pub pot: u32,
    /// Timestamp when the hand was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn new(dealer: usize) -> Self {
        Self {
            hand_id: None,
            seed: None,
            dealer,
            posted: Vec::new(),
            actions: Vec::new(),
            board: Vec::new(),
            pot: 0,
            ts: None,
            showdown: None,
        }
    }

    pub fn push(&mut self, seat: usize, stage: Stage, action: PlayerAction, amount: u32) {
        self.actions.push(ActionRecord {
            seat,
            stage,
            action,
            amount,
        });
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::io::Write;

/// Writes hand records as JSON lines to any sink.
pub struct HandLogger<W: Write> {
    writer: W,
    date: String,
    seq: u32,
}

impl<W: Write> HandLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    pub fn with_date(writer: W, date: &str) -> Self {
        Self {
            writer,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject id and timestamp if missing
        let mut rec = record.clone();
        if rec.hand_id.is_none() {
            rec.hand_id = Some(self.next_id());
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
