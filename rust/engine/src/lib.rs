//! # casino-engine: Texas Hold'em Table Core
//!
//! A deterministic No-Limit Texas Hold'em engine for one human seat against
//! up to eight scripted opponents. Randomness, the human's bankroll, and
//! every decision are injected, so whole sessions replay exactly from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Card sources: seeded ChaCha20 deck and stacked decks
//! - [`hand`] - Best-five-of-seven hand evaluation and total ordering
//! - [`player`] - Seat state and player actions
//! - [`table`] - Seats, board, pot, and blind posting for one hand
//! - [`rules`] - Action validation and raise bounds
//! - [`betting`] - One betting stage as a state machine
//! - [`showdown`] - Winner selection and pot division
//! - [`engine`] - Hand orchestration from blinds to settlement
//! - [`game`] - Session state: button rotation and blind escalation
//! - [`ledger`] - The human's bankroll
//! - [`policy`] - Decision seams for the human and the opponents
//! - [`logger`] - Hand records and JSONL history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use casino_engine::cards::parse_cards;
//! use casino_engine::hand::best_hand;
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let rank = best_hand(&cards).unwrap();
//! assert_eq!(rank.name(), "Royal Flush");
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use casino_engine::deck::{CardSource, Deck};
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal_card(), b.deal_card());
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod logger;
pub mod player;
pub mod policy;
pub mod pot;
pub mod rules;
pub mod showdown;
pub mod table;
