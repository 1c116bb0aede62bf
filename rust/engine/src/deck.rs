use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};

/// Supplies cards to a hand in progress.
///
/// Implementations never run dry: exhaustion is recovered by refilling and
/// reshuffling, so `deal_card` always yields a card.
pub trait CardSource {
    fn deal_card(&mut self) -> Card;

    fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    fn shuffle(&mut self);

    fn refill(&mut self);

    fn remaining(&self) -> usize;
}

/// Standard 52-card deck driven by an injectable random source.
#[derive(Debug)]
pub struct Deck<R: RngCore = ChaCha20Rng> {
    cards: Vec<Card>,
    position: usize,
    rng: R,
}

impl Deck<ChaCha20Rng> {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Deck<R> {
    pub fn with_rng(rng: R) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Deals the next card without the exhaustion fallback.
    pub fn try_deal(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }
}

impl<R: RngCore> CardSource for Deck<R> {
    fn deal_card(&mut self) -> Card {
        if self.position >= self.cards.len() {
            debug!("deck exhausted, refilling and reshuffling");
            self.refill();
            self.shuffle();
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    fn shuffle(&mut self) {
        self.cards[self.position..].shuffle(&mut self.rng);
    }

    fn refill(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Card source that deals a fixed sequence, for reproducing exact boards.
///
/// Falls back to a freshly ordered deck once the stacked cards run out.
#[derive(Debug, Clone, Default)]
pub struct StackedDeck {
    cards: Vec<Card>,
    position: usize,
}

impl StackedDeck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }
}

impl CardSource for StackedDeck {
    fn deal_card(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.refill();
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    fn shuffle(&mut self) {}

    fn refill(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
