use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Value of a five-card poker hand.
///
/// Each variant carries exactly the rank values that break ties inside its
/// category, ordered from most to least significant. Variants are declared
/// from weakest to strongest, so the derived `Ord` compares the category
/// first and then the tiebreak fields lexicographically.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum HandRank {
    /// All five ranks, descending.
    HighCard([u8; 5]),
    OnePair { pair: u8, kickers: [u8; 3] },
    TwoPair { high: u8, low: u8, kicker: u8 },
    ThreeOfAKind { trips: u8, kickers: [u8; 2] },
    /// Top card of the run; the wheel (A-2-3-4-5) tops at 5.
    Straight { high: u8 },
    /// All five ranks, descending.
    Flush([u8; 5]),
    FullHouse { trips: u8, pair: u8 },
    FourOfAKind { quads: u8, kicker: u8 },
    StraightFlush { high: u8 },
    RoyalFlush,
}

impl HandRank {
    pub fn category(&self) -> Category {
        match self {
            HandRank::HighCard(_) => Category::HighCard,
            HandRank::OnePair { .. } => Category::OnePair,
            HandRank::TwoPair { .. } => Category::TwoPair,
            HandRank::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandRank::Straight { .. } => Category::Straight,
            HandRank::Flush(_) => Category::Flush,
            HandRank::FullHouse { .. } => Category::FullHouse,
            HandRank::FourOfAKind { .. } => Category::FourOfAKind,
            HandRank::StraightFlush { .. } => Category::StraightFlush,
            HandRank::RoyalFlush => Category::RoyalFlush,
        }
    }

    /// Tiebreak values as a flat sequence, most significant first.
    pub fn tiebreak(&self) -> Vec<u8> {
        match *self {
            HandRank::HighCard(ranks) | HandRank::Flush(ranks) => ranks.to_vec(),
            HandRank::OnePair { pair, kickers } => {
                let mut v = vec![pair];
                v.extend_from_slice(&kickers);
                v
            }
            HandRank::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandRank::ThreeOfAKind { trips, kickers } => vec![trips, kickers[0], kickers[1]],
            HandRank::Straight { high } | HandRank::StraightFlush { high } => vec![high],
            HandRank::FullHouse { trips, pair } => vec![trips, pair],
            HandRank::FourOfAKind { quads, kicker } => vec![quads, kicker],
            HandRank::RoyalFlush => vec![14],
        }
    }

    pub fn name(&self) -> &'static str {
        self.category().name()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.name(), self.tiebreak())
    }
}

/// Ranks exactly five cards. The result does not depend on input order.
pub fn evaluate5(cards: &[Card; 5]) -> HandRank {
    let mut values = cards.map(|c| c.rank.value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&values);

    // (count, rank), count desc then rank desc
    let mut rank_counts = [0u8; 15];
    for &v in &values {
        rank_counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    let rank_at = |i: usize| groups.get(i).map_or(0, |g| g.1);

    match (flush, straight, groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
        (true, Some(14), _, _) => HandRank::RoyalFlush,
        (true, Some(high), _, _) => HandRank::StraightFlush { high },
        (_, _, 4, _) => HandRank::FourOfAKind {
            quads: rank_at(0),
            kicker: rank_at(1),
        },
        (_, _, 3, 2) => HandRank::FullHouse {
            trips: rank_at(0),
            pair: rank_at(1),
        },
        (true, None, _, _) => HandRank::Flush(values),
        (false, Some(high), _, _) => HandRank::Straight { high },
        (_, _, 3, _) => HandRank::ThreeOfAKind {
            trips: rank_at(0),
            kickers: [rank_at(1), rank_at(2)],
        },
        (_, _, 2, 2) => HandRank::TwoPair {
            high: rank_at(0),
            low: rank_at(1),
            kicker: rank_at(2),
        },
        (_, _, 2, _) => HandRank::OnePair {
            pair: rank_at(0),
            kickers: [rank_at(1), rank_at(2), rank_at(3)],
        },
        _ => HandRank::HighCard(values),
    }
}

/// Slice entry point for [`evaluate5`]; anything but five cards is a caller bug.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandRank, GameError> {
    let five: &[Card; 5] = cards.try_into().map_err(|_| GameError::InvalidCardCount {
        expected: 5,
        actual: cards.len(),
    })?;
    Ok(evaluate5(five))
}

/// Best five-card hand out of two hole cards and a complete five-card board.
pub fn best_hand_from_seven(hole: &[Card; 2], community: &[Card]) -> Result<HandRank, GameError> {
    if community.len() != 5 {
        return Err(GameError::InvalidCardCount {
            expected: 7,
            actual: hole.len() + community.len(),
        });
    }
    let mut seven = Vec::with_capacity(7);
    seven.extend_from_slice(hole);
    seven.extend_from_slice(community);
    best_hand(&seven)
}

/// Best five-card hand among 5 to 7 cards.
pub fn best_hand(cards: &[Card]) -> Result<HandRank, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidCardCount {
            expected: 7,
            actual: cards.len(),
        });
    }
    five_card_subsets(cards)
        .map(|five| evaluate5(&five))
        .max()
        .ok_or(GameError::InvalidCardCount {
            expected: 7,
            actual: cards.len(),
        })
}

/// Every 5-card combination of `cards` (21 for seven cards).
pub fn five_card_subsets(cards: &[Card]) -> impl Iterator<Item = [Card; 5]> + '_ {
    let n = cards.len().min(16);
    (0u32..(1 << n))
        .filter(|mask| mask.count_ones() == 5)
        .map(move |mask| {
            let mut five = [cards[0]; 5];
            let mut k = 0;
            for (i, &c) in cards.iter().enumerate().take(n) {
                if mask & (1 << i) != 0 {
                    five[k] = c;
                    k += 1;
                }
            }
            five
        })
}

// `sorted_desc` holds five ranks, highest first.
fn straight_high(sorted_desc: &[u8; 5]) -> Option<u8> {
    let distinct = sorted_desc.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if sorted_desc[0] - sorted_desc[4] == 4 {
        return Some(sorted_desc[0]);
    }
    if *sorted_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}
