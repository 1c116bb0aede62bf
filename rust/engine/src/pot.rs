use serde::{Deserialize, Serialize};

/// Single main pot. There are no side pots: the best hand still in takes the
/// whole pot however deep each seat's stake went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    total: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never overflows for a hand built through `HandSession::new`, which
    /// caps the chips on the table at `u32::MAX`.
    pub fn add(&mut self, amount: u32) {
        self.total += amount;
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

/// Splits `amount` evenly across `winners` (seat order).
///
/// Each winner gets `amount / n`; the first winner also takes the remainder.
pub fn split_pot(amount: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = amount / n;
    let remainder = amount % n;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| {
            let extra = if i == 0 { remainder } else { 0 };
            (seat, share + extra)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_gives_remainder_to_first_winner() {
        assert_eq!(split_pot(101, &[2, 5]), vec![(2, 51), (5, 50)]);
        assert_eq!(split_pot(100, &[1, 3, 4]), vec![(1, 34), (3, 33), (4, 33)]);
    }

    #[test]
    fn split_conserves_chips() {
        for amount in [0u32, 1, 7, 99, 1000] {
            for n in 1..=9usize {
                let winners: Vec<usize> = (0..n).collect();
                let total: u32 = split_pot(amount, &winners).iter().map(|(_, a)| a).sum();
                assert_eq!(total, amount);
            }
        }
    }

    #[test]
    fn no_winners_no_shares() {
        assert!(split_pot(50, &[]).is_empty());
    }
}
