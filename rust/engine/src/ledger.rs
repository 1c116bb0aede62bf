//! The human player's bankroll, seen through the [`BetLedger`] capability.
//!
//! The engine never touches an account directly: blinds and bets are placed
//! through `place_bet`, and results are settled through `process_win` /
//! `process_loss` once a hand ends.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Account the human seat bets from.
pub trait BetLedger {
    fn balance(&self) -> u32;

    /// Debits `amount`; returns `false` (and changes nothing) when the
    /// balance cannot cover it.
    fn place_bet(&mut self, amount: u32) -> bool;

    /// Credits `payout` for a hand in which `stake` was put at risk.
    fn process_win(&mut self, stake: u32, payout: u32);

    /// Records a lost `stake`. The chips were already debited by `place_bet`.
    fn process_loss(&mut self, stake: u32);
}

/// In-memory ledger with session earnings and losses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
    balance: u32,
    total_earnings: u64,
    total_losses: u64,
}

impl Bankroll {
    pub fn new(balance: u32) -> Self {
        Self {
            balance,
            total_earnings: 0,
            total_losses: 0,
        }
    }

    pub fn total_earnings(&self) -> u64 {
        self.total_earnings
    }

    pub fn total_losses(&self) -> u64 {
        self.total_losses
    }
}

impl BetLedger for Bankroll {
    fn balance(&self) -> u32 {
        self.balance
    }

    fn place_bet(&mut self, amount: u32) -> bool {
        if amount == 0 || amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }

    fn process_win(&mut self, stake: u32, payout: u32) {
        self.balance = self.balance.saturating_add(payout);
        if payout >= stake {
            self.total_earnings += u64::from(payout - stake);
        } else {
            // split pot returned less than was staked
            self.total_losses += u64::from(stake - payout);
        }
        info!(stake, payout, balance = self.balance, "win settled");
    }

    fn process_loss(&mut self, stake: u32) {
        self.total_losses += u64::from(stake);
        info!(stake, balance = self.balance, "loss settled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_bet_rejects_overdraft_and_zero() {
        let mut b = Bankroll::new(100);
        assert!(!b.place_bet(0));
        assert!(!b.place_bet(101));
        assert_eq!(b.balance(), 100);
        assert!(b.place_bet(100));
        assert_eq!(b.balance(), 0);
    }

    #[test]
    fn win_and_loss_update_counters() {
        let mut b = Bankroll::new(100);
        assert!(b.place_bet(40));
        b.process_win(40, 120);
        assert_eq!(b.balance(), 180);
        assert_eq!(b.total_earnings(), 80);

        assert!(b.place_bet(30));
        b.process_loss(30);
        assert_eq!(b.balance(), 150);
        assert_eq!(b.total_losses(), 30);
    }

    #[test]
    fn short_split_counts_as_loss() {
        let mut b = Bankroll::new(100);
        assert!(b.place_bet(50));
        b.process_win(50, 30);
        assert_eq!(b.balance(), 80);
        assert_eq!(b.total_earnings(), 0);
        assert_eq!(b.total_losses(), 20);
    }
}
