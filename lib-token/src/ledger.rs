//! Balance Ledger
//!
//! Tracks per-account balances and the total supply.
//!
//! # Invariant
//!
//! The sum of all balances equals `total_supply` at every observation
//! point. Every mutation here either moves value between two accounts
//! (sum unchanged) or destroys it from one account and the supply
//! together (sum still equal). All arithmetic is checked.

use std::collections::HashMap;

use lib_types::{Address, Amount};
use serde::{Deserialize, Serialize};

use crate::errors::{TokenError, TokenResult};

/// Per-account balances plus the circulating supply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
}

impl Ledger {
    /// Create a ledger with the entire initial supply credited to one
    /// holder (the token's treasury account)
    pub fn with_initial_supply(holder: Address, supply: Amount) -> Self {
        let mut balances = HashMap::new();
        balances.insert(holder, supply);
        Self {
            balances,
            total_supply: supply,
        }
    }

    /// Get balance of an account (zero for accounts never referenced)
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Current circulating supply
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Move `amount` between two accounts
    ///
    /// Validates the debit before mutating; on failure the ledger is
    /// unchanged. Authorization is the caller's concern.
    pub fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> TokenResult<()> {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance {
                have: from_balance,
                need: amount,
            });
        }

        // Debit before reading the credit side so a self-transfer nets
        // out instead of double-counting
        self.balances.insert(*from, from_balance - amount);
        let to_balance = self.balance_of(to);
        match to_balance.checked_add(amount) {
            Some(new_to_balance) => {
                self.balances.insert(*to, new_to_balance);
                Ok(())
            }
            None => {
                self.balances.insert(*from, from_balance);
                Err(TokenError::Overflow)
            }
        }
    }

    /// Destroy `amount` from an account and from the supply
    pub fn burn(&mut self, from: &Address, amount: Amount) -> TokenResult<()> {
        let balance = self.balance_of(from);
        if balance < amount {
            return Err(TokenError::InsufficientBalance {
                have: balance,
                need: amount,
            });
        }
        self.balances.insert(*from, balance - amount);
        self.total_supply = self.total_supply.saturating_sub(amount);
        Ok(())
    }

    /// Sum of all balances, for invariant checks
    pub fn accounted_total(&self) -> Amount {
        self.balances.values().sum()
    }
}
