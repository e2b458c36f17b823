//! Pool and Asset Seams
//!
//! The strategy touches the outside world through two narrow traits
//! the platform side implements. The pool keeps its own books; the
//! strategy never second-guesses them.

use lib_types::{Address, Amount};

use crate::errors::PoolError;

/// The held asset's ledger surface the strategy needs
pub trait Asset {
    /// Authorize `spender` to pull up to `amount` from `owner`
    fn approve(&mut self, owner: Address, spender: Address, amount: Amount);

    /// Asset balance of an account
    fn balance_of(&self, account: &Address) -> Amount;
}

/// The external lending pool
///
/// `deposit` pulls previously-approved funds from `from`; `withdraw`
/// releases funds back to `to` and returns the amount actually
/// released. `balance_of` reports an account's position including
/// accrued yield, per the pool's own accounting.
pub trait LendingPool {
    fn deposit(&mut self, from: Address, amount: Amount) -> Result<(), PoolError>;

    fn withdraw(&mut self, to: Address, amount: Amount) -> Result<Amount, PoolError>;

    fn balance_of(&self, account: &Address) -> Amount;
}
