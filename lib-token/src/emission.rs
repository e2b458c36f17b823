//! Emission Seams
//!
//! The emission channel depends on two external collaborators, modeled
//! as narrow capability traits the platform side implements:
//!
//! - [`VaultRegistry`]: the vault factory's lookup from a calling vault
//!   address to its vesting destination
//! - [`VestingSink`]: the vesting contract's deposit-notification
//!   surface, invoked synchronously after the ledger movement
//!
//! The emission amount rule lives here as well: each emission releases
//! a tenth of whatever the treasury currently holds. Integer division
//! truncates; the remainder stays in the treasury until a later call.

use lib_types::{Address, Amount};

use crate::constants::EMISSION_DIVISOR;
use crate::errors::TokenResult;

/// Lookup from a vault address to its registered vesting destination
///
/// Returning `None`, or a zero address, means the caller is not a
/// registered vault.
pub trait VaultRegistry {
    fn vesting_of(&self, vault: &Address) -> Option<Address>;
}

/// Deposit notification surface of the vesting destination
///
/// Invoked after the ledger has moved the emitted amount. A failure
/// here aborts the whole emission; the token reverses the movement
/// before propagating the error.
pub trait VestingSink {
    fn notify_deposit(&mut self, amount: Amount) -> TokenResult<()>;
}

/// Amount released by one emission from a treasury holding `treasury_balance`
pub fn emission_amount(treasury_balance: Amount) -> Amount {
    treasury_balance / EMISSION_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_is_a_tenth() {
        assert_eq!(emission_amount(1_000), 100);
        assert_eq!(emission_amount(0), 0);
    }

    #[test]
    fn test_emission_truncates() {
        // Remainder below the divisor is stranded
        assert_eq!(emission_amount(99), 9);
        assert_eq!(emission_amount(9), 0);
    }

    #[test]
    fn test_geometric_decay() {
        let mut treasury: Amount = 1_000_000;
        let mut released = Vec::new();
        for _ in 0..3 {
            let amount = emission_amount(treasury);
            treasury -= amount;
            released.push(amount);
        }
        assert_eq!(released, vec![100_000, 90_000, 81_000]);
        assert_eq!(treasury, 729_000);
    }
}
