//! Token Operation Errors

use lib_types::{Address, Amount};
use thiserror::Error;

/// Error during token operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Transfers not enabled for {0}")]
    TransfersNotEnabled(Address),

    #[error("Transfers already enabled")]
    TransfersAlreadyEnabled,

    #[error("Invalid burn amount {amount}, balance {balance}")]
    InvalidBurnAmount { amount: Amount, balance: Amount },

    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("Insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance { have: Amount, need: Amount },

    #[error("Zero address not allowed")]
    ZeroAddress,

    #[error("Presale address already set")]
    PresaleAlreadySet,

    #[error("Presale address not set")]
    PresaleNotSet,

    #[error("Caller does not resolve to a registered vault")]
    NotRegisteredVault,

    #[error("Unauthorized: caller {0} is not the owner")]
    Unauthorized(Address),

    #[error("Caller {0} is not the nominated owner")]
    NotNominated(Address),

    #[error("Re-entrant call rejected")]
    ReentrantCall,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Vesting notification failed: {0}")]
    Notification(String),
}

/// Result type for token operations
pub type TokenResult<T> = Result<T, TokenError>;
