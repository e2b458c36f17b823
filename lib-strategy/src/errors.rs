//! Strategy Operation Errors

use lib_types::{Address, Amount};
use thiserror::Error;

/// Failure reported by the external lending pool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Pool deposit rejected: {reason}")]
    Deposit { reason: String },

    #[error("Pool withdrawal rejected: {reason}")]
    Withdraw { reason: String },

    #[error("Pool liquidity insufficient: have {have}, need {need}")]
    InsufficientLiquidity { have: Amount, need: Amount },
}

/// Error during strategy operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Unauthorized: caller {0} is not the vault")]
    Unauthorized(Address),

    /// Pool failures propagate unchanged and abort the operation
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Result type for strategy operations
pub type StrategyResult<T> = Result<T, StrategyError>;
