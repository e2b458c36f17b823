//! Lending Strategy
//!
//! The yield half of the Spore economy: a strategy that deploys a
//! vault's idle asset into an external lending pool and reports its
//! value. The strategy keeps no ledger of its own position; the pool's
//! accounting is authoritative for principal plus accrued yield.
//!
//! # Key Types
//!
//! - [`LendingStrategy`]: the vault-directed invest/divest machine
//! - [`Asset`] / [`LendingPool`]: capability seams to the held asset
//!   and the external pool

pub mod errors;
pub mod events;
pub mod pool;
pub mod strategy;

pub use errors::{PoolError, StrategyError, StrategyResult};
pub use events::StrategyEvent;
pub use pool::{Asset, LendingPool};
pub use strategy::LendingStrategy;
