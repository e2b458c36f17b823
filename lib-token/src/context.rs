//! Call Context
//!
//! Immutable context passed to every state-mutating operation, enabling
//! capability-bound authorization: who may move funds is determined by
//! the context, not by user-supplied parameters.

use lib_types::{Address, BlockHeight, Timestamp};
use serde::{Deserialize, Serialize};

/// Execution environment for a single call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Account that initiated this call
    pub caller: Address,
    /// Block height at execution time
    pub block_number: BlockHeight,
    /// Block timestamp at execution time
    pub timestamp: Timestamp,
}

impl CallContext {
    /// Create a new call context
    pub fn new(caller: Address, block_number: BlockHeight, timestamp: Timestamp) -> Self {
        Self {
            caller,
            block_number,
            timestamp,
        }
    }
}
