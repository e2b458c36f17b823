//! Re-entrancy Guard
//!
//! Single-entry lock scoped to one guarded call. A malicious recipient
//! must not be able to re-enter the ledger mid-transfer to double-spend
//! or bypass the gate check, so `transfer`, `transfer_from` and `burn`
//! each take the lock on entry and release it on every exit path,
//! including failures.

use serde::{Deserialize, Serialize};

use crate::errors::{TokenError, TokenResult};

/// Mutex-like single-entry flag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReentrancyGuard {
    entered: bool,
}

impl ReentrancyGuard {
    /// Create a released guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock; fails with `ReentrantCall` if already held
    pub fn enter(&mut self) -> TokenResult<()> {
        if self.entered {
            return Err(TokenError::ReentrantCall);
        }
        self.entered = true;
        Ok(())
    }

    /// Release the lock. Must be called on every exit path of a
    /// guarded operation.
    pub fn exit(&mut self) {
        self.entered = false;
    }
}
