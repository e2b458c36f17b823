//! Transfer Gate
//!
//! Soft-launch authorization policy: before the gate opens, only
//! accounts holding a transfer right may move tokens; once opened the
//! gate stays open forever. Rights are granted by owner-controlled
//! paths only and are never revoked.

use std::collections::HashSet;

use lib_types::Address;
use serde::{Deserialize, Serialize};

use crate::errors::{TokenError, TokenResult};

/// Gate state: a global switch plus the pre-launch rights set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferGate {
    transfers_enabled: bool,
    rights: HashSet<Address>,
}

impl TransferGate {
    /// Create a closed gate with no rights granted
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the gate has been opened
    pub fn is_open(&self) -> bool {
        self.transfers_enabled
    }

    /// Whether an account holds a pre-launch transfer right
    pub fn has_right(&self, account: &Address) -> bool {
        self.rights.contains(account)
    }

    /// Decide whether `sender` may move tokens right now
    pub fn check(&self, sender: &Address) -> TokenResult<()> {
        if self.transfers_enabled || self.rights.contains(sender) {
            Ok(())
        } else {
            Err(TokenError::TransfersNotEnabled(*sender))
        }
    }

    /// Grant a transfer right. Idempotent.
    pub fn grant_right(&mut self, account: Address) {
        self.rights.insert(account);
    }

    /// Open the gate permanently; fails if already open
    pub fn open(&mut self) -> TokenResult<()> {
        if self.transfers_enabled {
            return Err(TokenError::TransfersAlreadyEnabled);
        }
        self.transfers_enabled = true;
        Ok(())
    }
}
