//! Ownership Handshake
//!
//! Two-step owner transfer: the current owner nominates a successor,
//! who must separately accept before control transfers. A fresh
//! nomination replaces any pending one; control never moves without an
//! explicit acceptance from the nominee.

use lib_types::Address;
use serde::{Deserialize, Serialize};

use crate::errors::{TokenError, TokenResult};

/// Current owner plus an optional pending successor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipHandshake {
    owner: Address,
    pending: Option<Address>,
}

impl OwnershipHandshake {
    /// Create with an initial owner
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            pending: None,
        }
    }

    /// The current owner
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The nominated successor, if any
    pub fn pending(&self) -> Option<Address> {
        self.pending
    }

    /// Fail unless `caller` is the current owner
    pub fn ensure_owner(&self, caller: &Address) -> TokenResult<()> {
        if *caller == self.owner {
            Ok(())
        } else {
            Err(TokenError::Unauthorized(*caller))
        }
    }

    /// Nominate a successor (owner-only, non-zero)
    pub fn nominate(&mut self, caller: &Address, successor: Address) -> TokenResult<()> {
        self.ensure_owner(caller)?;
        if successor.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        self.pending = Some(successor);
        Ok(())
    }

    /// Accept a pending nomination; only the nominee may call.
    /// Returns the previous owner on success.
    pub fn accept(&mut self, caller: &Address) -> TokenResult<Address> {
        match self.pending {
            Some(nominee) if nominee == *caller => {
                let previous = self.owner;
                self.owner = nominee;
                self.pending = None;
                Ok(previous)
            }
            _ => Err(TokenError::NotNominated(*caller)),
        }
    }
}
