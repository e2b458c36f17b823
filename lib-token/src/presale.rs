//! Presale Allocation Record
//!
//! Set-once record of the presale contract address. Validation order
//! matches the registry convention: zero check first, then duplicate
//! check, then record. The allocation transfer itself lives on the
//! token, which reads this record.

use lib_types::Address;
use serde::{Deserialize, Serialize};

use crate::errors::{TokenError, TokenResult};

/// Optional presale address, set at most once
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresaleAllocator {
    address: Option<Address>,
}

impl PresaleAllocator {
    /// Create with no presale address recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded presale address, if set
    pub fn address(&self) -> Option<Address> {
        self.address
    }

    /// Record the presale address
    pub fn set(&mut self, addr: Address) -> TokenResult<()> {
        if addr.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        if self.address.is_some() {
            return Err(TokenError::PresaleAlreadySet);
        }
        self.address = Some(addr);
        Ok(())
    }
}
