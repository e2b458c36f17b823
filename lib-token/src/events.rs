//! Token Event Log
//!
//! Append-only audit trail of successful state transitions. Every
//! mutating operation records exactly one event after its state change
//! commits; failed operations record nothing.

use lib_types::{Address, Amount, Timestamp};
use serde::{Deserialize, Serialize};

/// One recorded state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    Transfer {
        from: Address,
        to: Address,
        amount: Amount,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: Amount,
    },
    Burned {
        account: Address,
        amount: Amount,
    },
    TransfersEnabled {
        timestamp: Timestamp,
    },
    PresaleRegistered {
        address: Address,
    },
    PresaleAllocated {
        address: Address,
        amount: Amount,
    },
    Emission {
        vault: Address,
        vesting: Address,
        amount: Amount,
    },
    OwnershipNominated {
        owner: Address,
        successor: Address,
    },
    OwnershipTransferred {
        previous: Address,
        owner: Address,
    },
}

/// Append-only event history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<TokenEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn record(&mut self, event: TokenEvent) {
        self.events.push(event);
    }

    /// All recorded events, oldest first
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Most recent event, if any
    pub fn last(&self) -> Option<&TokenEvent> {
        self.events.last()
    }
}
