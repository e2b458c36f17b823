//! SporeToken
//!
//! The composed token state machine: a fixed-supply ledger behind a
//! transfer gate, an emission channel feeding registered vaults, a
//! one-shot presale registration, and a two-step ownership handshake.
//!
//! The entire supply is minted to the token's own treasury account at
//! construction. Treasury movements (presale allocation, emission) go
//! straight through the ledger and bypass the gate; everything callers
//! move for themselves is gate-checked.

use std::collections::HashMap;

use lib_types::{Address, Amount};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{DECIMALS, PRESALE_DIVISOR, TOKEN_NAME, TOKEN_SYMBOL, TOTAL_SUPPLY};
use crate::context::CallContext;
use crate::emission::{emission_amount, VaultRegistry, VestingSink};
use crate::errors::{TokenError, TokenResult};
use crate::events::{EventLog, TokenEvent};
use crate::gate::TransferGate;
use crate::guard::ReentrancyGuard;
use crate::ledger::Ledger;
use crate::ownership::OwnershipHandshake;
use crate::presale::PresaleAllocator;

/// The Spore token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SporeToken {
    /// The token's own account, holding the treasury
    address: Address,
    ledger: Ledger,
    gate: TransferGate,
    ownership: OwnershipHandshake,
    presale: PresaleAllocator,
    allowances: HashMap<Address, HashMap<Address, Amount>>,
    guard: ReentrancyGuard,
    events: EventLog,
}

impl SporeToken {
    /// Deploy the token: the full supply lands in the treasury and the
    /// owner receives a pre-launch transfer right.
    pub fn new(address: Address, owner: Address) -> Self {
        let mut gate = TransferGate::new();
        gate.grant_right(owner);
        Self {
            address,
            ledger: Ledger::with_initial_supply(address, TOTAL_SUPPLY),
            gate,
            ownership: OwnershipHandshake::new(owner),
            presale: PresaleAllocator::new(),
            allowances: HashMap::new(),
            guard: ReentrancyGuard::new(),
            events: EventLog::new(),
        }
    }

    // ========================================================================
    // LEDGER OPERATIONS (gated, re-entrancy-guarded)
    // ========================================================================

    /// Move `amount` from the caller to `to`
    pub fn transfer(&mut self, ctx: &CallContext, to: Address, amount: Amount) -> TokenResult<()> {
        self.guard.enter()?;
        let result = self.transfer_inner(ctx, to, amount);
        self.guard.exit();
        result
    }

    fn transfer_inner(&mut self, ctx: &CallContext, to: Address, amount: Amount) -> TokenResult<()> {
        self.gate.check(&ctx.caller)?;
        self.ledger.transfer(&ctx.caller, &to, amount)?;
        self.events.record(TokenEvent::Transfer {
            from: ctx.caller,
            to,
            amount,
        });
        debug!("transfer {} -> {} amount {}", ctx.caller, to, amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to` out of the caller's allowance.
    /// The gate is checked against `from`, not the caller.
    pub fn transfer_from(
        &mut self,
        ctx: &CallContext,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        self.guard.enter()?;
        let result = self.transfer_from_inner(ctx, from, to, amount);
        self.guard.exit();
        result
    }

    fn transfer_from_inner(
        &mut self,
        ctx: &CallContext,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        self.gate.check(&from)?;

        let allowed = self.allowance(&from, &ctx.caller);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                have: allowed,
                need: amount,
            });
        }

        self.ledger.transfer(&from, &to, amount)?;
        self.allowances
            .entry(from)
            .or_default()
            .insert(ctx.caller, allowed - amount);
        self.events.record(TokenEvent::Transfer { from, to, amount });
        debug!(
            "transfer_from {} -> {} amount {} by {}",
            from, to, amount, ctx.caller
        );
        Ok(())
    }

    /// Set the caller's allowance for `spender`. Unconditional overwrite.
    pub fn approve(&mut self, ctx: &CallContext, spender: Address, amount: Amount) {
        self.allowances
            .entry(ctx.caller)
            .or_default()
            .insert(spender, amount);
        self.events.record(TokenEvent::Approval {
            owner: ctx.caller,
            spender,
            amount,
        });
    }

    /// Destroy `amount` of the caller's tokens and shrink the supply
    pub fn burn(&mut self, ctx: &CallContext, amount: Amount) -> TokenResult<()> {
        self.guard.enter()?;
        let result = self.burn_inner(ctx, amount);
        self.guard.exit();
        result
    }

    fn burn_inner(&mut self, ctx: &CallContext, amount: Amount) -> TokenResult<()> {
        let balance = self.ledger.balance_of(&ctx.caller);
        if amount == 0 || amount > balance {
            return Err(TokenError::InvalidBurnAmount { amount, balance });
        }
        self.ledger.burn(&ctx.caller, amount)?;
        self.events.record(TokenEvent::Burned {
            account: ctx.caller,
            amount,
        });
        debug!("burn {} amount {}", ctx.caller, amount);
        Ok(())
    }

    // ========================================================================
    // OWNER OPERATIONS
    // ========================================================================

    /// Open the transfer gate permanently. One-time, owner-only.
    pub fn enable_transfers(&mut self, ctx: &CallContext) -> TokenResult<()> {
        self.ownership.ensure_owner(&ctx.caller)?;
        self.gate.open()?;
        self.events.record(TokenEvent::TransfersEnabled {
            timestamp: ctx.timestamp,
        });
        info!("transfers enabled at {}", ctx.timestamp);
        Ok(())
    }

    /// Record the presale address and grant it a transfer right so it
    /// can distribute to buyers before launch. Owner-only, set-once.
    pub fn set_presale_address(&mut self, ctx: &CallContext, addr: Address) -> TokenResult<()> {
        self.ownership.ensure_owner(&ctx.caller)?;
        self.presale.set(addr)?;
        self.gate.grant_right(addr);
        self.events.record(TokenEvent::PresaleRegistered { address: addr });
        info!("presale address registered: {}", addr);
        Ok(())
    }

    /// Move half of the treasury's current balance to the presale
    /// address. Owner-only. NOT single-use: each call moves half of
    /// whatever the treasury holds at that moment.
    pub fn allocate_presale(&mut self, ctx: &CallContext) -> TokenResult<Amount> {
        self.ownership.ensure_owner(&ctx.caller)?;
        let presale = self.presale.address().ok_or(TokenError::PresaleNotSet)?;

        let amount = self.treasury_balance() / PRESALE_DIVISOR;
        self.ledger.transfer(&self.address, &presale, amount)?;
        self.events.record(TokenEvent::PresaleAllocated {
            address: presale,
            amount,
        });
        info!("presale allocation: {} to {}", amount, presale);
        Ok(amount)
    }

    /// Nominate a successor owner. Control moves on acceptance only.
    pub fn nominate_owner(&mut self, ctx: &CallContext, successor: Address) -> TokenResult<()> {
        self.ownership.nominate(&ctx.caller, successor)?;
        self.events.record(TokenEvent::OwnershipNominated {
            owner: ctx.caller,
            successor,
        });
        info!("ownership nominated: {} -> {}", ctx.caller, successor);
        Ok(())
    }

    /// Accept a pending nomination; only the nominee may call
    pub fn accept_ownership(&mut self, ctx: &CallContext) -> TokenResult<()> {
        let previous = self.ownership.accept(&ctx.caller)?;
        self.events.record(TokenEvent::OwnershipTransferred {
            previous,
            owner: ctx.caller,
        });
        info!("ownership transferred: {} -> {}", previous, ctx.caller);
        Ok(())
    }

    // ========================================================================
    // EMISSION
    // ========================================================================

    /// Release a tenth of the treasury to the vesting destination
    /// registered for the calling vault, then notify the destination.
    ///
    /// The ledger movement bypasses the gate (treasury-internal). If
    /// the notification fails, the movement is reversed before the
    /// error propagates, so a failed emission leaves no trace.
    pub fn spore_emission<R, S>(
        &mut self,
        ctx: &CallContext,
        registry: &R,
        sink: &mut S,
    ) -> TokenResult<Amount>
    where
        R: VaultRegistry,
        S: VestingSink,
    {
        let vesting = registry
            .vesting_of(&ctx.caller)
            .filter(|addr| !addr.is_zero())
            .ok_or(TokenError::NotRegisteredVault)?;

        let amount = emission_amount(self.treasury_balance());
        self.ledger.transfer(&self.address, &vesting, amount)?;

        if let Err(err) = sink.notify_deposit(amount) {
            // Compensating rollback: the vesting account holds at least
            // the amount just credited, so this transfer cannot fail.
            self.ledger.transfer(&vesting, &self.address, amount)?;
            return Err(err);
        }

        self.events.record(TokenEvent::Emission {
            vault: ctx.caller,
            vesting,
            amount,
        });
        info!("emission: {} to vesting {} for vault {}", amount, vesting, ctx.caller);
        Ok(amount)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// The token's own (treasury) account address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Token display name
    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    /// Token symbol
    pub fn symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    /// Number of decimal places (display only)
    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    /// Balance of any account
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    /// Current circulating supply
    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    /// Balance held by the treasury
    pub fn treasury_balance(&self) -> Amount {
        self.ledger.balance_of(&self.address)
    }

    /// Whether the gate has been opened
    pub fn transfers_enabled(&self) -> bool {
        self.gate.is_open()
    }

    /// Whether an account holds a pre-launch transfer right
    pub fn has_transfer_right(&self, account: &Address) -> bool {
        self.gate.has_right(account)
    }

    /// Remaining allowance from `owner` to `spender`
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// The current owner
    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    /// The registered presale address, if any
    pub fn presale_address(&self) -> Option<Address> {
        self.presale.address()
    }

    /// The audit trail of recorded events
    pub fn events(&self) -> &[TokenEvent] {
        self.events.events()
    }

    /// Sum of all ledger balances, for invariant checks
    pub fn accounted_total(&self) -> Amount {
        self.ledger.accounted_total()
    }
}
