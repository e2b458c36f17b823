//! LendingStrategy
//!
//! Moves the vault's idle asset into an external lending pool and back
//! out on demand. Only the vault may direct it. The strategy holds no
//! independent ledger of its position: `total_value` is whatever the
//! pool reports for the strategy's account.

use lib_types::{Address, Amount};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{StrategyError, StrategyResult};
use crate::events::StrategyEvent;
use crate::pool::{Asset, LendingPool};

/// Vault-directed strategy over an external lending pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LendingStrategy {
    /// The strategy's own account, holding idle asset between moves
    address: Address,
    /// The only caller allowed to direct funds
    vault: Address,
    /// The pool account approved to pull deposits
    pool_address: Address,
    events: Vec<StrategyEvent>,
}

impl LendingStrategy {
    /// Create a strategy bound to one vault and one pool
    pub fn new(address: Address, vault: Address, pool_address: Address) -> Self {
        Self {
            address,
            vault,
            pool_address,
            events: Vec::new(),
        }
    }

    fn ensure_vault(&self, caller: &Address) -> StrategyResult<()> {
        if *caller == self.vault {
            Ok(())
        } else {
            Err(StrategyError::Unauthorized(*caller))
        }
    }

    /// Deploy `amount` of the held asset into the pool
    ///
    /// Approves the pool for exactly `amount`, then deposits on behalf
    /// of this strategy. Returns the amount invested, always equal to
    /// the input (no slippage modeling).
    pub fn invest<A, P>(
        &mut self,
        caller: &Address,
        asset: &mut A,
        pool: &mut P,
        amount: Amount,
    ) -> StrategyResult<Amount>
    where
        A: Asset,
        P: LendingPool,
    {
        self.ensure_vault(caller)?;

        asset.approve(self.address, self.pool_address, amount);
        pool.deposit(self.address, amount)?;

        self.events.push(StrategyEvent::Invested { amount });
        info!("invested {} into pool {}", amount, self.pool_address);
        Ok(amount)
    }

    /// Withdraw `amount` from the pool back to this strategy
    ///
    /// Returns the amount the pool actually released.
    pub fn divest<P>(&mut self, caller: &Address, pool: &mut P, amount: Amount) -> StrategyResult<Amount>
    where
        P: LendingPool,
    {
        self.ensure_vault(caller)?;

        let returned = pool.withdraw(self.address, amount)?;

        self.events.push(StrategyEvent::Divested {
            requested: amount,
            returned,
        });
        info!("divested {} from pool {}", returned, self.pool_address);
        Ok(returned)
    }

    /// Current position value as reported by the pool
    /// (principal plus accrued yield, per the pool's own accounting)
    pub fn total_value<P>(&self, pool: &P) -> Amount
    where
        P: LendingPool,
    {
        pool.balance_of(&self.address)
    }

    /// The strategy's own account address
    pub fn address(&self) -> Address {
        self.address
    }

    /// The directing vault
    pub fn vault(&self) -> Address {
        self.vault
    }

    /// Recorded movements, oldest first
    pub fn events(&self) -> &[StrategyEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PoolError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    fn addr(id: u8) -> Address {
        Address::new([id; 32])
    }

    /// Mock asset ledger: balances plus allowances
    #[derive(Default)]
    struct MockAsset {
        balances: HashMap<Address, Amount>,
        allowances: HashMap<(Address, Address), Amount>,
    }

    impl MockAsset {
        fn fund(&mut self, account: Address, amount: Amount) {
            *self.balances.entry(account).or_default() += amount;
        }

        fn pull(&mut self, from: Address, spender: Address, to: Address, amount: Amount) -> bool {
            let allowed = self.allowances.get(&(from, spender)).copied().unwrap_or(0);
            let balance = self.balances.get(&from).copied().unwrap_or(0);
            if allowed < amount || balance < amount {
                return false;
            }
            self.allowances.insert((from, spender), allowed - amount);
            self.balances.insert(from, balance - amount);
            *self.balances.entry(to).or_default() += amount;
            true
        }

        fn push(&mut self, from: Address, to: Address, amount: Amount) -> bool {
            let balance = self.balances.get(&from).copied().unwrap_or(0);
            if balance < amount {
                return false;
            }
            self.balances.insert(from, balance - amount);
            *self.balances.entry(to).or_default() += amount;
            true
        }
    }

    /// Shared handle so the strategy and the pool can both touch the
    /// asset ledger without overlapping borrows
    type AssetHandle = Rc<RefCell<MockAsset>>;

    impl Asset for AssetHandle {
        fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
            self.borrow_mut().allowances.insert((owner, spender), amount);
        }

        fn balance_of(&self, account: &Address) -> Amount {
            self.borrow().balances.get(account).copied().unwrap_or(0)
        }
    }

    /// Mock lending pool sharing the mock asset ledger
    struct MockPool {
        address: Address,
        asset: AssetHandle,
        positions: HashMap<Address, Amount>,
        refuse_withdrawals: bool,
    }

    impl MockPool {
        fn new(address: Address, asset: AssetHandle) -> Self {
            Self {
                address,
                asset,
                positions: HashMap::new(),
                refuse_withdrawals: false,
            }
        }

        /// Credit yield to a depositor, as the real pool's interest
        /// accrual would
        fn accrue(&mut self, account: Address, amount: Amount) {
            *self.positions.entry(account).or_default() += amount;
            self.asset.borrow_mut().fund(self.address, amount);
        }
    }

    impl LendingPool for MockPool {
        fn deposit(&mut self, from: Address, amount: Amount) -> Result<(), PoolError> {
            let pulled = self
                .asset
                .borrow_mut()
                .pull(from, self.address, self.address, amount);
            if !pulled {
                return Err(PoolError::Deposit {
                    reason: "allowance or balance too low".into(),
                });
            }
            *self.positions.entry(from).or_default() += amount;
            Ok(())
        }

        fn withdraw(&mut self, to: Address, amount: Amount) -> Result<Amount, PoolError> {
            if self.refuse_withdrawals {
                return Err(PoolError::Withdraw {
                    reason: "pool frozen".into(),
                });
            }
            let position = self.positions.get(&to).copied().unwrap_or(0);
            if position < amount {
                return Err(PoolError::InsufficientLiquidity {
                    have: position,
                    need: amount,
                });
            }
            self.positions.insert(to, position - amount);
            self.asset.borrow_mut().push(self.address, to, amount);
            Ok(amount)
        }

        fn balance_of(&self, account: &Address) -> Amount {
            self.positions.get(account).copied().unwrap_or(0)
        }
    }

    struct Fixture {
        strategy: LendingStrategy,
        asset: AssetHandle,
        pool: MockPool,
        vault: Address,
    }

    fn setup(strategy_funds: Amount) -> Fixture {
        let strategy_addr = addr(1);
        let vault = addr(2);
        let pool_addr = addr(3);

        let asset: AssetHandle = Rc::new(RefCell::new(MockAsset::default()));
        asset.borrow_mut().fund(strategy_addr, strategy_funds);

        Fixture {
            strategy: LendingStrategy::new(strategy_addr, vault, pool_addr),
            asset: asset.clone(),
            pool: MockPool::new(pool_addr, asset),
            vault,
        }
    }

    impl Fixture {
        fn invest(&mut self, caller: Address, amount: Amount) -> StrategyResult<Amount> {
            let mut asset = self.asset.clone();
            self.strategy
                .invest(&caller, &mut asset, &mut self.pool, amount)
        }
    }

    #[test]
    fn test_invest_moves_funds_into_pool() {
        let mut fx = setup(1_000);

        let invested = fx.invest(fx.vault, 100).unwrap();

        assert_eq!(invested, 100);
        assert_eq!(fx.strategy.total_value(&fx.pool), 100);
        assert_eq!(fx.asset.balance_of(&fx.strategy.address()), 900);
        assert_eq!(
            fx.strategy.events(),
            &[StrategyEvent::Invested { amount: 100 }]
        );
    }

    #[test]
    fn test_total_value_reflects_yield() {
        let mut fx = setup(1_000);
        fx.invest(fx.vault, 100).unwrap();

        fx.pool.accrue(fx.strategy.address(), 7);
        assert!(fx.strategy.total_value(&fx.pool) >= 100);
        assert_eq!(fx.strategy.total_value(&fx.pool), 107);
    }

    #[test]
    fn test_divest_returns_released_amount() {
        let mut fx = setup(1_000);
        fx.invest(fx.vault, 100).unwrap();

        let returned = fx.strategy.divest(&fx.vault, &mut fx.pool, 40).unwrap();
        assert_eq!(returned, 40);
        assert_eq!(fx.strategy.total_value(&fx.pool), 60);
        assert_eq!(fx.asset.balance_of(&fx.strategy.address()), 940);
    }

    #[test]
    fn test_invest_divest_round_trip_restores_balance() {
        let mut fx = setup(1_000);

        for _ in 0..3 {
            fx.invest(fx.vault, 250).unwrap();
            fx.strategy.divest(&fx.vault, &mut fx.pool, 250).unwrap();
        }

        // No yield accrued: the strategy's asset balance is back where
        // it started and the pool holds nothing for it
        assert_eq!(fx.asset.balance_of(&fx.strategy.address()), 1_000);
        assert_eq!(fx.strategy.total_value(&fx.pool), 0);
    }

    #[test]
    fn test_vault_only_callers() {
        let mut fx = setup(1_000);
        let outsider = addr(9);

        assert_eq!(
            fx.invest(outsider, 100),
            Err(StrategyError::Unauthorized(outsider))
        );
        assert_eq!(
            fx.strategy.divest(&outsider, &mut fx.pool, 100),
            Err(StrategyError::Unauthorized(outsider))
        );
        assert!(fx.strategy.events().is_empty());
    }

    #[test]
    fn test_pool_errors_propagate_and_change_nothing() {
        let mut fx = setup(50);

        // Deposit larger than the strategy's idle balance
        let result = fx.invest(fx.vault, 100);
        assert!(matches!(
            result,
            Err(StrategyError::Pool(PoolError::Deposit { .. }))
        ));
        assert_eq!(fx.asset.balance_of(&fx.strategy.address()), 50);
        assert_eq!(fx.strategy.total_value(&fx.pool), 0);
        assert!(fx.strategy.events().is_empty());

        // Frozen pool refuses withdrawals
        fx.invest(fx.vault, 50).unwrap();
        fx.pool.refuse_withdrawals = true;
        let result = fx.strategy.divest(&fx.vault, &mut fx.pool, 50);
        assert!(matches!(
            result,
            Err(StrategyError::Pool(PoolError::Withdraw { .. }))
        ));
        assert_eq!(fx.strategy.total_value(&fx.pool), 50);
    }

    #[test]
    fn test_divest_beyond_position_is_pool_error() {
        let mut fx = setup(1_000);
        fx.invest(fx.vault, 100).unwrap();

        let result = fx.strategy.divest(&fx.vault, &mut fx.pool, 101);
        assert_eq!(
            result,
            Err(StrategyError::Pool(PoolError::InsufficientLiquidity {
                have: 100,
                need: 101
            }))
        );
    }
}
