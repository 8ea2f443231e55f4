//! Per-asset, per-user balances held by the exchange
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::ExchangeError;
use crate::events::{Deposit, Withdraw};
use crate::math::{NativeMath, SafeMath};
use crate::token::Cep18TokenContractRef;
use super::is_native;

/// Balance table keyed by (asset, account)
#[odra::module]
pub struct BalanceSheet {
    /// (asset, account) -> amount held on the exchange
    balances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl BalanceSheet {
    /// Balance of `account` in `asset`, zero when unknown
    pub fn balance_of(&self, asset: Address, account: Address) -> U256 {
        self.balances.get(&(asset, account)).unwrap_or_default()
    }

    /// Credits a deposit to `account`.
    ///
    /// Native value must already be attached to the call. Tokens are pulled
    /// from `account` through its allowance to the exchange.
    /// Returns the new balance.
    pub fn deposit(&mut self, asset: Address, account: Address, amount: U256) -> U256 {
        if !is_native(asset) && !amount.is_zero() {
            self.pull_tokens(asset, account, amount);
        }
        let balance = self.credit(asset, account, amount);

        self.env().emit_event(Deposit {
            token: asset,
            user: account,
            amount,
            balance,
        });
        balance
    }

    /// Debits `account` and sends the asset back to it.
    /// Returns the new balance.
    pub fn withdraw(&mut self, asset: Address, account: Address, amount: U256) -> U256 {
        let balance = self.debit(asset, account, amount);

        if !amount.is_zero() {
            if is_native(asset) {
                let motes = NativeMath::to_motes(amount).unwrap_or_else(|e| self.env().revert(e));
                self.env().transfer_tokens(&account, &motes);
            } else {
                let mut token_ref = Cep18TokenContractRef::new(self.env(), asset);
                if !token_ref.transfer(account, amount) {
                    self.env().revert(ExchangeError::TransferFailed);
                }
            }
        }

        self.env().emit_event(Withdraw {
            token: asset,
            user: account,
            amount,
            balance,
        });
        balance
    }

    /// Adds `amount` to a balance, returns the new balance
    pub fn credit(&mut self, asset: Address, account: Address, amount: U256) -> U256 {
        let balance = SafeMath::add(self.balance_of(asset, account), amount)
            .unwrap_or_else(|e| self.env().revert(e));
        self.balances.set(&(asset, account), balance);
        balance
    }

    /// Removes `amount` from a balance, returns the new balance
    pub fn debit(&mut self, asset: Address, account: Address, amount: U256) -> U256 {
        let balance = SafeMath::sub(self.balance_of(asset, account), amount)
            .unwrap_or_else(|e| self.env().revert(e));
        self.balances.set(&(asset, account), balance);
        balance
    }

    /// Moves tokens from `from` into the exchange's custody
    fn pull_tokens(&self, token: Address, from: Address, amount: U256) {
        let exchange = self.env().self_address();
        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);

        if token_ref.allowance(from, exchange) < amount || token_ref.balance_of(from) < amount {
            self.env().revert(ExchangeError::DepositRejected);
        }
        if !token_ref.transfer_from(from, exchange, amount) {
            self.env().revert(ExchangeError::DepositRejected);
        }
    }
}
