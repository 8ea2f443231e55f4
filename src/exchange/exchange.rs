//! Exchange contract
//!
//! Public entry points for deposits, withdrawals and the order lifecycle.
//! The caller is resolved here once and handed to the balance sheet and the
//! order book explicitly.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::ExchangeError;
use crate::math::{FeeMath, NativeMath};
use crate::token::null_address;
use super::balance_sheet::BalanceSheet;
use super::order_book::{Order, OrderBook};
use super::{is_native, native_asset};

/// Exchange contract
#[odra::module]
pub struct Exchange {
    /// Account credited with trading fees
    fee_account: Var<Address>,
    /// Fee in whole percent of the amount paid by the filler
    fee_rate: Var<U256>,
    /// User balances held by the exchange
    balances: SubModule<BalanceSheet>,
    /// Orders and their status
    order_book: SubModule<OrderBook>,
}

#[odra::module]
impl Exchange {
    /// Initialize the exchange with its fee configuration
    pub fn init(&mut self, fee_account: Address, fee_rate: U256) {
        if fee_account == null_address() {
            self.env().revert(ExchangeError::InvalidAddress);
        }
        if !FeeMath::is_valid_rate(fee_rate) {
            self.env().revert(ExchangeError::InvalidFeeRate);
        }
        self.fee_account.set(fee_account);
        self.fee_rate.set(fee_rate);
    }

    /// Get the fee account
    pub fn fee_account(&self) -> Address {
        self.fee_account.get_or_revert_with(ExchangeError::InvalidAddress)
    }

    /// Get the fee rate in percent
    pub fn fee_rate(&self) -> U256 {
        self.fee_rate.get_or_default()
    }

    /// Asset address used for native CSPR balances
    pub fn native_asset(&self) -> Address {
        native_asset()
    }

    // ============ Balances ============

    /// Deposit the CSPR attached to the call
    #[odra(payable)]
    pub fn deposit_ether(&mut self) {
        let caller = self.env().caller();
        let amount = NativeMath::from_motes(self.env().attached_value())
            .unwrap_or_else(|e| self.env().revert(e));
        self.balances.deposit(native_asset(), caller, amount);
    }

    /// Withdraw CSPR from the caller's exchange balance
    pub fn withdraw_ether(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.balances.withdraw(native_asset(), caller, amount);
    }

    /// Deposit tokens previously approved to the exchange.
    /// Payable only so that attached CSPR can be refused with a typed error.
    #[odra(payable)]
    pub fn deposit_token(&mut self, token: Address, amount: U256) {
        if is_native(token) || !self.env().attached_value().is_zero() {
            self.env().revert(ExchangeError::WrongAssetKind);
        }
        let caller = self.env().caller();
        self.balances.deposit(token, caller, amount);
    }

    /// Withdraw tokens from the caller's exchange balance
    pub fn withdraw_token(&mut self, token: Address, amount: U256) {
        if is_native(token) {
            self.env().revert(ExchangeError::WrongAssetKind);
        }
        let caller = self.env().caller();
        self.balances.withdraw(token, caller, amount);
    }

    /// Exchange balance of `user` in `token`
    pub fn balance_of(&self, token: Address, user: Address) -> U256 {
        self.balances.balance_of(token, user)
    }

    // ============ Orders ============

    /// Place an order, returns its id
    pub fn make_order(
        &mut self,
        token_get: Address,
        amount_get: U256,
        token_give: Address,
        amount_give: U256,
    ) -> u64 {
        let caller = self.env().caller();
        self.order_book
            .make(caller, token_get, amount_get, token_give, amount_give)
            .id
    }

    /// Cancel one of the caller's open orders
    pub fn cancel_order(&mut self, id: u64) {
        let caller = self.env().caller();
        self.order_book.cancel(caller, id);
    }

    /// Fill an open order as the caller
    pub fn fill_order(&mut self, id: u64) {
        let filler = self.env().caller();
        let fee_account = self.fee_account();
        let fee_rate = self.fee_rate();
        self.order_book
            .fill(filler, id, &mut self.balances, fee_account, fee_rate);
    }

    /// Get an order by id
    pub fn get_order(&self, id: u64) -> Option<Order> {
        self.order_book.order(id)
    }

    /// Number of orders ever created
    pub fn order_count(&self) -> u64 {
        self.order_book.order_count()
    }

    /// Whether the order was filled
    pub fn order_filled(&self, id: u64) -> bool {
        self.order_book.is_filled(id)
    }

    /// Whether the order was cancelled
    pub fn order_cancelled(&self, id: u64) -> bool {
        self.order_book.is_cancelled(id)
    }
}
