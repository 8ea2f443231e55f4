//! Order records, their lifecycle and settlement
//!
//! Every order is created open and ends in exactly one terminal state,
//! filled or cancelled. Ids start at 1 and are never reused.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::ExchangeError;
use crate::events::{Cancel, Order as OrderPlaced, Trade};
use crate::math::FeeMath;
use super::balance_sheet::BalanceSheet;

/// A standing offer to swap `amount_give` of `token_give` for `amount_get` of `token_get`
#[odra::odra_type]
pub struct Order {
    /// Sequential id, starting at 1
    pub id: u64,
    /// Creator of the order
    pub user: Address,
    /// Asset the creator wants
    pub token_get: Address,
    /// Amount the creator wants
    pub amount_get: U256,
    /// Asset the creator offers
    pub token_give: Address,
    /// Amount the creator offers
    pub amount_give: U256,
    /// Creation time
    pub timestamp: u64,
}

/// Order storage with separate terminal-status tables
#[odra::module]
pub struct OrderBook {
    /// id -> order
    orders: Mapping<u64, Order>,
    /// Highest id issued so far
    order_count: Var<u64>,
    /// id -> filled flag
    filled: Mapping<u64, bool>,
    /// id -> cancelled flag
    cancelled: Mapping<u64, bool>,
}

#[odra::module]
impl OrderBook {
    /// Number of orders ever created, also the highest id issued
    pub fn order_count(&self) -> u64 {
        self.order_count.get_or_default()
    }

    /// Get an order by id
    pub fn order(&self, id: u64) -> Option<Order> {
        self.orders.get(&id)
    }

    /// Whether the order was filled
    pub fn is_filled(&self, id: u64) -> bool {
        self.filled.get(&id).unwrap_or(false)
    }

    /// Whether the order was cancelled
    pub fn is_cancelled(&self, id: u64) -> bool {
        self.cancelled.get(&id).unwrap_or(false)
    }

    /// Records a new open order. Funding is only checked when it is filled.
    pub fn make(
        &mut self,
        creator: Address,
        token_get: Address,
        amount_get: U256,
        token_give: Address,
        amount_give: U256,
    ) -> Order {
        let id = self.order_count() + 1;
        let order = Order {
            id,
            user: creator,
            token_get,
            amount_get,
            token_give,
            amount_give,
            timestamp: self.env().get_block_time(),
        };
        self.orders.set(&id, order.clone());
        self.order_count.set(id);

        self.env().emit_event(OrderPlaced {
            id,
            user: order.user,
            token_get,
            amount_get,
            token_give,
            amount_give,
            timestamp: order.timestamp,
        });
        order
    }

    /// Cancels an open order on behalf of its creator
    pub fn cancel(&mut self, caller: Address, id: u64) -> Order {
        let order = self
            .order(id)
            .unwrap_or_else(|| self.env().revert(ExchangeError::UnknownOrder));

        if order.user != caller {
            self.env().revert(ExchangeError::Unauthorized);
        }
        if self.is_cancelled(id) {
            self.env().revert(ExchangeError::AlreadyCancelled);
        }
        if self.is_filled(id) {
            self.env().revert(ExchangeError::AlreadyFilled);
        }

        self.cancelled.set(&id, true);

        self.env().emit_event(Cancel {
            id,
            user: order.user,
            token_get: order.token_get,
            amount_get: order.amount_get,
            token_give: order.token_give,
            amount_give: order.amount_give,
            timestamp: self.env().get_block_time(),
        });
        order
    }
}

impl OrderBook {
    /// Fills an open order for `filler` and settles it against `sheet`.
    ///
    /// The filler pays `amount_get` of `token_get`, of which the fee goes to
    /// `fee_account` and the rest to the creator. The creator pays
    /// `amount_give` of `token_give` to the filler.
    pub fn fill(
        &mut self,
        filler: Address,
        id: u64,
        sheet: &mut BalanceSheet,
        fee_account: Address,
        fee_rate: U256,
    ) -> Order {
        let order = self
            .order(id)
            .unwrap_or_else(|| self.env().revert(ExchangeError::UnknownOrder));

        if self.is_filled(id) {
            self.env().revert(ExchangeError::AlreadyFilled);
        }
        if self.is_cancelled(id) {
            self.env().revert(ExchangeError::AlreadyCancelled);
        }

        let (net, fee) = FeeMath::split(order.amount_get, fee_rate)
            .unwrap_or_else(|e| self.env().revert(e));

        if sheet.balance_of(order.token_get, filler) < order.amount_get
            || sheet.balance_of(order.token_give, order.user) < order.amount_give
        {
            self.env().revert(ExchangeError::InsufficientBalance);
        }

        sheet.debit(order.token_get, filler, order.amount_get);
        sheet.credit(order.token_get, order.user, net);
        sheet.credit(order.token_get, fee_account, fee);
        sheet.debit(order.token_give, order.user, order.amount_give);
        sheet.credit(order.token_give, filler, order.amount_give);

        self.filled.set(&id, true);

        self.env().emit_event(Trade {
            id,
            user: order.user,
            token_get: order.token_get,
            amount_get: order.amount_get,
            token_give: order.token_give,
            amount_give: order.amount_give,
            user_fill: filler,
            timestamp: self.env().get_block_time(),
        });
        order
    }
}
