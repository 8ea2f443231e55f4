//! Order-book exchange
//!
//! Users deposit CSPR or CEP-18 tokens into the exchange, place standing
//! orders that swap a fixed amount of one asset for a fixed amount of another,
//! and fill each other's orders. Fills settle against exchange balances and
//! route a percentage of the received asset to the fee account.

pub mod balance_sheet;
pub mod order_book;
pub mod exchange;


pub use balance_sheet::BalanceSheet;
pub use order_book::{Order, OrderBook};
pub use exchange::Exchange;

use odra::prelude::Address;
use crate::token::null_address;

/// Asset address under which native CSPR balances are tracked
pub fn native_asset() -> Address {
    null_address()
}

/// Whether an asset address stands for native CSPR
pub fn is_native(asset: Address) -> bool {
    asset == native_asset()
}
