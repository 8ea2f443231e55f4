//! Event definitions for the token and exchange contracts
use odra::prelude::*;
use odra::casper_types::U256;

/// Emitted when tokens move between two accounts
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Emitted when an owner sets a spender allowance
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: U256,
}

/// Emitted when an asset is credited to a user's exchange balance
#[odra::event]
pub struct Deposit {
    /// Asset address, the native asset for CSPR
    pub token: Address,
    /// Depositor
    pub user: Address,
    /// Amount deposited
    pub amount: U256,
    /// Exchange balance after the deposit
    pub balance: U256,
}

/// Emitted when an asset leaves a user's exchange balance
#[odra::event]
pub struct Withdraw {
    /// Asset address, the native asset for CSPR
    pub token: Address,
    /// Recipient
    pub user: Address,
    /// Amount withdrawn
    pub amount: U256,
    /// Exchange balance after the withdrawal
    pub balance: U256,
}

/// Emitted when an order is placed
#[odra::event]
pub struct Order {
    /// Order id
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

/// Emitted when an order is cancelled by its creator
#[odra::event]
pub struct Cancel {
    /// Order id
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
    /// Cancellation time
    pub timestamp: u64,
}

/// Emitted when an order is filled
#[odra::event]
pub struct Trade {
    /// Order id
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
    /// Account that filled the order
    pub user_fill: Address,
    /// Fill time
    pub timestamp: u64,
}
