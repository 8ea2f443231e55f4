//! Error definitions for the token and exchange contracts
use odra::prelude::*;

/// Errors raised by the fungible token contract
#[odra::odra_error]
pub enum TokenError {
    /// Sender balance is lower than the requested amount
    InsufficientBalance = 100,

    /// Spender allowance is lower than the requested amount
    InsufficientAllowance = 101,

    /// Null address used as a recipient or spender
    InvalidAddress = 102,
}

/// Errors raised by the exchange contract and its sub-modules
#[odra::odra_error]
pub enum ExchangeError {
    /// Balance held on the exchange is lower than the requested amount
    InsufficientBalance = 1,

    /// Null address where a real account is required
    InvalidAddress = 2,

    /// Native currency routed through the token path, or the other way round
    WrongAssetKind = 3,

    /// Order id was never issued
    UnknownOrder = 4,

    /// Caller is not the creator of the order
    Unauthorized = 5,

    /// Order has already been filled
    AlreadyFilled = 6,

    /// Order has already been cancelled
    AlreadyCancelled = 7,

    /// Token refused to move funds into the exchange
    DepositRejected = 8,

    /// Fee rate above 100 percent
    InvalidFeeRate = 9,

    /// Arithmetic overflow
    Overflow = 10,

    /// Token refused to release funds on withdrawal
    TransferFailed = 11,
}
