//! Arithmetic helpers for the exchange contracts
//! Checked U256 math, fee computation and native currency conversions
use odra::casper_types::{U256, U512};
use crate::errors::ExchangeError;

/// Fee rates are whole percents
pub const FEE_DENOMINATOR: u64 = 100;

/// Safe math operations for U256
pub struct SafeMath;

impl SafeMath {
    /// Safe addition with overflow check
    pub fn add(a: U256, b: U256) -> Result<U256, ExchangeError> {
        a.checked_add(b).ok_or(ExchangeError::Overflow)
    }

    /// Safe subtraction, an underflow means the balance is short
    pub fn sub(a: U256, b: U256) -> Result<U256, ExchangeError> {
        a.checked_sub(b).ok_or(ExchangeError::InsufficientBalance)
    }

    /// Safe multiplication with overflow check
    pub fn mul(a: U256, b: U256) -> Result<U256, ExchangeError> {
        a.checked_mul(b).ok_or(ExchangeError::Overflow)
    }
}

/// Fee split applied when an order is filled
pub struct FeeMath;

impl FeeMath {
    /// Whether a fee rate is a valid percentage
    pub fn is_valid_rate(fee_rate: U256) -> bool {
        fee_rate <= U256::from(FEE_DENOMINATOR)
    }

    /// fee = amount * fee_rate / 100, truncated
    pub fn fee_for(amount: U256, fee_rate: U256) -> Result<U256, ExchangeError> {
        let scaled = SafeMath::mul(amount, fee_rate)?;
        Ok(scaled / U256::from(FEE_DENOMINATOR))
    }

    /// Splits `amount` into (net, fee) where net + fee == amount
    pub fn split(amount: U256, fee_rate: U256) -> Result<(U256, U256), ExchangeError> {
        if !Self::is_valid_rate(fee_rate) {
            return Err(ExchangeError::InvalidFeeRate);
        }
        let fee = Self::fee_for(amount, fee_rate)?;
        Ok((SafeMath::sub(amount, fee)?, fee))
    }
}

/// Conversions between ledger amounts (U256) and native motes (U512)
pub struct NativeMath;

impl NativeMath {
    /// Converts an attached native value into a ledger amount
    pub fn from_motes(motes: U512) -> Result<U256, ExchangeError> {
        if motes > U512::from(u128::MAX) {
            return Err(ExchangeError::Overflow);
        }
        Ok(U256::from(motes.as_u128()))
    }

    /// Converts a ledger amount into native motes for a payout
    pub fn to_motes(amount: U256) -> Result<U512, ExchangeError> {
        if amount > U256::from(u128::MAX) {
            return Err(ExchangeError::Overflow);
        }
        Ok(U512::from(amount.as_u128()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_for_truncates() {
        assert_eq!(FeeMath::fee_for(U256::from(1000), U256::from(10)).unwrap(), U256::from(100));
        assert_eq!(FeeMath::fee_for(U256::from(19), U256::from(10)).unwrap(), U256::from(1));
        assert_eq!(FeeMath::fee_for(U256::from(9), U256::from(10)).unwrap(), U256::zero());
        assert_eq!(FeeMath::fee_for(U256::from(9), U256::zero()).unwrap(), U256::zero());
    }

    #[test]
    fn test_split_conserves_amount() {
        let amount = U256::from(1_000_000_000_000_000_000u128);
        let (net, fee) = FeeMath::split(amount, U256::from(10)).unwrap();
        assert_eq!(fee, U256::from(100_000_000_000_000_000u128));
        assert_eq!(net, U256::from(900_000_000_000_000_000u128));
        assert_eq!(net + fee, amount);

        let (net, fee) = FeeMath::split(U256::from(7), U256::from(100)).unwrap();
        assert_eq!(net, U256::zero());
        assert_eq!(fee, U256::from(7));
    }

    #[test]
    fn test_split_rejects_rate_above_hundred() {
        assert!(matches!(
            FeeMath::split(U256::from(100), U256::from(101)),
            Err(ExchangeError::InvalidFeeRate)
        ));
    }

    #[test]
    fn test_fee_overflow() {
        assert!(matches!(
            FeeMath::fee_for(U256::MAX, U256::from(2)),
            Err(ExchangeError::Overflow)
        ));
    }

    #[test]
    fn test_safe_math() {
        assert_eq!(SafeMath::add(U256::from(2), U256::from(3)).unwrap(), U256::from(5));
        assert!(matches!(SafeMath::add(U256::MAX, U256::one()), Err(ExchangeError::Overflow)));
        assert!(matches!(
            SafeMath::sub(U256::from(2), U256::from(3)),
            Err(ExchangeError::InsufficientBalance)
        ));
        assert_eq!(SafeMath::sub(U256::from(3), U256::from(3)).unwrap(), U256::zero());
    }

    #[test]
    fn test_native_conversions() {
        let amount = U256::from(1_000_000_000u64);
        let motes = NativeMath::to_motes(amount).unwrap();
        assert_eq!(motes, U512::from(1_000_000_000u64));
        assert_eq!(NativeMath::from_motes(motes).unwrap(), amount);
        assert!(matches!(NativeMath::to_motes(U256::MAX), Err(ExchangeError::Overflow)));
        assert!(matches!(NativeMath::from_motes(U512::MAX), Err(ExchangeError::Overflow)));
    }
}
