use rust_decimal::Decimal;

use crate::error::WealthError;
use crate::types::{checked_div, checked_mul, Money, Rate};
use crate::WealthResult;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
///
/// Fails with `OutOfRange` instead of panicking when the factor leaves
/// Decimal's 96-bit range (very high rates over very long horizons).
pub fn compound(rate: Rate, n: u32) -> WealthResult<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| WealthError::OutOfRange {
                field: "compound_factor".into(),
                value: rate,
            })?;
    }
    Ok(result)
}

/// Future-value factor of an ordinary annuity: ((1 + r)^n - 1) / r.
/// Collapses to `n` when the rate is zero.
pub fn annuity_factor(rate: Rate, n: u32) -> WealthResult<Decimal> {
    if rate.is_zero() {
        return Ok(Decimal::from(n));
    }
    checked_div("annuity_factor", compound(rate, n)? - Decimal::ONE, rate)
}

/// Level payment amortising `principal` over `n` periods at periodic `rate`.
///
/// P·r·(1+r)^n / ((1+r)^n − 1); straight division P/n when r = 0.
pub fn level_payment(principal: Money, rate: Rate, n: u32) -> WealthResult<Money> {
    if n == 0 {
        return Err(WealthError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(n));
    }

    let factor = compound(rate, n)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(WealthError::DivisionByZero {
            context: "level payment annuity factor".into(),
        });
    }

    // factor / (factor - 1) first keeps the intermediate small for large loans
    let scaled = checked_mul("principal", principal, rate)?;
    checked_mul("principal", scaled, factor / denominator)
}

/// Periodic contribution, paid at the start of each period, that grows to
/// `future_value` after `n` periods:
///
/// FV = C · [((1+r)^n − 1)/r] · (1+r), solved for C. Falls back to FV/n
/// when r = 0.
pub fn annuity_due_payment(future_value: Money, rate: Rate, n: u32) -> WealthResult<Money> {
    if n == 0 {
        return Err(WealthError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(future_value / Decimal::from(n));
    }

    let due_factor = checked_mul("annuity_factor", annuity_factor(rate, n)?, Decimal::ONE + rate)?;
    checked_div("annuity-due factor", future_value, due_factor)
}

/// Future value of `n` start-of-period contributions of `payment`.
pub fn annuity_due_future_value(payment: Money, rate: Rate, n: u32) -> WealthResult<Money> {
    let grown = checked_mul("payment", payment, annuity_factor(rate, n)?)?;
    checked_mul("payment", grown, Decimal::ONE + rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_basic() {
        assert_eq!(compound(dec!(0.10), 2).unwrap(), dec!(1.21));
        assert_eq!(compound(dec!(0.05), 0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_compound_overflow_is_an_error() {
        let err = compound(dec!(1.0), 200).unwrap_err();
        assert!(matches!(err, WealthError::OutOfRange { .. }));
    }

    #[test]
    fn test_level_payment_zero_rate() {
        assert_eq!(level_payment(dec!(120000), Decimal::ZERO, 120).unwrap(), dec!(1000));
    }

    #[test]
    fn test_level_payment_known_value() {
        // 1,000,000 at 1% per month over 60 months ≈ 22,244.45
        let p = level_payment(dec!(1_000_000), dec!(0.01), 60).unwrap();
        assert!((p - dec!(22244.45)).abs() < dec!(0.01), "p={p}");
    }

    #[test]
    fn test_level_payment_zero_periods() {
        assert!(level_payment(dec!(1000), dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_annuity_due_payment_inverts_future_value() {
        let c = annuity_due_payment(dec!(100_000), dec!(0.01), 36).unwrap();
        let fv = annuity_due_future_value(c, dec!(0.01), 36).unwrap();
        assert!((fv - dec!(100_000)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_annuity_due_zero_rate() {
        assert_eq!(annuity_due_payment(dec!(1200), Decimal::ZERO, 12).unwrap(), dec!(100));
    }

    #[test]
    fn test_level_payment_overflow_is_an_error() {
        // 7e28 at 200% a period: principal × rate already overflows
        let err = level_payment(dec!(70_000_000_000_000_000_000_000_000_000), dec!(2), 12).unwrap_err();
        assert!(matches!(err, WealthError::OutOfRange { .. }));
    }
}
