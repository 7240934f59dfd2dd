use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::WealthResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates as the dashboard forms take them: percentages (12 = 12% p.a.).
pub type Percent = Decimal;

/// Rates expressed as decimals (0.01 = 1%). Used for periodic rates only.
pub type Rate = Decimal;

/// Digits kept when a value is reported in a currency's minor unit.
pub const MINOR_UNIT_DP: u32 = 2;

/// Longest loan tenure, goal horizon or PPF projection accepted, in years.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Standard computation output envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation. Deliberately free of timestamps and
/// timings so identical inputs serialise to identical outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Convert a host-supplied float into a Decimal, rejecting NaN and
/// infinities instead of letting them reach a formula.
pub fn decimal_from_f64(field: &str, value: f64) -> WealthResult<Decimal> {
    if !value.is_finite() {
        return Err(WealthError::InvalidInput {
            field: field.into(),
            reason: format!("must be a finite number, got {value}"),
        });
    }
    Decimal::from_f64(value).ok_or_else(|| WealthError::InvalidInput {
        field: field.into(),
        reason: format!("{value} cannot be represented as a decimal"),
    })
}

/// Round to the currency's minor unit (paise / cents), half away from zero.
pub fn round_currency(value: Money) -> Money {
    value.round_dp_with_strategy(MINOR_UNIT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a percentage to a monthly periodic rate: 12 -> 0.01.
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / Decimal::from(12) / Decimal::ONE_HUNDRED
}

/// `amount × pct / 100`
pub fn percent_of(amount: Money, pct: Percent) -> WealthResult<Money> {
    Ok(checked_mul("percent_of", amount, pct)? / Decimal::ONE_HUNDRED)
}

fn out_of_range(field: &str, value: Decimal) -> WealthError {
    WealthError::OutOfRange {
        field: field.into(),
        value,
    }
}

/// `a × b`, or `OutOfRange` on `field` when the product leaves Decimal's range.
pub fn checked_mul(field: &str, a: Decimal, b: Decimal) -> WealthResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| out_of_range(field, a))
}

pub fn checked_add(field: &str, a: Decimal, b: Decimal) -> WealthResult<Decimal> {
    a.checked_add(b).ok_or_else(|| out_of_range(field, a))
}

pub fn checked_sub(field: &str, a: Decimal, b: Decimal) -> WealthResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| out_of_range(field, a))
}

/// `a ÷ b`; a zero divisor is `DivisionByZero`, an overflowing quotient
/// `OutOfRange`.
pub fn checked_div(field: &str, a: Decimal, b: Decimal) -> WealthResult<Decimal> {
    if b.is_zero() {
        return Err(WealthError::DivisionByZero {
            context: field.into(),
        });
    }
    a.checked_div(b).ok_or_else(|| out_of_range(field, a))
}

/// Reject a horizon the engine will not project over.
pub fn check_horizon(field: &str, years: u32) -> WealthResult<()> {
    if years > MAX_HORIZON_YEARS {
        return Err(WealthError::InvalidInput {
            field: field.into(),
            reason: format!("cannot exceed {MAX_HORIZON_YEARS} years"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_from_f64_rejects_nan() {
        let err = decimal_from_f64("principal", f64::NAN).unwrap_err();
        assert_eq!(err.field(), Some("principal"));
    }

    #[test]
    fn test_decimal_from_f64_rejects_infinity() {
        assert!(decimal_from_f64("rate", f64::INFINITY).is_err());
        assert!(decimal_from_f64("rate", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_decimal_from_f64_accepts_finite() {
        assert_eq!(decimal_from_f64("x", 2500.5).unwrap(), dec!(2500.5));
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec!(22244.445)), dec!(22244.45));
        assert_eq!(round_currency(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn test_monthly_rate() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
    }

    #[test]
    fn test_metadata_is_deterministic() {
        let a = with_metadata("m", &dec!(1), vec![], dec!(2));
        let b = with_metadata("m", &dec!(1), vec![], dec!(2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_checked_helpers_report_overflow() {
        let err = checked_mul("principal", Decimal::MAX, dec!(2)).unwrap_err();
        assert!(matches!(err, WealthError::OutOfRange { ref field, .. } if field == "principal"));
        assert!(checked_add("x", Decimal::MAX, Decimal::ONE).is_err());
        assert!(checked_sub("x", Decimal::MIN, Decimal::ONE).is_err());
        assert!(matches!(
            checked_div("x", Decimal::ONE, Decimal::ZERO),
            Err(WealthError::DivisionByZero { .. })
        ));
        assert_eq!(checked_mul("x", dec!(1.5), dec!(2)).unwrap(), dec!(3.0));
    }

    #[test]
    fn test_percent_of_overflow() {
        assert_eq!(percent_of(dec!(500_000), dec!(2)).unwrap(), dec!(10_000));
        assert!(percent_of(Decimal::MAX, dec!(50)).is_err());
    }

    #[test]
    fn test_horizon_limit() {
        assert!(check_horizon("years", MAX_HORIZON_YEARS).is_ok());
        let err = check_horizon("years", MAX_HORIZON_YEARS + 1).unwrap_err();
        assert_eq!(err.field(), Some("years"));
    }
}
