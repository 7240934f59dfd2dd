use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::time_value::level_payment;
use crate::types::*;
use crate::WealthResult;

/// A fixed-rate loan as entered on the loan / MSME / EMI forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub tenure_years: u32,
    /// One-off fee charged on the principal, as a percentage.
    #[serde(default)]
    pub processing_fee_percent: Percent,
    /// Emit the month-by-month schedule as well as the totals.
    #[serde(default)]
    pub include_schedule: bool,
}

impl LoanRequest {
    pub fn new(principal: Money, annual_rate_percent: Percent, tenure_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
            processing_fee_percent: Decimal::ZERO,
            include_schedule: false,
        }
    }

    pub fn months(&self) -> u32 {
        self.tenure_years.saturating_mul(12)
    }

    /// Reject anything the annuity formula cannot take.
    pub fn validate(&self) -> WealthResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(WealthError::InvalidInput {
                field: "principal".into(),
                reason: "Loan amount must be positive".into(),
            });
        }
        if self.tenure_years == 0 {
            return Err(WealthError::InvalidInput {
                field: "tenure_years".into(),
                reason: "Tenure must be at least 1 year".into(),
            });
        }
        check_horizon("tenure_years", self.tenure_years)?;
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(WealthError::InvalidInput {
                field: "annual_rate_percent".into(),
                reason: "Interest rate cannot be negative".into(),
            });
        }
        if self.annual_rate_percent > Decimal::ONE_HUNDRED {
            return Err(WealthError::InvalidInput {
                field: "annual_rate_percent".into(),
                reason: "Interest rate cannot exceed 100%".into(),
            });
        }
        if self.processing_fee_percent < Decimal::ZERO {
            return Err(WealthError::InvalidInput {
                field: "processing_fee_percent".into(),
                reason: "Processing fee cannot be negative".into(),
            });
        }
        Ok(())
    }
}

/// A single month in the repayment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub opening_balance: Money,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub monthly_payment: Money,
    pub months: u32,
    pub total_payable: Money,
    pub total_interest: Money,
    pub processing_fee_amount: Money,
    pub total_outgo: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

/// Equated monthly instalment for a loan, full precision.
pub fn emi(principal: Money, annual_rate_percent: Percent, tenure_years: u32) -> WealthResult<Money> {
    let request = LoanRequest::new(principal, annual_rate_percent, tenure_years);
    request.validate()?;
    level_payment(principal, monthly_rate(annual_rate_percent), request.months())
}

/// Compute EMI, totals, processing fee and (optionally) the repayment
/// schedule for a fixed-rate loan.
pub fn compute_amortization(
    input: &LoanRequest,
) -> WealthResult<ComputationOutput<AmortizationResult>> {
    input.validate()?;
    let mut warnings: Vec<String> = Vec::new();

    let r = monthly_rate(input.annual_rate_percent);
    let n = input.months();

    if r.is_zero() {
        warnings.push(
            "Zero interest rate: EMI is the principal divided evenly over the tenure".into(),
        );
    }

    let monthly_payment = level_payment(input.principal, r, n)?;
    let total_payable = checked_mul("total_payable", monthly_payment, Decimal::from(n))?;
    let total_interest = total_payable - input.principal;
    let processing_fee_amount = percent_of(input.principal, input.processing_fee_percent)?;
    let total_outgo = checked_add("total_outgo", total_payable, processing_fee_amount)?;

    let schedule = if input.include_schedule {
        Some(build_schedule(input.principal, r, n, monthly_payment)?)
    } else {
        None
    };

    let result = AmortizationResult {
        monthly_payment,
        months: n,
        total_payable,
        total_interest,
        processing_fee_amount,
        total_outgo,
        schedule,
    };

    Ok(with_metadata(
        "Reducing-balance EMI: P·r·(1+r)^n / ((1+r)^n − 1), r = annual%/12/100",
        input,
        warnings,
        result,
    ))
}

fn build_schedule(
    principal: Money,
    r: Rate,
    n: u32,
    payment: Money,
) -> WealthResult<Vec<AmortizationRow>> {
    let mut rows = Vec::with_capacity(n as usize);
    let mut balance = principal;

    for month in 1..=n {
        let opening = balance;
        let interest = checked_mul("interest", opening, r)?;
        // Final month retires whatever is left so the loan closes at zero.
        let (principal_part, paid) = if month == n {
            (opening, checked_add("payment", opening, interest)?)
        } else {
            (payment - interest, payment)
        };
        balance = opening - principal_part;

        rows.push(AmortizationRow {
            month,
            opening_balance: opening,
            payment: paid,
            interest,
            principal: principal_part,
            closing_balance: balance,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(principal: Decimal, rate: Decimal, years: u32) -> LoanRequest {
        LoanRequest::new(principal, rate, years)
    }

    #[test]
    fn test_known_emi_example() {
        let out = compute_amortization(&request(dec!(1_000_000), dec!(12), 5)).unwrap();
        let res = &out.result;
        assert_eq!(res.months, 60);
        assert!((res.monthly_payment - dec!(22244.45)).abs() < dec!(0.01));
        assert!((res.total_interest - dec!(334667)).abs() < dec!(1));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_zero_rate_fallback_is_exact() {
        let out = compute_amortization(&request(dec!(120000), Decimal::ZERO, 10)).unwrap();
        assert_eq!(out.result.monthly_payment, dec!(1000));
        assert_eq!(out.result.total_interest, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_totals_are_consistent() {
        let mut input = request(dec!(500_000), dec!(10.5), 3);
        input.processing_fee_percent = dec!(2);
        let res = compute_amortization(&input).unwrap().result;

        assert_eq!(res.total_payable, res.monthly_payment * dec!(36));
        assert_eq!(res.total_interest, res.total_payable - dec!(500_000));
        assert_eq!(res.processing_fee_amount, dec!(10_000));
        assert_eq!(res.total_outgo, res.total_payable + dec!(10_000));
    }

    #[test]
    fn test_schedule_closes_at_zero() {
        let mut input = request(dec!(250_000), dec!(9), 2);
        input.include_schedule = true;
        let res = compute_amortization(&input).unwrap().result;
        let schedule = res.schedule.unwrap();

        assert_eq!(schedule.len(), 24);
        assert_eq!(schedule.last().unwrap().closing_balance, Decimal::ZERO);
        let repaid: Decimal = schedule.iter().map(|row| row.principal).sum();
        assert!((repaid - dec!(250_000)).abs() < dec!(0.000001));
        // Interest falls as the balance reduces
        assert!(schedule[0].interest > schedule[23].interest);
    }

    #[test]
    fn test_schedule_omitted_by_default() {
        let res = compute_amortization(&request(dec!(1000), dec!(5), 1)).unwrap().result;
        assert!(res.schedule.is_none());
    }

    #[test]
    fn test_invalid_principal() {
        let err = compute_amortization(&request(Decimal::ZERO, dec!(8), 5)).unwrap_err();
        assert_eq!(err.field(), Some("principal"));
    }

    #[test]
    fn test_invalid_tenure() {
        let err = compute_amortization(&request(dec!(1000), dec!(8), 0)).unwrap_err();
        assert_eq!(err.field(), Some("tenure_years"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = compute_amortization(&request(dec!(1000), dec!(-1), 5)).unwrap_err();
        assert_eq!(err.field(), Some("annual_rate_percent"));
    }

    #[test]
    fn test_emi_helper_matches_full_computation() {
        let full = compute_amortization(&request(dec!(750_000), dec!(8.4), 20)).unwrap();
        let quick = emi(dec!(750_000), dec!(8.4), 20).unwrap();
        assert_eq!(full.result.monthly_payment, quick);
    }

    #[test]
    fn test_idempotent() {
        let input = request(dec!(330_000), dec!(11.25), 7);
        let a = compute_amortization(&input).unwrap();
        let b = compute_amortization(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_huge_tenure_rejected_before_computing() {
        let err = compute_amortization(&request(dec!(1000), dec!(12), 400_000_000)).unwrap_err();
        assert_eq!(err.field(), Some("tenure_years"));
        assert!(emi(dec!(1000), dec!(12), 101).is_err());
        assert!(emi(dec!(1000), dec!(12), 100).is_ok());
    }

    #[test]
    fn test_overflowing_totals_are_an_error() {
        // 7e28 at 100% p.a. over a year: the EMI fits, twelve of them do not
        let err = compute_amortization(&request(
            dec!(70_000_000_000_000_000_000_000_000_000),
            dec!(100),
            1,
        ))
        .unwrap_err();
        assert!(matches!(err, WealthError::OutOfRange { .. }));
    }
}
