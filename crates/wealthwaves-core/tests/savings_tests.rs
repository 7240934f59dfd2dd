#![cfg(all(feature = "savings", feature = "business"))]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wealthwaves_core::business::health::{compute_business_metrics, BusinessInput};
use wealthwaves_core::policy::EnginePolicy;
use wealthwaves_core::savings::ppf::{project_ppf_with_policy, DepositFrequency, PpfInput};

#[test]
fn test_ppf_rows_accumulate_to_maturity() {
    let input = PpfInput {
        installment: dec!(5_000),
        frequency: DepositFrequency::Monthly,
        tenure_years: 15,
        existing_balance: dec!(20_000),
        start_year: 2025,
        goal_amount: Some(dec!(1_500_000)),
        annual_rate_percent: None,
    };
    let out = project_ppf_with_policy(&input, &EnginePolicy::default()).unwrap();
    let res = &out.result;

    let interest: Decimal = res.yearly.iter().map(|y| y.interest).sum();
    assert!((res.interest - interest).abs() < dec!(0.0001));
    assert_eq!(res.yearly.last().unwrap().balance, res.maturity);
    assert_eq!(res.yearly.last().unwrap().year, 2040);
    assert_eq!(res.invested, dec!(20_000) + dec!(60_000) * dec!(15));
    assert!(res.goal.as_ref().unwrap().achieved);
}

#[test]
fn test_ppf_policy_rate_used() {
    let mut policy = EnginePolicy::default();
    policy.ppf_rate_percent = dec!(8);
    let input = PpfInput {
        installment: dec!(1_000),
        frequency: DepositFrequency::Yearly,
        tenure_years: 1,
        existing_balance: Decimal::ZERO,
        start_year: 2025,
        goal_amount: None,
        annual_rate_percent: None,
    };
    let out = project_ppf_with_policy(&input, &policy).unwrap();
    assert_eq!(out.result.maturity, dec!(1_080));
}

#[test]
fn test_business_metrics_idempotent() {
    let input = BusinessInput {
        revenue: dec!(2_400_000),
        cogs: dec!(1_300_000),
        operating_expenses: dec!(600_000),
        depreciation: dec!(80_000),
        interest_expense: dec!(45_000),
        taxes: dec!(90_000),
    };
    let a = compute_business_metrics(&input).unwrap();
    let b = compute_business_metrics(&input).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.result.net_profit, dec!(285_000));
}
