use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::policy::EnginePolicy;
use crate::types::*;
use crate::WealthResult;

/// Statutory lock-in of a PPF account, in years.
pub const PPF_DEFAULT_TENURE: u32 = 15;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositFrequency {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfInput {
    /// Amount deposited each period.
    pub installment: Money,
    pub frequency: DepositFrequency,
    #[serde(default = "default_tenure")]
    pub tenure_years: u32,
    #[serde(default)]
    pub existing_balance: Money,
    /// Calendar year the account starts; yearly rows are labelled from here.
    pub start_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_amount: Option<Money>,
    /// Overrides the policy rate when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_rate_percent: Option<Percent>,
}

fn default_tenure() -> u32 {
    PPF_DEFAULT_TENURE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfYear {
    pub year: i32,
    pub deposited: Money,
    pub interest: Money,
    pub balance: Money,
    pub invested: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCheck {
    pub goal_amount: Money,
    pub achieved: bool,
    pub shortfall: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfOutput {
    pub invested: Money,
    pub interest: Money,
    pub maturity: Money,
    pub annual_rate_percent: Percent,
    pub yearly: Vec<PpfYear>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalCheck>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

pub fn project_ppf(input: &PpfInput) -> WealthResult<ComputationOutput<PpfOutput>> {
    project_ppf_with_policy(input, &EnginePolicy::default())
}

/// Year-by-year PPF projection: each year's deposits go in first, then the
/// year's interest is credited on the whole balance.
pub fn project_ppf_with_policy(
    input: &PpfInput,
    policy: &EnginePolicy,
) -> WealthResult<ComputationOutput<PpfOutput>> {
    let mut warnings: Vec<String> = Vec::new();

    if input.installment <= Decimal::ZERO {
        return Err(WealthError::InvalidInput {
            field: "installment".into(),
            reason: "Deposit amount must be positive".into(),
        });
    }
    if input.tenure_years == 0 {
        return Err(WealthError::InvalidInput {
            field: "tenure_years".into(),
            reason: "Tenure must be at least 1 year".into(),
        });
    }
    check_horizon("tenure_years", input.tenure_years)?;
    if input.existing_balance < Decimal::ZERO {
        return Err(WealthError::InvalidInput {
            field: "existing_balance".into(),
            reason: "Existing balance cannot be negative".into(),
        });
    }
    let rate_percent = input.annual_rate_percent.unwrap_or(policy.ppf_rate_percent);
    if rate_percent < Decimal::ZERO {
        return Err(WealthError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if input.tenure_years < PPF_DEFAULT_TENURE {
        warnings.push(format!(
            "PPF accounts lock in for {PPF_DEFAULT_TENURE} years; a {}-year projection ends before maturity",
            input.tenure_years
        ));
    }

    let yearly_deposit = match input.frequency {
        DepositFrequency::Monthly => checked_mul("installment", input.installment, Decimal::from(12))?,
        DepositFrequency::Yearly => input.installment,
    };
    let rate = rate_percent / Decimal::ONE_HUNDRED;

    let mut balance = input.existing_balance;
    let mut invested = input.existing_balance;
    let mut yearly = Vec::with_capacity(input.tenure_years as usize);

    for i in 1..=input.tenure_years {
        balance = checked_add("balance", balance, yearly_deposit)?;
        invested = checked_add("invested", invested, yearly_deposit)?;
        let interest = checked_mul("balance", balance, rate)?;
        balance = checked_add("balance", balance, interest)?;

        yearly.push(PpfYear {
            year: input.start_year + i as i32,
            deposited: yearly_deposit,
            interest,
            balance,
            invested,
        });
    }

    let goal = input.goal_amount.map(|goal_amount| GoalCheck {
        goal_amount,
        achieved: balance >= goal_amount,
        shortfall: (goal_amount - balance).max(Decimal::ZERO),
    });

    let output = PpfOutput {
        invested,
        interest: balance - invested,
        maturity: balance,
        annual_rate_percent: rate_percent,
        yearly,
        goal,
    };

    Ok(with_metadata(
        "Yearly compounding: deposit then credit interest on closing balance",
        input,
        warnings,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(installment: Decimal, frequency: DepositFrequency) -> PpfInput {
        PpfInput {
            installment,
            frequency,
            tenure_years: 15,
            existing_balance: Decimal::ZERO,
            start_year: 2024,
            goal_amount: None,
            annual_rate_percent: None,
        }
    }

    #[test]
    fn test_yearly_deposit_maturity() {
        // 1.5 lakh a year for 15 years at 7.1% ≈ 40.68 lakh
        let out = project_ppf(&input(dec!(150_000), DepositFrequency::Yearly)).unwrap();
        let res = &out.result;
        assert_eq!(res.invested, dec!(2_250_000));
        assert!((res.maturity - dec!(4_068_209)).abs() < dec!(1), "{}", res.maturity);
        assert_eq!(res.interest, res.maturity - res.invested);
        assert_eq!(res.yearly.len(), 15);
        assert_eq!(res.yearly[0].year, 2025);
        assert_eq!(res.yearly[0].balance, dec!(160_650));
    }

    #[test]
    fn test_monthly_frequency_deposits_twelve_times() {
        let out = project_ppf(&input(dec!(1_000), DepositFrequency::Monthly)).unwrap();
        assert_eq!(out.result.yearly[0].deposited, dec!(12_000));
    }

    #[test]
    fn test_goal_check() {
        let mut req = input(dec!(10_000), DepositFrequency::Yearly);
        req.goal_amount = Some(dec!(1_000_000));
        let goal = project_ppf(&req).unwrap().result.goal.unwrap();
        assert!(!goal.achieved);
        assert!(goal.shortfall > Decimal::ZERO);
    }

    #[test]
    fn test_existing_balance_counts_as_invested() {
        let mut req = input(dec!(10_000), DepositFrequency::Yearly);
        req.existing_balance = dec!(50_000);
        req.tenure_years = 1;
        let out = project_ppf(&req).unwrap();
        assert_eq!(out.result.invested, dec!(60_000));
        assert_eq!(out.result.maturity, dec!(64_260));
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_rate_override() {
        let mut req = input(dec!(100), DepositFrequency::Yearly);
        req.tenure_years = 1;
        req.annual_rate_percent = Some(Decimal::ZERO);
        assert_eq!(project_ppf(&req).unwrap().result.maturity, dec!(100));
    }

    #[test]
    fn test_invalid_installment() {
        assert!(project_ppf(&input(Decimal::ZERO, DepositFrequency::Yearly)).is_err());
    }

    #[test]
    fn test_tenure_beyond_limit_rejected() {
        let mut req = input(dec!(150_000), DepositFrequency::Yearly);
        req.tenure_years = 2000;
        let err = project_ppf(&req).unwrap_err();
        assert_eq!(err.field(), Some("tenure_years"));
    }

    #[test]
    fn test_overflowing_balance_is_an_error() {
        let mut req = input(dec!(10_000_000_000_000_000_000_000_000), DepositFrequency::Yearly);
        req.tenure_years = 100;
        req.annual_rate_percent = Some(dec!(100));
        let err = project_ppf(&req).unwrap_err();
        assert!(matches!(err, WealthError::OutOfRange { .. }));
    }
}
