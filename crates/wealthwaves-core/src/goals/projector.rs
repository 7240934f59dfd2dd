use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::policy::{validate_tiers, EnginePolicy, StrategyTier};
use crate::time_value::{annuity_due_payment, compound};
use crate::types::*;
use crate::WealthResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A savings goal priced in today's money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRequest {
    pub present_cost: Money,
    pub years: u32,
    /// Annual inflation; the policy default (6.2%) when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_rate_percent: Option<Percent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub future_cost: Money,
    pub required_monthly_contribution: Money,
    pub months: u32,
    pub strategy_label: String,
    pub assumed_annual_return_percent: Percent,
    pub inflation_rate_percent: Percent,
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// First tier whose inclusive `max_years` covers the horizon.
pub fn select_tier(years: u32, tiers: &[StrategyTier]) -> WealthResult<&StrategyTier> {
    tiers
        .iter()
        .find(|tier| tier.max_years.map_or(true, |max| years <= max))
        .ok_or_else(|| WealthError::InvalidInput {
            field: "tiers".into(),
            reason: format!("no tier covers a {years}-year horizon"),
        })
}

/// Inflate the goal to its future cost and size the monthly SIP using the
/// default horizon tiers.
pub fn project_goal(input: &GoalRequest) -> WealthResult<ComputationOutput<GoalResult>> {
    project_goal_with_policy(input, &EnginePolicy::default())
}

pub fn project_goal_with_policy(
    input: &GoalRequest,
    policy: &EnginePolicy,
) -> WealthResult<ComputationOutput<GoalResult>> {
    project(input, &policy.goal_tiers, policy.default_inflation_percent)
}

/// Same projection against a caller-supplied tier table.
pub fn project_goal_with_tiers(
    input: &GoalRequest,
    tiers: &[StrategyTier],
) -> WealthResult<ComputationOutput<GoalResult>> {
    project(input, tiers, EnginePolicy::default().default_inflation_percent)
}

fn project(
    input: &GoalRequest,
    tiers: &[StrategyTier],
    default_inflation: Percent,
) -> WealthResult<ComputationOutput<GoalResult>> {
    let mut warnings: Vec<String> = Vec::new();

    if input.present_cost <= Decimal::ZERO {
        return Err(WealthError::InvalidInput {
            field: "present_cost".into(),
            reason: "Goal cost must be positive".into(),
        });
    }
    if input.years == 0 {
        return Err(WealthError::InvalidInput {
            field: "years".into(),
            reason: "Goal horizon must be at least 1 year".into(),
        });
    }
    check_horizon("years", input.years)?;
    let inflation = input.inflation_rate_percent.unwrap_or(default_inflation);
    if inflation <= -Decimal::ONE_HUNDRED {
        return Err(WealthError::InvalidInput {
            field: "inflation_rate_percent".into(),
            reason: "Inflation must be greater than -100%".into(),
        });
    }
    validate_tiers(tiers)?;

    let tier = select_tier(input.years, tiers)?;

    // Inflation alone sets the target; the tier's return only sizes the SIP.
    let future_cost = checked_mul(
        "present_cost",
        input.present_cost,
        compound(inflation / Decimal::ONE_HUNDRED, input.years)?,
    )?;

    let r = monthly_rate(tier.annual_return_percent);
    let n = input.years * 12;
    if r.is_zero() {
        warnings.push("Zero assumed return: contribution is the target divided evenly".into());
    }
    let required_monthly_contribution = annuity_due_payment(future_cost, r, n)?;

    let result = GoalResult {
        future_cost,
        required_monthly_contribution,
        months: n,
        strategy_label: tier.label.clone(),
        assumed_annual_return_percent: tier.annual_return_percent,
        inflation_rate_percent: inflation,
        recommendation: tier.recommendation.clone(),
    };

    Ok(with_metadata(
        "Inflation-adjusted target; SIP from annuity-due FV = C·[((1+r)^n − 1)/r]·(1+r)",
        input,
        warnings,
        result,
    ))
}
