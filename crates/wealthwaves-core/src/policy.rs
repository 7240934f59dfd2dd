//! Tunable engine constants.
//!
//! Every table the dashboard hard-codes lives here as data so a host can
//! load overrides from a file. `EnginePolicy::default()` reproduces the
//! dashboard's behaviour exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::Percent;
use crate::WealthResult;

/// One row of the goal-horizon lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyTier {
    /// Inclusive upper bound on the horizon in years. `None` closes the table.
    pub max_years: Option<u32>,
    pub annual_return_percent: Percent,
    pub label: String,
    pub recommendation: String,
}

/// Horizon tiers used to size goal contributions.
pub fn default_tiers() -> Vec<StrategyTier> {
    vec![
        StrategyTier {
            max_years: Some(3),
            annual_return_percent: dec!(7.5),
            label: "Conservative (FD/Debt)".into(),
            recommendation: "For short-term goals, prioritize capital safety. Use Liquid Funds or FDs to match inflation.".into(),
        },
        StrategyTier {
            max_years: Some(7),
            annual_return_percent: dec!(11),
            label: "Balanced (Hybrid Funds)".into(),
            recommendation: "For medium-term goals, mix equity and debt. Aggressive Hybrid Funds can beat inflation by 3-4%.".into(),
        },
        StrategyTier {
            max_years: None,
            annual_return_percent: dec!(14),
            label: "Aggressive (Equity/Stocks)".into(),
            recommendation: "For long-term goals, you must invest in Equity/Stocks to generate real wealth and outpace inflation significantly.".into(),
        },
    ]
}

/// Check that a tier table is usable: non-empty, strictly ascending
/// thresholds, exactly one open-ended tier in last position, no negative
/// returns.
pub fn validate_tiers(tiers: &[StrategyTier]) -> WealthResult<()> {
    let Some(last) = tiers.last() else {
        return Err(WealthError::invalid("tiers", "at least one tier is required"));
    };
    if last.max_years.is_some() {
        return Err(WealthError::invalid(
            "tiers",
            "the last tier must be open-ended (max_years = null)",
        ));
    }

    let mut previous: Option<u32> = None;
    for (i, tier) in tiers.iter().enumerate() {
        if tier.annual_return_percent < Decimal::ZERO {
            return Err(WealthError::invalid(
                format!("tiers[{i}].annual_return_percent"),
                "must be >= 0",
            ));
        }
        if i + 1 < tiers.len() {
            let Some(max) = tier.max_years else {
                return Err(WealthError::invalid(
                    format!("tiers[{i}].max_years"),
                    "only the last tier may be open-ended",
                ));
            };
            if previous.is_some_and(|p| max <= p) {
                return Err(WealthError::invalid(
                    format!("tiers[{i}].max_years"),
                    "thresholds must be strictly ascending",
                ));
            }
            previous = Some(max);
        }
    }
    Ok(())
}

/// Age guard applied to a date of birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgePolicy {
    /// Signup requires at least this age.
    pub min_age: u32,
    /// Anything older is treated as a data-entry mistake.
    pub max_age: u32,
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 120,
        }
    }
}

/// Rate concession for borrowers with a strong credit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditPolicy {
    /// Scores strictly above this earn the discount.
    pub score_threshold: u32,
    /// Percentage points knocked off the bank's base rate.
    pub discount_percent: Percent,
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self {
            score_threshold: 750,
            discount_percent: dec!(0.15),
        }
    }
}

impl CreditPolicy {
    pub fn discount_for(&self, credit_score: u32) -> Percent {
        if credit_score > self.score_threshold {
            self.discount_percent
        } else {
            Decimal::ZERO
        }
    }
}

/// Everything a host may override, loaded whole from a policy file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    pub age: AgePolicy,
    pub credit: CreditPolicy,
    /// Inflation assumed by goal projections when the caller gives none.
    pub default_inflation_percent: Percent,
    /// PPF interest rate credited yearly.
    pub ppf_rate_percent: Percent,
    pub goal_tiers: Vec<StrategyTier>,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            age: AgePolicy::default(),
            credit: CreditPolicy::default(),
            default_inflation_percent: dec!(6.2),
            ppf_rate_percent: dec!(7.1),
            goal_tiers: default_tiers(),
        }
    }
}

impl EnginePolicy {
    /// Reject a policy file whose tables cannot drive a calculation.
    pub fn validate(&self) -> WealthResult<()> {
        validate_tiers(&self.goal_tiers)?;
        if self.age.min_age > self.age.max_age {
            return Err(WealthError::invalid("age.min_age", "must not exceed age.max_age"));
        }
        if self.credit.discount_percent < Decimal::ZERO {
            return Err(WealthError::invalid("credit.discount_percent", "must be >= 0"));
        }
        if self.ppf_rate_percent < Decimal::ZERO {
            return Err(WealthError::invalid("ppf_rate_percent", "must be >= 0"));
        }
        Ok(())
    }
}
