use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::*;
use crate::WealthResult;

/// Months of expenses the safety balance must cover to count as healthy.
pub const EMERGENCY_FUND_MONTHS: u32 = 3;

/// Share of monthly savings sent to each bucket, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSplit {
    pub safety_percent: Percent,
    pub debt_percent: Percent,
    pub equity_percent: Percent,
}

impl AllocationSplit {
    pub fn total(&self) -> Percent {
        self.safety_percent + self.debt_percent + self.equity_percent
    }
}

/// Split while the emergency fund is still short.
pub const BUILDING_SAFETY_NET: AllocationSplit = AllocationSplit {
    safety_percent: dec!(30),
    debt_percent: dec!(40),
    equity_percent: dec!(30),
};

/// Split once the emergency fund is covered.
pub const HEALTHY_SAFETY_NET: AllocationSplit = AllocationSplit {
    safety_percent: dec!(5),
    debt_percent: dec!(20),
    equity_percent: dec!(75),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStance {
    /// Safety balance below target: secure bank savings first.
    BuildSafetyNet,
    /// Safety balance covers the target: invest for growth.
    InvestForGrowth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationInput {
    pub monthly_savings: Money,
    pub monthly_expenses: Money,
    /// Balance already set aside (the savings jar).
    #[serde(default)]
    pub current_safety_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub monthly_savings: Money,
    pub emergency_fund_target: Money,
    pub current_safety_balance: Money,
    pub is_healthy: bool,
    /// How far the safety balance is below target (zero when healthy).
    pub shortfall: Money,
    pub stance: AllocationStance,
    pub split: AllocationSplit,
    pub safety_amount: Money,
    pub debt_amount: Money,
    pub equity_amount: Money,
    /// Savings to put into debt and equity: everything once the safety net
    /// is healthy, otherwise what is left after the safety bucket.
    pub investable_amount: Money,
}

/// Pick the split for the emergency-fund state and apply it to monthly
/// savings.
pub fn allocate_budget(input: &AllocationInput) -> WealthResult<ComputationOutput<BudgetAllocation>> {
    for (field, value) in [
        ("monthly_savings", input.monthly_savings),
        ("monthly_expenses", input.monthly_expenses),
        ("current_safety_balance", input.current_safety_balance),
    ] {
        if value < Decimal::ZERO {
            return Err(WealthError::InvalidInput {
                field: field.into(),
                reason: "must be >= 0".into(),
            });
        }
    }

    let target = checked_mul(
        "monthly_expenses",
        input.monthly_expenses,
        Decimal::from(EMERGENCY_FUND_MONTHS),
    )?;
    let is_healthy = input.current_safety_balance >= target;
    let (split, stance) = if is_healthy {
        (HEALTHY_SAFETY_NET, AllocationStance::InvestForGrowth)
    } else {
        (BUILDING_SAFETY_NET, AllocationStance::BuildSafetyNet)
    };

    let savings = input.monthly_savings;
    let safety_amount = percent_of(savings, split.safety_percent)?;
    let debt_amount = percent_of(savings, split.debt_percent)?;
    let equity_amount = percent_of(savings, split.equity_percent)?;
    let investable_amount = if is_healthy {
        savings
    } else {
        savings - safety_amount
    };

    let result = BudgetAllocation {
        monthly_savings: savings,
        emergency_fund_target: target,
        current_safety_balance: input.current_safety_balance,
        is_healthy,
        shortfall: (target - input.current_safety_balance).max(Decimal::ZERO),
        stance,
        split,
        safety_amount,
        debt_amount,
        equity_amount,
        investable_amount,
    };

    Ok(with_metadata(
        "Emergency fund = 3× monthly expenses; fixed safety/debt/equity split by fund health",
        input,
        Vec::new(),
        result,
    ))
}
