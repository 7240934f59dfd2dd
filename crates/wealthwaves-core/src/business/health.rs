use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::WealthResult;

/// Income-statement lines for a small business. Any line left out of the
/// form is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessInput {
    pub revenue: Money,
    pub cogs: Money,
    pub operating_expenses: Money,
    pub depreciation: Money,
    pub interest_expense: Money,
    pub taxes: Money,
}

/// Profit waterfall. Every level may be negative for a loss-making business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    pub gross_profit: Money,
    pub ebitda: Money,
    pub ebit: Money,
    pub ebt: Money,
    pub net_profit: Money,
    /// COGS plus operating expenses.
    pub operating_cost: Money,
    /// Net profit as a percentage of revenue; absent without revenue.
    pub net_margin_percent: Option<Percent>,
    pub is_profitable: bool,
}

/// Walk revenue down to net profit by straight sequential subtraction.
///
/// Signs are not policed: a negative line is a data-entry inconsistency
/// for the form to flag, not a computation fault.
pub fn compute_business_metrics(
    input: &BusinessInput,
) -> WealthResult<ComputationOutput<BusinessMetrics>> {
    let mut warnings: Vec<String> = Vec::new();

    let gross_profit = checked_sub("gross_profit", input.revenue, input.cogs)?;
    let ebitda = checked_sub("ebitda", gross_profit, input.operating_expenses)?;
    let ebit = checked_sub("ebit", ebitda, input.depreciation)?;
    let ebt = checked_sub("ebt", ebit, input.interest_expense)?;
    let net_profit = checked_sub("net_profit", ebt, input.taxes)?;

    let net_margin_percent = if input.revenue.is_zero() {
        None
    } else {
        let ratio = checked_div("net_margin_percent", net_profit, input.revenue)?;
        Some(checked_mul("net_margin_percent", ratio, Decimal::ONE_HUNDRED)?)
    };

    for (name, value) in [
        ("revenue", input.revenue),
        ("cogs", input.cogs),
        ("operating_expenses", input.operating_expenses),
        ("depreciation", input.depreciation),
        ("interest_expense", input.interest_expense),
        ("taxes", input.taxes),
    ] {
        if value < Decimal::ZERO {
            warnings.push(format!("{name} is negative ({value}); check the entry"));
        }
    }

    let result = BusinessMetrics {
        gross_profit,
        ebitda,
        ebit,
        ebt,
        net_profit,
        operating_cost: checked_add("operating_cost", input.cogs, input.operating_expenses)?,
        net_margin_percent,
        is_profitable: net_profit > Decimal::ZERO,
    };

    Ok(with_metadata(
        "Revenue − COGS − OpEx − D&A − interest − tax",
        input,
        warnings,
        result,
    ))
}
