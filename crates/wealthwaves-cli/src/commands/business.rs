use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use wealthwaves_core::business::health::{compute_business_metrics, BusinessInput};

use crate::input;

/// Arguments for business health metrics. Omitted cost lines count as zero.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct BusinessArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Revenue
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Cost of goods sold
    #[arg(long)]
    pub cogs: Option<Decimal>,

    /// Operating expenses
    #[arg(long, alias = "opex")]
    pub operating_expenses: Option<Decimal>,

    /// Depreciation and amortisation
    #[arg(long, alias = "da")]
    pub depreciation: Option<Decimal>,

    /// Interest expense
    #[arg(long)]
    pub interest_expense: Option<Decimal>,

    /// Taxes
    #[arg(long)]
    pub taxes: Option<Decimal>,
}

pub fn run_business(args: BusinessArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let business: BusinessInput = match input::load(args.input.as_deref())? {
        Some(b) => b,
        None => BusinessInput {
            revenue: args.revenue
                .ok_or("--revenue is required (or provide --input)")?,
            cogs: args.cogs.unwrap_or_default(),
            operating_expenses: args.operating_expenses.unwrap_or_default(),
            depreciation: args.depreciation.unwrap_or_default(),
            interest_expense: args.interest_expense.unwrap_or_default(),
            taxes: args.taxes.unwrap_or_default(),
        },
    };

    let result = compute_business_metrics(&business)?;
    Ok(serde_json::to_value(result)?)
}
