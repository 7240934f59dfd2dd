use chrono::Datelike;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use wealthwaves_core::policy::EnginePolicy;
use wealthwaves_core::savings::ppf::{
    project_ppf_with_policy, DepositFrequency, PpfInput, PPF_DEFAULT_TENURE,
};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Frequency {
    Monthly,
    Yearly,
}

impl From<Frequency> for DepositFrequency {
    fn from(f: Frequency) -> Self {
        match f {
            Frequency::Monthly => DepositFrequency::Monthly,
            Frequency::Yearly => DepositFrequency::Yearly,
        }
    }
}

/// Arguments for the PPF projection
#[derive(Args)]
pub struct PpfArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount deposited each period
    #[arg(long)]
    pub installment: Option<Decimal>,

    /// Deposit frequency
    #[arg(long, value_enum, default_value = "yearly")]
    pub frequency: Frequency,

    /// Projection length in years
    #[arg(long, default_value_t = PPF_DEFAULT_TENURE)]
    pub years: u32,

    /// Balance already in the account
    #[arg(long, default_value = "0")]
    pub existing_balance: Decimal,

    /// Year the projection starts from (defaults to the current year)
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Target corpus to check the maturity against
    #[arg(long)]
    pub goal: Option<Decimal>,

    /// Interest rate in percent (policy rate when omitted)
    #[arg(long)]
    pub rate: Option<Decimal>,
}

pub fn run_ppf(args: PpfArgs, policy: &EnginePolicy) -> Result<Value, Box<dyn std::error::Error>> {
    let ppf: PpfInput = match input::load(args.input.as_deref())? {
        Some(p) => p,
        None => PpfInput {
            installment: args.installment
                .ok_or("--installment is required (or provide --input)")?,
            frequency: args.frequency.into(),
            tenure_years: args.years,
            existing_balance: args.existing_balance,
            start_year: args
                .start_year
                .unwrap_or_else(|| chrono::Local::now().year()),
            goal_amount: args.goal,
            annual_rate_percent: args.rate,
        },
    };

    let result = project_ppf_with_policy(&ppf, policy)?;
    Ok(serde_json::to_value(result)?)
}
