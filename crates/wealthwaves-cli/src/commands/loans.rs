use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use wealthwaves_core::loans::amortization::{compute_amortization, LoanRequest};
use wealthwaves_core::loans::catalog::{default_offers, LoanProduct};
use wealthwaves_core::loans::offers::{rank_offers_with_policy, OfferRankingInput};
use wealthwaves_core::policy::EnginePolicy;

use crate::input;

/// Arguments for the EMI / amortization calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long, alias = "tenure")]
    pub years: Option<u32>,

    /// Processing fee in percent of the principal
    #[arg(long)]
    pub fee: Option<Decimal>,

    /// Include the month-by-month schedule
    #[arg(long)]
    pub schedule: bool,
}

/// Arguments for bank offer ranking
#[derive(Args)]
pub struct OffersArgs {
    /// Path to JSON input file with `offers`, `loan` and `credit_score`
    #[arg(long)]
    pub input: Option<String>,

    /// Loan product whose built-in offers are ranked
    #[arg(long, default_value = "home")]
    pub product: String,

    /// Loan amount
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Tenure in years
    #[arg(long, alias = "tenure")]
    pub years: Option<u32>,

    /// Borrower credit score
    #[arg(long, default_value_t = 750)]
    pub credit_score: u32,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: LoanRequest = match input::load(args.input.as_deref())? {
        Some(req) => req,
        None => {
            let mut req = LoanRequest::new(
                args.principal
                    .ok_or("--principal is required (or provide --input)")?,
                args.rate.ok_or("--rate is required (or provide --input)")?,
                args.years.ok_or("--years is required (or provide --input)")?,
            );
            req.processing_fee_percent = args.fee.unwrap_or_default();
            req.include_schedule = args.schedule;
            req
        }
    };

    let result = compute_amortization(&request)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_offers(args: OffersArgs, policy: &EnginePolicy) -> Result<Value, Box<dyn std::error::Error>> {
    let ranking: OfferRankingInput = match input::load(args.input.as_deref())? {
        Some(ranking) => ranking,
        None => {
            let product: LoanProduct = args.product.parse()?;
            OfferRankingInput {
                offers: default_offers(product),
                loan: LoanRequest::new(
                    args.principal
                        .ok_or("--principal is required (or provide --input)")?,
                    Decimal::ZERO,
                    args.years.ok_or("--years is required (or provide --input)")?,
                ),
                credit_score: args.credit_score,
            }
        }
    };

    let result = rank_offers_with_policy(
        &ranking.offers,
        &ranking.loan,
        ranking.credit_score,
        &policy.credit,
    )?;
    Ok(serde_json::to_value(result)?)
}
