use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use wealthwaves_core::goals::projector::{project_goal_with_policy, GoalRequest};
use wealthwaves_core::policy::EnginePolicy;

use crate::input;

/// Arguments for goal / SIP planning
#[derive(Args)]
pub struct GoalArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// What the goal costs today
    #[arg(long, alias = "amount")]
    pub cost: Option<Decimal>,

    /// Years until the goal
    #[arg(long)]
    pub years: Option<u32>,

    /// Annual inflation in percent (policy default when omitted)
    #[arg(long)]
    pub inflation: Option<Decimal>,
}

pub fn run_goal(args: GoalArgs, policy: &EnginePolicy) -> Result<Value, Box<dyn std::error::Error>> {
    let request: GoalRequest = match input::load(args.input.as_deref())? {
        Some(req) => req,
        None => GoalRequest {
            present_cost: args.cost.ok_or("--cost is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            inflation_rate_percent: args.inflation,
        },
    };

    let result = project_goal_with_policy(&request, policy)?;
    Ok(serde_json::to_value(result)?)
}
