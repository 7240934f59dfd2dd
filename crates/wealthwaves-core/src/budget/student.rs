//! Student corner: how much of a student's monthly money to put aside, and
//! where to keep it.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::*;
use crate::WealthResult;

/// Below this age pocket money is saved at the junior rate and the advice
/// points at a minor's account.
pub const ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeSource {
    PocketMoney,
    Freelancing,
    Other,
}

impl IncomeSource {
    pub fn label(&self) -> &'static str {
        match self {
            IncomeSource::PocketMoney => "Pocket Money from Parents",
            IncomeSource::Freelancing => "Freelancing / Gig Work",
            IncomeSource::Other => "Other Sources",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IncomeSource {
    type Err = WealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(|c: char| c == '-' || c == ' ', "_").as_str() {
            "pocket_money" | "pocket" => Ok(IncomeSource::PocketMoney),
            "freelancing" | "freelance" | "gig" => Ok(IncomeSource::Freelancing),
            "other" => Ok(IncomeSource::Other),
            other => Err(WealthError::invalid(
                "source",
                format!("unknown income source '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    pub age: u32,
    pub source: IncomeSource,
    /// Money received each month.
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecommendation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPlan {
    pub savings_rate_percent: Percent,
    /// Whole rupees, rounded half away from zero.
    pub savings_amount: Money,
    pub spending_amount: Money,
    pub recommendations: Vec<StudentRecommendation>,
}

/// 40% when the student earns, 15% for pocket money under 18, 20% otherwise.
pub fn savings_rate_percent(source: IncomeSource, age: u32) -> Percent {
    match source {
        IncomeSource::Freelancing => dec!(40),
        IncomeSource::PocketMoney if age < ADULT_AGE => dec!(15),
        _ => dec!(20),
    }
}

fn recommendation(title: &str, description: &str) -> StudentRecommendation {
    StudentRecommendation {
        title: title.into(),
        description: description.into(),
    }
}

fn recommendations(input: &StudentInput, savings: Money) -> Vec<StudentRecommendation> {
    let mut recs = Vec::new();

    if input.age < ADULT_AGE {
        recs.push(recommendation(
            "Junior/Minor Savings Account",
            "Ask your parents to open a kids' bank account. It's the safest place to start.",
        ));
        recs.push(recommendation(
            "Physical Piggy Bank",
            "Keep small cash handy for immediate needs. It builds a habit of seeing money grow.",
        ));
        return recs;
    }

    if savings >= dec!(500) {
        recs.push(recommendation(
            "Recurring Deposit (RD)",
            "Best for students! Bank auto-deducts ₹500/month. 6-7% safe returns.",
        ));
    } else if savings >= dec!(100) {
        recs.push(recommendation(
            "Digital Gold",
            "You can buy gold for as low as ₹1. Good hedge against inflation.",
        ));
    }

    match input.source {
        IncomeSource::Freelancing if savings > dec!(1000) => recs.push(recommendation(
            "Systematic Investment Plan (SIP)",
            "Start a micro-SIP in an Index Fund. Great for long-term wealth creation.",
        )),
        IncomeSource::Freelancing => {}
        IncomeSource::PocketMoney | IncomeSource::Other => recs.push(recommendation(
            "Penny Funds / High Interest Savings",
            "Keep money in a savings account that offers >4% interest (e.g. Neo Banks).",
        )),
    }

    recs
}

/// Split a student's monthly money into savings and spending and suggest
/// where the savings should go.
pub fn plan_student_budget(input: &StudentInput) -> WealthResult<ComputationOutput<StudentPlan>> {
    if input.amount <= Decimal::ZERO {
        return Err(WealthError::InvalidInput {
            field: "amount".into(),
            reason: "Monthly amount must be positive".into(),
        });
    }

    let rate = savings_rate_percent(input.source, input.age);
    let savings_amount = percent_of(input.amount, rate)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let spending_amount = input.amount - savings_amount;

    let result = StudentPlan {
        savings_rate_percent: rate,
        savings_amount,
        spending_amount,
        recommendations: recommendations(input, savings_amount),
    };

    Ok(with_metadata(
        "Savings = round(amount × rate by income source and age); spending = the rest",
        input,
        Vec::new(),
        result,
    ))
}
