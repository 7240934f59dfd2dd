use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::loans::amortization::LoanRequest;
use crate::policy::CreditPolicy;
use crate::time_value::level_payment;
use crate::types::*;
use crate::WealthResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Processing fee as banks advertise it: nothing, a flat amount, or a share
/// of the loan. Round-trips through its display form ("Nil", "₹3,000",
/// "0.50%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FeeDescriptor {
    Nil,
    Flat(Money),
    Percent(Percent),
}

impl FeeDescriptor {
    /// Fee charged on `principal`.
    pub fn amount_on(&self, principal: Money) -> WealthResult<Money> {
        match self {
            FeeDescriptor::Nil => Ok(Decimal::ZERO),
            FeeDescriptor::Flat(amount) => Ok(*amount),
            FeeDescriptor::Percent(pct) => percent_of(principal, *pct),
        }
    }
}

impl FromStr for FeeDescriptor {
    type Err = WealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed.eq_ignore_ascii_case("none")
        {
            return Ok(FeeDescriptor::Nil);
        }

        // Only the rupee sign, grouping commas and spaces are decoration.
        let parse = |text: &str| -> WealthResult<Decimal> {
            let cleaned: String = text
                .chars()
                .filter(|c| *c != '₹' && *c != ',' && !c.is_whitespace())
                .collect();
            if cleaned.is_empty()
                || cleaned
                    .chars()
                    .any(|c| !(c.is_ascii_digit() || c == '.' || c == '-'))
            {
                return Err(WealthError::InvalidInput {
                    field: "fee".into(),
                    reason: format!("cannot read a fee from '{s}'"),
                });
            }
            let value = Decimal::from_str(&cleaned).map_err(|_| WealthError::InvalidInput {
                field: "fee".into(),
                reason: format!("cannot read a fee from '{s}'"),
            })?;
            if value < Decimal::ZERO {
                return Err(WealthError::invalid("fee", "fee cannot be negative"));
            }
            Ok(value)
        };

        if let Some(pct) = trimmed.strip_suffix('%') {
            let value = parse(pct)?;
            return Ok(if value.is_zero() {
                FeeDescriptor::Nil
            } else {
                FeeDescriptor::Percent(value)
            });
        }

        let value = parse(trimmed)?;
        Ok(if value.is_zero() {
            FeeDescriptor::Nil
        } else {
            FeeDescriptor::Flat(value)
        })
    }
}

impl TryFrom<String> for FeeDescriptor {
    type Error = WealthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FeeDescriptor> for String {
    fn from(value: FeeDescriptor) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FeeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeDescriptor::Nil => write!(f, "Nil"),
            FeeDescriptor::Flat(amount) => write!(f, "₹{}", group_thousands(*amount)),
            FeeDescriptor::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

fn group_thousands(amount: Money) -> String {
    let text = amount.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// Public-sector or private bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Public,
    Private,
}

/// One bank's headline offer for a loan product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOffer {
    pub bank_id: String,
    pub bank_name: String,
    pub base_rate_percent: Percent,
    pub fee: FeeDescriptor,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
}

/// An offer priced for a specific borrower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOffer {
    #[serde(flatten)]
    pub offer: BankOffer,
    pub effective_rate_percent: Percent,
    pub emi: Money,
    pub total_interest: Money,
    pub processing_fee_amount: Money,
    /// Everything repaid plus the processing fee.
    pub total_cost: Money,
    pub is_best: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferRankingInput {
    pub offers: Vec<BankOffer>,
    pub loan: LoanRequest,
    pub credit_score: u32,
}

#[derive(Serialize)]
struct RankingAssumptions<'a> {
    loan: &'a LoanRequest,
    credit_score: u32,
    rate_discount_percent: Percent,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Price every offer for the borrower and order them cheapest EMI first.
pub fn rank_offers(
    offers: &[BankOffer],
    loan: &LoanRequest,
    credit_score: u32,
) -> WealthResult<ComputationOutput<Vec<RankedOffer>>> {
    rank_offers_with_policy(offers, loan, credit_score, &CreditPolicy::default())
}

pub fn rank_offers_with_policy(
    offers: &[BankOffer],
    loan: &LoanRequest,
    credit_score: u32,
    policy: &CreditPolicy,
) -> WealthResult<ComputationOutput<Vec<RankedOffer>>> {
    loan.validate()?;
    let mut warnings: Vec<String> = Vec::new();

    let discount = policy.discount_for(credit_score);
    let n = loan.months();
    let months = Decimal::from(n);

    let mut ranked = Vec::with_capacity(offers.len());
    for offer in offers {
        if offer.base_rate_percent < Decimal::ZERO {
            return Err(WealthError::InvalidInput {
                field: format!("offers[{}].base_rate_percent", offer.bank_id),
                reason: "Base rate cannot be negative".into(),
            });
        }

        let effective_rate_percent = (offer.base_rate_percent - discount).max(Decimal::ZERO);
        if effective_rate_percent.is_zero() {
            warnings.push(format!(
                "{}: effective rate is zero, EMI is straight-line",
                offer.bank_name
            ));
        }

        let emi = level_payment(loan.principal, monthly_rate(effective_rate_percent), n)?;
        let total_payable = checked_mul("total_payable", emi, months)?;
        let processing_fee_amount = offer.fee.amount_on(loan.principal)?;

        ranked.push(RankedOffer {
            offer: offer.clone(),
            effective_rate_percent,
            emi,
            total_interest: total_payable - loan.principal,
            processing_fee_amount,
            total_cost: checked_add("total_cost", total_payable, processing_fee_amount)?,
            is_best: false,
        });
    }

    // Vec::sort_by is stable, so equal EMIs keep their input order.
    ranked.sort_by(|a, b| a.emi.cmp(&b.emi));
    if let Some(best) = ranked.first_mut() {
        best.is_best = true;
    }

    let assumptions = RankingAssumptions {
        loan,
        credit_score,
        rate_discount_percent: discount,
    };

    Ok(with_metadata(
        "Credit-score adjusted reducing-balance EMI per offer, sorted ascending (stable)",
        &assumptions,
        warnings,
        ranked,
    ))
}
