//! Indicative loan products and the bank offers the loans page compares.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WealthError;
use crate::loans::offers::{BankOffer, FeeDescriptor, Sector};
use crate::types::Percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanProduct {
    Home,
    Personal,
    Car,
    Education,
    Gold,
    /// Loan against property.
    Property,
}

impl LoanProduct {
    pub const ALL: [LoanProduct; 6] = [
        LoanProduct::Home,
        LoanProduct::Personal,
        LoanProduct::Car,
        LoanProduct::Education,
        LoanProduct::Gold,
        LoanProduct::Property,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoanProduct::Home => "Home Loan",
            LoanProduct::Personal => "Personal Loan",
            LoanProduct::Car => "Car Loan",
            LoanProduct::Education => "Education Loan",
            LoanProduct::Gold => "Gold Loan",
            LoanProduct::Property => "Loan Against Property",
        }
    }

    /// Market range of headline rates, low to high.
    pub fn rate_range(&self) -> (Percent, Percent) {
        match self {
            LoanProduct::Home => (dec!(8.35), dec!(9.5)),
            LoanProduct::Personal => (dec!(10.5), dec!(14)),
            LoanProduct::Car => (dec!(8.7), dec!(11)),
            LoanProduct::Education => (dec!(9.0), dec!(12)),
            LoanProduct::Gold => (dec!(7.5), dec!(9.0)),
            LoanProduct::Property => (dec!(9.5), dec!(11)),
        }
    }
}

impl FromStr for LoanProduct {
    type Err = WealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(LoanProduct::Home),
            "personal" => Ok(LoanProduct::Personal),
            "car" => Ok(LoanProduct::Car),
            "education" => Ok(LoanProduct::Education),
            "gold" => Ok(LoanProduct::Gold),
            "property" | "mortgage" | "lap" => Ok(LoanProduct::Property),
            other => Err(WealthError::invalid(
                "product",
                format!("unknown loan product '{other}'"),
            )),
        }
    }
}

fn offer(
    id: &str,
    name: &str,
    rate: Decimal,
    fee: FeeDescriptor,
    features: &[&str],
    sector: Sector,
) -> BankOffer {
    BankOffer {
        bank_id: id.into(),
        bank_name: name.into(),
        base_rate_percent: rate,
        fee,
        features: features.iter().map(|f| f.to_string()).collect(),
        sector: Some(sector),
    }
}

/// Current headline offers for a product. Products without a dedicated
/// panel share the general list.
pub fn default_offers(product: LoanProduct) -> Vec<BankOffer> {
    use FeeDescriptor::{Flat, Nil, Percent as Pct};
    use Sector::{Private, Public};

    match product {
        LoanProduct::Home => vec![
            offer("sbi", "SBI", dec!(8.40), Nil, &["No Hidden Charges", "Overdraft Facility"], Public),
            offer("hdfc", "HDFC Bank", dec!(8.50), Flat(dec!(3000)), &["Doorstep Service", "Quick Approval"], Private),
            offer("icici", "ICICI Bank", dec!(8.60), Pct(dec!(0.50)), &["Pre-approved offers", "Part-payment allowed"], Private),
            offer("kotak", "Kotak Mahindra", dec!(8.70), Pct(dec!(0.25)), &["Digital Process", "Tax Benefits"], Private),
            offer("axis", "Axis Bank", dec!(8.75), Flat(dec!(10000)), &["12 EMI Waiver*", "Top-up available"], Private),
        ],
        LoanProduct::Personal => vec![
            offer("hdfc", "HDFC Bank", dec!(10.50), Pct(dec!(1.50)), &["10 Second Disbursal", "Flexible Tenure"], Private),
            offer("icici", "ICICI Bank", dec!(10.75), Pct(dec!(1.25)), &["No Collateral", "Minimal Docs"], Private),
            offer("sbi", "SBI", dec!(11.00), Pct(dec!(1.00)), &["Low Rates", "Daily reducing balance"], Public),
        ],
        LoanProduct::Car => vec![
            offer("sbi", "SBI", dec!(8.65), Nil, &["On-road funding", "Longest Tenure"], Public),
            offer("axis", "Axis Bank", dec!(8.90), Flat(dec!(4000)), &["100% Funding", "Fast Track"], Private),
            offer("hdfc", "HDFC Bank", dec!(9.00), Pct(dec!(0.50)), &["ZipDrive Instant", "Foreclosure allowed"], Private),
        ],
        LoanProduct::Education | LoanProduct::Gold | LoanProduct::Property => vec![
            offer("sbi", "State Bank of India", dec!(9.50), Pct(dec!(0.50)), &["Trusted", "Low Processing Fee"], Public),
            offer("bob", "Bank of Baroda", dec!(9.60), Pct(dec!(0.75)), &["Quick Processing", "Digital"], Public),
            offer("indus", "IndusInd Bank", dec!(10.00), Pct(dec!(1.00)), &["Minimal Paperwork", "Flexible"], Private),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_has_offers() {
        for product in LoanProduct::ALL {
            assert!(!default_offers(product).is_empty(), "{product:?}");
        }
    }

    #[test]
    fn test_rate_ranges_are_ordered() {
        for product in LoanProduct::ALL {
            let (lo, hi) = product.rate_range();
            assert!(lo < hi, "{}", product.label());
        }
    }

    #[test]
    fn test_parse_product_aliases() {
        assert_eq!("Mortgage".parse::<LoanProduct>().unwrap(), LoanProduct::Property);
        assert_eq!("home".parse::<LoanProduct>().unwrap(), LoanProduct::Home);
        assert!("boat".parse::<LoanProduct>().is_err());
    }
}
