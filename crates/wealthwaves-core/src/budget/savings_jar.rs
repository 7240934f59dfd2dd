use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::Money;
use crate::WealthResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JarAction {
    Deposit,
    Withdraw,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarTransaction {
    pub action: JarAction,
    pub amount: Money,
}

/// Apply a deposit or withdrawal to the jar and return the new balance.
pub fn apply_jar_transaction(balance: Money, tx: &JarTransaction) -> WealthResult<Money> {
    if balance < Decimal::ZERO {
        return Err(WealthError::invalid("balance", "Jar balance cannot be negative"));
    }
    if tx.amount <= Decimal::ZERO {
        return Err(WealthError::validation("amount", "Please enter a valid positive amount."));
    }

    match tx.action {
        JarAction::Deposit => Ok(balance + tx.amount),
        JarAction::Withdraw if tx.amount > balance => Err(WealthError::FinancialImpossibility(
            "Insufficient balance in Jar.".into(),
        )),
        JarAction::Withdraw => Ok(balance - tx.amount),
    }
}
