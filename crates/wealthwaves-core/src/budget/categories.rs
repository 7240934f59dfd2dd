//! Monthly spending against per-category limits.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::*;
use crate::WealthResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub category: String,
    pub limit: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: Money,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingInput {
    pub budgets: Vec<CategoryBudget>,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    /// Whole percent of the limit used, capped at 100.
    pub used_percent: Decimal,
    pub over_budget: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingReport {
    pub categories: Vec<CategorySpending>,
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    /// Expense categories with no matching budget line.
    pub unmatched_categories: Vec<String>,
    pub unmatched_spent: Money,
}

/// Budget lines a new user starts with.
pub fn default_budgets() -> Vec<CategoryBudget> {
    [
        ("Food", dec!(2000)),
        ("Transport", dec!(1000)),
        ("Utilities", dec!(1500)),
        ("Entertainment", dec!(1000)),
        ("Shopping", dec!(3000)),
    ]
    .into_iter()
    .map(|(category, limit)| CategoryBudget {
        category: category.into(),
        limit,
    })
    .collect()
}

/// Replace one category's limit. Non-positive limits are refused, as the
/// budget editor does.
pub fn update_limit(
    budgets: &[CategoryBudget],
    category: &str,
    new_limit: Money,
) -> WealthResult<Vec<CategoryBudget>> {
    if new_limit <= Decimal::ZERO {
        return Err(WealthError::validation("limit", "Budget limit must be a positive amount"));
    }
    if !budgets.iter().any(|b| b.category.eq_ignore_ascii_case(category)) {
        return Err(WealthError::invalid(
            "category",
            format!("no budget line named '{category}'"),
        ));
    }
    Ok(budgets
        .iter()
        .map(|b| {
            if b.category.eq_ignore_ascii_case(category) {
                CategoryBudget {
                    category: b.category.clone(),
                    limit: new_limit,
                }
            } else {
                b.clone()
            }
        })
        .collect())
}

/// Aggregate expense transactions into their budget lines (case-insensitive
/// category match) and report usage per line and overall.
pub fn track_spending(input: &SpendingInput) -> WealthResult<ComputationOutput<SpendingReport>> {
    let mut warnings: Vec<String> = Vec::new();

    for budget in &input.budgets {
        if budget.limit <= Decimal::ZERO {
            return Err(WealthError::InvalidInput {
                field: format!("budgets[{}].limit", budget.category),
                reason: "Budget limit must be positive".into(),
            });
        }
    }

    let mut spent = vec![Decimal::ZERO; input.budgets.len()];
    let mut unmatched_categories: Vec<String> = Vec::new();
    let mut unmatched_spent = Decimal::ZERO;

    for tx in input
        .transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
    {
        if tx.amount < Decimal::ZERO {
            return Err(WealthError::invalid("transactions.amount", "Amounts must be >= 0"));
        }
        match input
            .budgets
            .iter()
            .position(|b| b.category.eq_ignore_ascii_case(&tx.category))
        {
            Some(idx) => spent[idx] += tx.amount,
            None => {
                unmatched_spent += tx.amount;
                if !unmatched_categories
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(&tx.category))
                {
                    unmatched_categories.push(tx.category.clone());
                }
            }
        }
    }

    let categories: Vec<CategorySpending> = input
        .budgets
        .iter()
        .zip(spent.iter())
        .map(|(budget, &spent)| {
            let used = (spent / budget.limit * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            CategorySpending {
                category: budget.category.clone(),
                limit: budget.limit,
                spent,
                remaining: (budget.limit - spent).max(Decimal::ZERO),
                used_percent: used.min(Decimal::ONE_HUNDRED),
                over_budget: spent > budget.limit,
            }
        })
        .collect();

    for line in categories.iter().filter(|c| c.over_budget) {
        warnings.push(format!("{} is over budget by {}", line.category, line.spent - line.limit));
    }

    let total_budget: Money = input.budgets.iter().map(|b| b.limit).sum();
    let total_spent: Money = spent.iter().copied().sum();

    let report = SpendingReport {
        categories,
        total_budget,
        total_spent,
        total_remaining: (total_budget - total_spent).max(Decimal::ZERO),
        unmatched_categories,
        unmatched_spent,
    };

    Ok(with_metadata(
        "Expense transactions summed per budget category (case-insensitive)",
        &serde_json::json!({
            "budget_lines": input.budgets.len(),
            "transactions": input.transactions.len(),
        }),
        warnings,
        report,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: Decimal) -> Transaction {
        Transaction {
            amount,
            category: category.into(),
            kind: TransactionKind::Expense,
            description: None,
        }
    }

    #[test]
    fn test_spending_matched_case_insensitively() {
        let input = SpendingInput {
            budgets: default_budgets(),
            transactions: vec![
                expense("food", dec!(500)),
                expense("FOOD", dec!(250)),
                expense("Transport", dec!(1200)),
                Transaction {
                    amount: dec!(50_000),
                    category: "Salary".into(),
                    kind: TransactionKind::Income,
                    description: None,
                },
            ],
        };
        let out = track_spending(&input).unwrap();
        let food = &out.result.categories[0];
        assert_eq!(food.spent, dec!(750));
        assert_eq!(food.remaining, dec!(1250));
        assert_eq!(food.used_percent, dec!(38));

        let transport = &out.result.categories[1];
        assert!(transport.over_budget);
        assert_eq!(transport.remaining, Decimal::ZERO);
        assert_eq!(transport.used_percent, dec!(100));
        assert_eq!(out.warnings.len(), 1);

        assert_eq!(out.result.total_budget, dec!(8500));
        assert_eq!(out.result.total_spent, dec!(1950));
        assert_eq!(out.result.total_remaining, dec!(6550));
    }

    #[test]
    fn test_unknown_categories_reported() {
        let input = SpendingInput {
            budgets: default_budgets(),
            transactions: vec![expense("Travel", dec!(900)), expense("travel", dec!(100))],
        };
        let report = track_spending(&input).unwrap().result;
        assert_eq!(report.unmatched_categories, vec!["Travel".to_string()]);
        assert_eq!(report.unmatched_spent, dec!(1000));
        assert_eq!(report.total_spent, Decimal::ZERO);
    }

    #[test]
    fn test_update_limit() {
        let updated = update_limit(&default_budgets(), "shopping", dec!(4500)).unwrap();
        assert_eq!(updated[4].limit, dec!(4500));
        assert_eq!(updated[0].limit, dec!(2000));
    }

    #[test]
    fn test_update_limit_rejects_non_positive() {
        let err = update_limit(&default_budgets(), "Food", Decimal::ZERO).unwrap_err();
        assert!(matches!(err, WealthError::Validation { .. }));
    }
}
