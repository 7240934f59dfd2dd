use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use wealthwaves_core::budget::allocation::{allocate_budget, AllocationInput};
use wealthwaves_core::budget::categories::{
    default_budgets, track_spending, update_limit, CategoryBudget, SpendingInput, Transaction,
};
use wealthwaves_core::budget::savings_jar::{apply_jar_transaction, JarAction, JarTransaction};
use wealthwaves_core::budget::student::{plan_student_budget, IncomeSource, StudentInput};

use crate::input;

/// Arguments for the monthly savings allocation
#[derive(Args)]
pub struct AllocateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount saved each month
    #[arg(long)]
    pub savings: Option<Decimal>,

    /// Monthly expenses
    #[arg(long)]
    pub expenses: Option<Decimal>,

    /// Balance already held as a safety net
    #[arg(long, default_value = "0")]
    pub safety_balance: Decimal,
}

/// Arguments for category spending. Transactions come from `--input` or stdin.
#[derive(Args)]
pub struct BudgetArgs {
    /// Path to JSON input file with `transactions` and optional `budgets`
    #[arg(long)]
    pub input: Option<String>,

    /// Override one category limit before tracking, as CATEGORY=AMOUNT
    #[arg(long = "set-limit", value_parser = parse_limit)]
    pub set_limit: Vec<(String, Decimal)>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum JarMove {
    Deposit,
    Withdraw,
}

/// Arguments for a savings jar transaction
#[derive(Args)]
pub struct JarArgs {
    /// Current jar balance
    #[arg(long, default_value = "0")]
    pub balance: Decimal,

    /// Deposit or withdraw
    #[arg(long, value_enum)]
    pub action: JarMove,

    /// Transaction amount
    #[arg(long)]
    pub amount: Decimal,
}

/// Arguments for the student savings planner
#[derive(Args)]
pub struct StudentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Student's age
    #[arg(long)]
    pub age: Option<u32>,

    /// Income source: pocket_money, freelancing or other
    #[arg(long)]
    pub source: Option<String>,

    /// Money received each month
    #[arg(long)]
    pub amount: Option<Decimal>,
}

/// Budget file shape: the default budget lines apply when `budgets` is absent.
#[derive(Deserialize)]
struct SpendingFile {
    #[serde(default)]
    budgets: Option<Vec<CategoryBudget>>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

fn parse_limit(raw: &str) -> Result<(String, Decimal), String> {
    let (category, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT, got '{raw}'"))?;
    let amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    Ok((category.trim().to_string(), amount))
}

pub fn run_allocate(args: AllocateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let allocation: AllocationInput = match input::load(args.input.as_deref())? {
        Some(a) => a,
        None => AllocationInput {
            monthly_savings: args.savings
                .ok_or("--savings is required (or provide --input)")?,
            monthly_expenses: args.expenses
                .ok_or("--expenses is required (or provide --input)")?,
            current_safety_balance: args.safety_balance,
        },
    };

    let result = allocate_budget(&allocation)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_budget(args: BudgetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let file: SpendingFile = input::load(args.input.as_deref())?
        .ok_or("budget needs transactions via --input or stdin")?;

    let mut budgets = file.budgets.unwrap_or_else(default_budgets);
    for (category, limit) in &args.set_limit {
        debug!(category = category.as_str(), %limit, "overriding budget limit");
        budgets = update_limit(&budgets, category, *limit)?;
    }

    let result = track_spending(&SpendingInput {
        budgets,
        transactions: file.transactions,
    })?;
    Ok(serde_json::to_value(result)?)
}

fn student_from_flags(args: &StudentArgs) -> Result<StudentInput, Box<dyn std::error::Error>> {
    Ok(StudentInput {
        age: args.age.ok_or("--age is required (or provide --input)")?,
        source: args
            .source
            .as_deref()
            .ok_or("--source is required (or provide --input)")?
            .parse::<IncomeSource>()?,
        amount: args.amount
            .ok_or("--amount is required (or provide --input)")?,
    })
}

pub fn run_student(args: StudentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let student: StudentInput = match input::load(args.input.as_deref())? {
        Some(s) => s,
        None => student_from_flags(&args)?,
    };

    let result = plan_student_budget(&student)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_jar(args: JarArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let action = match args.action {
        JarMove::Deposit => JarAction::Deposit,
        JarMove::Withdraw => JarAction::Withdraw,
    };
    let tx = JarTransaction {
        action,
        amount: args.amount,
    };
    let balance = apply_jar_transaction(args.balance, &tx)?;

    Ok(json!({
        "result": {
            "previous_balance": args.balance,
            "action": tx.action,
            "amount": tx.amount,
            "balance": balance,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_limit() {
        assert_eq!(
            parse_limit("Food = 2500").unwrap(),
            ("Food".to_string(), dec!(2500))
        );
        assert!(parse_limit("Food").is_err());
        assert!(parse_limit("Food=abc").is_err());
    }

    #[test]
    fn test_student_from_flags() {
        let args = StudentArgs {
            input: None,
            age: Some(16),
            source: Some("pocket_money".into()),
            amount: Some(dec!(2000)),
        };
        let student = student_from_flags(&args).unwrap();
        let value = serde_json::to_value(plan_student_budget(&student).unwrap()).unwrap();
        assert_eq!(value["result"]["savings_amount"], "300");
        assert_eq!(value["result"]["spending_amount"], "1700");

        let missing = StudentArgs {
            source: None,
            ..args
        };
        assert!(student_from_flags(&missing).is_err());
    }

    #[test]
    fn test_jar_withdraw_overdraw_is_error() {
        let args = JarArgs {
            balance: dec!(100),
            action: JarMove::Withdraw,
            amount: dec!(150),
        };
        assert!(run_jar(args).is_err());
    }
}
