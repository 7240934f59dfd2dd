#![cfg(feature = "budget")]

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wealthwaves_core::budget::allocation::{allocate_budget, AllocationInput, AllocationStance};
use wealthwaves_core::budget::savings_jar::{apply_jar_transaction, JarAction, JarTransaction};

fn input(savings: Decimal, expenses: Decimal, jar: Decimal) -> AllocationInput {
    AllocationInput {
        monthly_savings: savings,
        monthly_expenses: expenses,
        current_safety_balance: jar,
    }
}

#[test]
fn test_percentages_always_total_one_hundred() {
    for savings in [dec!(0), dec!(15_000), dec!(1_234_567.89)] {
        for (expenses, jar) in [(dec!(0), dec!(0)), (dec!(25_000), dec!(10)), (dec!(25_000), dec!(75_000))] {
            let res = allocate_budget(&input(savings, expenses, jar)).unwrap().result;
            assert_eq!(res.split.total(), dec!(100));
        }
    }
}

#[test]
fn test_jar_deposit_flips_allocation_to_growth() {
    // Expenses 20k → target 60k. Jar at 55k is short until a 5k deposit.
    let before = allocate_budget(&input(dec!(30_000), dec!(20_000), dec!(55_000)))
        .unwrap()
        .result;
    assert_eq!(before.stance, AllocationStance::BuildSafetyNet);
    assert_eq!(before.shortfall, dec!(5_000));

    let jar = apply_jar_transaction(
        dec!(55_000),
        &JarTransaction {
            action: JarAction::Deposit,
            amount: dec!(5_000),
        },
    )
    .unwrap();

    let after = allocate_budget(&input(dec!(30_000), dec!(20_000), jar)).unwrap().result;
    assert_eq!(after.stance, AllocationStance::InvestForGrowth);
    assert_eq!(after.equity_amount, dec!(22_500));
    assert_eq!(after.debt_amount, dec!(6_000));
    assert_eq!(after.safety_amount, dec!(1_500));
}

#[test]
fn test_no_expenses_means_healthy() {
    let res = allocate_budget(&input(dec!(1_000), dec!(0), dec!(0))).unwrap().result;
    assert!(res.is_healthy);
}

#[test]
fn test_student_plan_splits_whole_amount() {
    use wealthwaves_core::budget::student::{plan_student_budget, IncomeSource, StudentInput};

    for (age, source) in [
        (15, IncomeSource::PocketMoney),
        (19, IncomeSource::PocketMoney),
        (23, IncomeSource::Freelancing),
        (20, IncomeSource::Other),
    ] {
        let plan = plan_student_budget(&StudentInput {
            age,
            source,
            amount: dec!(3333),
        })
        .unwrap()
        .result;
        assert_eq!(plan.savings_amount + plan.spending_amount, dec!(3333));
        assert_eq!(plan.savings_amount.scale(), 0);
        assert!(!plan.recommendations.is_empty());
    }
}
