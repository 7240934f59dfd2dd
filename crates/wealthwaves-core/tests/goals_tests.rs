use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use wealthwaves_core::goals::projector::{project_goal, project_goal_with_policy, GoalRequest};
use wealthwaves_core::policy::EnginePolicy;

fn goal(years: u32) -> GoalRequest {
    GoalRequest {
        present_cost: dec!(100_000),
        years,
        inflation_rate_percent: Some(dec!(6.2)),
    }
}

#[test]
fn test_tier_labels_across_boundaries() {
    let labels: Vec<String> = [3u32, 4, 7, 8]
        .iter()
        .map(|&y| project_goal(&goal(y)).unwrap().result.strategy_label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Conservative (FD/Debt)",
            "Balanced (Hybrid Funds)",
            "Balanced (Hybrid Funds)",
            "Aggressive (Equity/Stocks)",
        ]
    );
}

#[test]
fn test_future_cost_independent_of_tier() {
    // Crossing a tier boundary changes the SIP, never the inflated target
    let three = project_goal(&goal(3)).unwrap().result;
    let policy_with_flat_tiers = {
        let mut p = EnginePolicy::default();
        for tier in &mut p.goal_tiers {
            tier.annual_return_percent = dec!(1);
        }
        p
    };
    let flat = project_goal_with_policy(&goal(3), &policy_with_flat_tiers).unwrap().result;
    assert_eq!(three.future_cost, flat.future_cost);
    assert!(three.required_monthly_contribution < flat.required_monthly_contribution);
}

#[test]
fn test_policy_default_inflation() {
    let mut policy = EnginePolicy::default();
    policy.default_inflation_percent = dec!(0);
    let req = GoalRequest {
        present_cost: dec!(100_000),
        years: 2,
        inflation_rate_percent: None,
    };
    let res = project_goal_with_policy(&req, &policy).unwrap().result;
    assert_eq!(res.future_cost, dec!(100_000));
}

#[test]
fn test_goal_request_json_round_trip_through_engine() {
    let req: GoalRequest =
        serde_json::from_str(r#"{"present_cost": "50000", "years": 5, "inflation_rate_percent": "6.2"}"#)
            .unwrap();
    let res = project_goal(&req).unwrap().result;
    assert!((res.future_cost - dec!(67544.90)).abs() < dec!(0.01));
    assert_eq!(res.assumed_annual_return_percent, dec!(11));
}
