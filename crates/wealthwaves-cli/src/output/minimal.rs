use serde_json::Value;

/// The one figure a user asked for, in order of priority.
const HEADLINE_KEYS: [&str; 10] = [
    "monthly_payment",
    "required_monthly_contribution",
    "maturity",
    "net_profit",
    "investable_amount",
    "savings_amount",
    "total_spent",
    "balance",
    "age",
    "valid",
];

/// Print just the key answer value from the output. Ranked offers print the
/// best offer's bank and EMI.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result_obj {
        Value::Object(map) => {
            for key in &HEADLINE_KEYS {
                if let Some(val) = map.get(*key) {
                    if !val.is_null() {
                        println!("{}", format_minimal(val));
                        return;
                    }
                }
            }
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val));
                return;
            }
            println!("{{}}");
        }
        Value::Array(rows) => match rows.first() {
            Some(Value::Object(best)) if best.contains_key("emi") => {
                let bank = best.get("bank_name").map(format_minimal).unwrap_or_default();
                let emi = best.get("emi").map(format_minimal).unwrap_or_default();
                println!("{}: {}", bank, emi);
            }
            Some(first) => println!("{}", format_minimal(first)),
            None => println!("(empty)"),
        },
        other => println!("{}", format_minimal(other)),
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
