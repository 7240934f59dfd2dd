use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

/// Round every fractional decimal in the output to `dp` places, half away
/// from zero. Figures are serialised as strings, so only strings that parse
/// as a decimal with a fractional part are touched; version strings, phone
/// numbers and labels pass through unchanged.
pub fn round_decimals(value: &mut Value, dp: u32) {
    match value {
        Value::String(s) => {
            if let Some(rounded) = round_str(s, dp) {
                *s = rounded;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(|v| round_decimals(v, dp)),
        Value::Object(map) => map.values_mut().for_each(|v| round_decimals(v, dp)),
        _ => {}
    }
}

fn round_str(s: &str, dp: u32) -> Option<String> {
    if !s.contains('.') {
        return None;
    }
    let d = Decimal::from_str(s).ok()?;
    Some(
        d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
    )
}
