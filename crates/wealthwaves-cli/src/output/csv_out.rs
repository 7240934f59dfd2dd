use serde_json::{Map, Value};
use std::io::{self, Write};

/// Write output as CSV to stdout. A result object is written as
/// `field,value` pairs for its scalar fields; each row list it carries
/// (offers, amortization schedule, PPF years, spending categories) follows
/// as its own table after a blank line.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        tracing::error!(error = %e, "failed to write CSV");
    }
}

pub fn write_csv<W: Write>(mut out: W, value: &Value) -> io::Result<()> {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Array(rows) => write_array_csv(&mut out, rows)?,
        Value::Object(map) => {
            let (tables, scalars): (Vec<_>, Vec<_>) =
                map.iter().partition(|(_, v)| is_row_list(v));

            write_fields_csv(&mut out, &scalars)?;
            for (_, rows) in tables {
                if let Value::Array(rows) = rows {
                    out.write_all(b"\n")?;
                    write_array_csv(&mut out, rows)?;
                }
            }
        }
        other => {
            let mut wtr = csv::Writer::from_writer(&mut out);
            wtr.write_record([&format_csv_value(other)])?;
            wtr.flush()?;
        }
    }

    out.flush()
}

fn is_row_list(value: &Value) -> bool {
    matches!(value, Value::Array(rows) if rows.iter().any(Value::is_object))
}

fn write_fields_csv<W: Write>(out: &mut W, fields: &[(&String, &Value)]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["field", "value"])?;
    for (key, val) in fields {
        wtr.write_record([key.as_str(), &format_csv_value(val)])?;
    }
    wtr.flush()
}

fn write_array_csv<W: Write>(out: &mut W, arr: &[Value]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let Some(Value::Object(first)) = arr.iter().find(|v| v.is_object()) else {
        for item in arr {
            wtr.write_record([&format_csv_value(item)])?;
        }
        return wtr.flush();
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;
    for item in arr {
        if let Value::Object(map) = item {
            wtr.write_record(row_values(&headers, map))?;
        }
    }
    wtr.flush()
}

fn row_values(headers: &[&str], map: &Map<String, Value>) -> Vec<String> {
    headers
        .iter()
        .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
        .collect()
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_csv_value).collect::<Vec<_>>().join("; "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_totals_written_before_rows() {
        let value = json!({
            "result": {
                "monthly_payment": "1000",
                "months": 2,
                "schedule": [
                    {"closing_balance": "1000", "month": 1},
                    {"closing_balance": "0", "month": 2}
                ],
                "total_payable": "2000"
            },
            "warnings": []
        });
        assert_eq!(
            render(&value),
            "field,value\n\
             monthly_payment,1000\n\
             months,2\n\
             total_payable,2000\n\
             \n\
             closing_balance,month\n\
             1000,1\n\
             0,2\n"
        );
    }

    #[test]
    fn test_flat_result_is_field_value_pairs() {
        let value = json!({"result": {"ebitda": "150", "is_profitable": true}});
        assert_eq!(render(&value), "field,value\nebitda,150\nis_profitable,true\n");
    }

    #[test]
    fn test_top_level_array_is_rows() {
        let value = json!([{"code": "IN", "dial_code": "+91"}]);
        assert_eq!(render(&value), "code,dial_code\nIN,+91\n");
    }
}
