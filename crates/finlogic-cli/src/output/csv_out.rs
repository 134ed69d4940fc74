use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// A result carrying a `points` series emits the series as rows (the chart
/// feed: period,balance,capital,interest); scalar results emit field/value
/// pairs. Values stay raw numbers so charting tools can consume them.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);
            match result.get("points") {
                Some(Value::Array(points)) if !points.is_empty() => {
                    write_rows(&mut wtr, points);
                }
                _ => {
                    if let Value::Object(fields) = result {
                        let _ = wtr.write_record(["field", "value"]);
                        for (key, val) in fields.iter().filter(|(_, v)| !v.is_array()) {
                            let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                        }
                    }
                }
            }
        }
        Value::Array(arr) => {
            write_rows(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
