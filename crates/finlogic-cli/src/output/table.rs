use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_money, is_money_field};

/// Format output as tables using the tabled crate.
///
/// Scalar result fields go in a Field/Value table with currency rendering;
/// an embedded series prints as its own rows table underneath, followed by
/// warnings and methodology from the envelope.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", value);
        return;
    };

    let Some(result) = envelope.get("result") else {
        print_fields(value);
        return;
    };

    if let Value::Object(result_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in result_map.iter().filter(|(_, v)| !v.is_array()) {
            builder.push_record([key.as_str(), &render_cell(key, val)]);
        }
        println!("{}", Table::from(builder));

        for (key, val) in result_map.iter() {
            if let Value::Array(points) = val {
                println!("\n{}:", key);
                print_rows(points);
            }
        }
    } else {
        print_fields(result);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                if let Value::String(s) = warning {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_fields(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &render_cell(key, val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_rows(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", item);
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map_or(String::new(), |v| render_cell(h, v)))
                .collect();
            builder.push_record(row);
        }
    }

    println!("{}", Table::from(builder));
}

fn render_cell(key: &str, value: &Value) -> String {
    match value {
        Value::Number(n) if is_money_field(key) => {
            n.as_f64().map_or_else(|| n.to_string(), format_money)
        }
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        // serde_json renders non-finite sentinels as null
        Value::Null => "inf".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
