pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Result fields rendered as currency in table output.
const MONEY_FIELDS: [&str; 10] = [
    "future_value",
    "total_interest",
    "total_capital",
    "emi",
    "total_payments",
    "total_interest_paid",
    "balance",
    "capital",
    "interest",
    "final_balance",
];

pub fn is_money_field(key: &str) -> bool {
    MONEY_FIELDS.contains(&key)
}

/// Render a monetary amount with exact cents, e.g. "$31,998.32".
///
/// Rounding goes through `Decimal` so display never shows float dust;
/// non-finite sentinels print as-is ("inf").
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = Decimal::from_f64_retain(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let raw = format!("{:.2}", cents);
    let (whole, frac) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(31_998.322_921), "$31,998.32");
        assert_eq!(format_money(2_651.635), "$2,651.64");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1_234_567.899), "$1,234,567.90");
        assert_eq!(format_money(-250.5), "-$250.50");
        assert_eq!(format_money(f64::INFINITY), "inf");
    }
}
