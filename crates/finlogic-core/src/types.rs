use serde::{Deserialize, Serialize};

/// Monetary amounts. IEEE doubles rather than a decimal type: the loan
/// engine reports its degenerate case as `f64::INFINITY`, so money values
/// stay in float space end to end.
pub type Money = f64;

/// Rates as fractions (0.05 = 5%) or percentages (5.0); see [`normalize_rate`].
pub type Rate = f64;

/// Year counts, possibly fractional for sub-year series points
pub type Years = f64;

/// Compounding/payment periods per year
pub type Frequency = u32;

/// Interpret a rate supplied as either a fraction or a percentage.
///
/// Anything above 1 is read as a percentage and divided by 100. A true
/// fractional rate above 100% (1.5 meaning 150%) is indistinguishable from
/// "1.5%" under this rule and is read as the latter; callers wanting such
/// rates must pass the percentage form (150).
pub fn normalize_rate(rate: Rate) -> Rate {
    if rate > 1.0 {
        rate / 100.0
    } else {
        rate
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}
