use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinLogicError;
use crate::types::{
    normalize_rate, with_metadata, ComputationOutput, Frequency, Money, Rate, Years,
};
use crate::FinLogicResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a future-value projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureValueInput {
    /// Initial deposit
    pub principal: Money,
    /// Annual rate, fraction (0.05) or percentage (5)
    pub annual_rate: Rate,
    /// Term in years
    pub term_years: Years,
    /// Compounding periods per year (conventionally 1, 2, 4, 12, or 365)
    pub frequency: Frequency,
    /// Amount added at the end of each compounding period
    #[serde(default)]
    pub contribution: Money,
}

/// Output of `compute_future_value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureValueOutput {
    pub future_value: Money,
    pub total_interest: Money,
    /// Principal plus every contribution: what the saver actually paid in
    pub total_capital: Money,
    pub periodic_rate: Rate,
    pub total_periods: f64,
}

// ---------------------------------------------------------------------------
// Closed form
// ---------------------------------------------------------------------------

/// Future value of a principal plus end-of-period contributions.
///
/// `fv = P(1+i)^N + PMT·((1+i)^N − 1)/i` with `i = r/n` and `N = t·n`;
/// a periodic rate of exactly zero degrades to pure summation instead of
/// dividing by zero in the annuity term. Returns `(fv, total_interest)`
/// where `total_interest = fv − (P + PMT·N)`.
///
/// Performs no domain validation; [`compute_future_value`] is the checked
/// boundary. Deterministic and panic-free for finite inputs with `n > 0`.
pub fn future_value(
    principal: Money,
    annual_rate: Rate,
    term_years: Years,
    frequency: Frequency,
    contribution: Money,
) -> (Money, Money) {
    let rate = normalize_rate(annual_rate);
    let i = rate / frequency as f64;
    let n_periods = term_years * frequency as f64;

    if i == 0.0 {
        return (principal + contribution * n_periods, 0.0);
    }

    let growth = (1.0 + i).powf(n_periods);
    let fv = principal * growth + contribution * ((growth - 1.0) / i);
    let total_interest = fv - (principal + contribution * n_periods);

    (fv, total_interest)
}

// ---------------------------------------------------------------------------
// Validated operation
// ---------------------------------------------------------------------------

/// Compute the future value of a savings plan with the standard envelope.
pub fn compute_future_value(
    input: &FutureValueInput,
) -> FinLogicResult<ComputationOutput<FutureValueOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if !input.principal.is_finite() || input.principal < 0.0 {
        return Err(FinLogicError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be finite and >= 0".into(),
        });
    }
    if !input.annual_rate.is_finite() || input.annual_rate < 0.0 {
        return Err(FinLogicError::InvalidInput {
            field: "annual_rate".into(),
            reason: "annual_rate must be finite and >= 0".into(),
        });
    }
    if !input.term_years.is_finite() || input.term_years <= 0.0 {
        return Err(FinLogicError::InvalidInput {
            field: "term_years".into(),
            reason: "term_years must be finite and > 0".into(),
        });
    }
    if input.frequency == 0 {
        return Err(FinLogicError::InvalidInput {
            field: "frequency".into(),
            reason: "frequency must be > 0 periods per year".into(),
        });
    }
    if !input.contribution.is_finite() || input.contribution < 0.0 {
        return Err(FinLogicError::InvalidInput {
            field: "contribution".into(),
            reason: "contribution must be finite and >= 0".into(),
        });
    }

    if input.annual_rate > 1.0 {
        warnings.push(format!(
            "annual_rate {} read as a percentage ({}% per year)",
            input.annual_rate, input.annual_rate
        ));
    }

    let (fv, total_interest) = future_value(
        input.principal,
        input.annual_rate,
        input.term_years,
        input.frequency,
        input.contribution,
    );

    let rate = normalize_rate(input.annual_rate);
    let total_periods = input.term_years * input.frequency as f64;

    let output = FutureValueOutput {
        future_value: fv,
        total_interest,
        total_capital: input.principal + input.contribution * total_periods,
        periodic_rate: rate / input.frequency as f64,
        total_periods,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound interest with ordinary annuity contributions (closed form)",
        &serde_json::json!({
            "principal": input.principal,
            "annual_rate": input.annual_rate,
            "term_years": input.term_years,
            "frequency": input.frequency,
            "contribution": input.contribution,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn default_input() -> FutureValueInput {
        FutureValueInput {
            principal: 10_000.0,
            annual_rate: 0.05,
            term_years: 10.0,
            frequency: 12,
            contribution: 100.0,
        }
    }

    // ---------------------------------------------------------------
    // 1. Regression: 10k at 5%/12 with 100/month over 10 years
    // ---------------------------------------------------------------
    #[test]
    fn test_monthly_contribution_regression() {
        let (fv, total_interest) = future_value(10_000.0, 0.05, 10.0, 12, 100.0);
        assert_relative_eq!(fv, 31_998.322_921_469_5, max_relative = 1e-9);
        assert_relative_eq!(total_interest, 9_998.322_921_469_5, max_relative = 1e-9);
    }

    // ---------------------------------------------------------------
    // 2. Zero rate is pure summation, exactly
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_exact() {
        assert_eq!(future_value(5_000.0, 0.0, 5.0, 1, 0.0), (5_000.0, 0.0));
        // 1000 + 50 * 120 contributions, zero interest
        assert_eq!(future_value(1_000.0, 0.0, 10.0, 12, 50.0), (7_000.0, 0.0));
    }

    // ---------------------------------------------------------------
    // 3. Percentage and fraction forms are bitwise equivalent
    // ---------------------------------------------------------------
    #[test]
    fn test_percentage_fraction_equivalence() {
        assert_eq!(
            future_value(10_000.0, 5.0, 10.0, 12, 100.0),
            future_value(10_000.0, 0.05, 10.0, 12, 100.0)
        );
        assert_eq!(
            future_value(250.0, 20.0, 3.0, 4, 0.0),
            future_value(250.0, 0.20, 3.0, 4, 0.0)
        );
    }

    // ---------------------------------------------------------------
    // 4. Interest invariant: ti == fv - (P + PMT*N), exactly
    // ---------------------------------------------------------------
    #[test]
    fn test_interest_invariant() {
        let cases = [
            (10_000.0, 0.05, 10.0, 12u32, 100.0),
            (0.0, 0.08, 30.0, 1, 500.0),
            (75_000.0, 0.12, 2.5, 365, 0.0),
            (1.0, 0.001, 40.0, 2, 1.0),
            (10_000.0, 0.0, 7.0, 4, 25.0),
        ];
        for (p, r, t, n, pmt) in cases {
            let (fv, ti) = future_value(p, r, t, n, pmt);
            let capital = p + pmt * (t * n as f64);
            assert_eq!(ti, fv - capital, "invariant broke for P={p} r={r} t={t} n={n}");
        }
    }

    // ---------------------------------------------------------------
    // 5. Strictly increasing in term for positive rates
    // ---------------------------------------------------------------
    #[test]
    fn test_monotonic_in_term() {
        let mut prev = f64::NEG_INFINITY;
        for t in 1..=40 {
            let (fv, _) = future_value(10_000.0, 0.07, t as f64, 12, 50.0);
            assert!(fv > prev, "fv not increasing at t={t}");
            prev = fv;
        }
    }

    // ---------------------------------------------------------------
    // 6. Envelope operation: derived fields and metadata
    // ---------------------------------------------------------------
    #[test]
    fn test_compute_future_value_envelope() {
        let result = compute_future_value(&default_input()).unwrap();
        let out = &result.result;

        assert_relative_eq!(out.future_value, 31_998.322_921_469_5, max_relative = 1e-9);
        assert_eq!(out.total_capital, 10_000.0 + 100.0 * 120.0);
        assert_eq!(out.total_periods, 120.0);
        assert_relative_eq!(out.periodic_rate, 0.05 / 12.0);
        assert!(result.warnings.is_empty());
        assert_eq!(result.metadata.precision, "ieee754_f64");
    }

    // ---------------------------------------------------------------
    // 7. Percentage-form input computes the same and warns
    // ---------------------------------------------------------------
    #[test]
    fn test_percentage_input_warns() {
        let mut input = default_input();
        input.annual_rate = 5.0;
        let result = compute_future_value(&input).unwrap();

        let fraction = compute_future_value(&default_input()).unwrap();
        assert_eq!(result.result.future_value, fraction.result.future_value);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("percentage"));
    }

    // ---------------------------------------------------------------
    // 8. Validation rejects out-of-domain fields by name
    // ---------------------------------------------------------------
    #[test]
    fn test_validation_errors() {
        let reject = |mutate: fn(&mut FutureValueInput), expect: &str| {
            let mut input = default_input();
            mutate(&mut input);
            match compute_future_value(&input) {
                Err(FinLogicError::InvalidInput { field, .. }) => assert_eq!(field, expect),
                other => panic!("expected InvalidInput for {expect}, got {other:?}"),
            }
        };

        reject(|i| i.principal = -1.0, "principal");
        reject(|i| i.principal = f64::NAN, "principal");
        reject(|i| i.annual_rate = f64::INFINITY, "annual_rate");
        reject(|i| i.term_years = 0.0, "term_years");
        reject(|i| i.term_years = -3.0, "term_years");
        reject(|i| i.frequency = 0, "frequency");
        reject(|i| i.contribution = -100.0, "contribution");
    }

    // ---------------------------------------------------------------
    // 9. Contribution defaults to zero when absent from JSON
    // ---------------------------------------------------------------
    #[test]
    fn test_contribution_serde_default() {
        let input: FutureValueInput = serde_json::from_str(
            r#"{"principal": 5000, "annual_rate": 0.04, "term_years": 3, "frequency": 4}"#,
        )
        .unwrap();
        assert_eq!(input.contribution, 0.0);

        let (fv, _) = future_value(5_000.0, 0.04, 3.0, 4, 0.0);
        let result = compute_future_value(&input).unwrap();
        assert_eq!(result.result.future_value, fv);
    }
}
