//! Equal-installment loan arithmetic.
//!
//! The degenerate configuration where `(1+i)^(-N)` rounds to exactly 1
//! (periodic rates at the edge of f64 resolution) yields an infinite
//! installment rather than an error: no finite regular payment amortizes
//! such a loan. JSON serialization renders that sentinel as `null`; the
//! `amortizes` flag in [`LoanOutput`] carries the signal across the wire.

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

/// Input parameters for a loan installment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: Money,
    /// Annual rate, fraction (0.05) or percentage (5)
    pub annual_rate: Rate,
    /// Term in years
    pub term_years: Years,
    /// Payments per year (conventionally 12)
    pub frequency: Frequency,
}

/// Output of `compute_emi`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOutput {
    /// Equal periodic installment
    pub emi: Money,
    /// Installment times the number of payments
    pub total_payments: Money,
    /// Total payments minus the principal
    pub total_interest_paid: Money,
    pub periodic_rate: Rate,
    pub total_periods: f64,
    /// False when the installment is the infinity sentinel
    pub amortizes: bool,
}

// ---------------------------------------------------------------------------
// Closed form
// ---------------------------------------------------------------------------

/// Equal periodic installment that fully amortizes a loan.
///
/// `emi = P·i / (1 − (1+i)^(−N))` with `i = r/n`, `N = t·n`. A zero
/// periodic rate is straight-line repayment `P/N`; an exactly-zero
/// denominator returns `f64::INFINITY` instead of dividing by zero.
///
/// Performs no domain validation; [`compute_emi`] is the checked boundary.
pub fn emi(principal: Money, annual_rate: Rate, term_years: Years, frequency: Frequency) -> Money {
    let rate = normalize_rate(annual_rate);
    let i = rate / frequency as f64;
    let n_periods = term_years * frequency as f64;

    if i == 0.0 {
        return principal / n_periods;
    }

    let denominator = 1.0 - (1.0 + i).powf(-n_periods);
    if denominator == 0.0 {
        return f64::INFINITY;
    }

    principal * i / denominator
}

// ---------------------------------------------------------------------------
// Validated operation
// ---------------------------------------------------------------------------

/// Compute the loan installment and repayment totals with the standard envelope.
pub fn compute_emi(input: &LoanInput) -> FinLogicResult<ComputationOutput<LoanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if !input.principal.is_finite() || input.principal <= 0.0 {
        return Err(FinLogicError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be finite and > 0".into(),
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
            reason: "frequency must be > 0 payments per year".into(),
        });
    }

    if input.annual_rate > 1.0 {
        warnings.push(format!(
            "annual_rate {} read as a percentage ({}% per year)",
            input.annual_rate, input.annual_rate
        ));
    }

    let installment = emi(
        input.principal,
        input.annual_rate,
        input.term_years,
        input.frequency,
    );

    let total_periods = input.term_years * input.frequency as f64;
    let total_payments = installment * total_periods;
    let amortizes = installment.is_finite();

    if !amortizes {
        warnings.push(
            "no finite regular payment amortizes this configuration; installment is infinite"
                .into(),
        );
    }

    let output = LoanOutput {
        emi: installment,
        total_payments,
        total_interest_paid: total_payments - input.principal,
        periodic_rate: normalize_rate(input.annual_rate) / input.frequency as f64,
        total_periods,
        amortizes,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Equal periodic installment (annuity amortization, closed form)",
        &serde_json::json!({
            "principal": input.principal,
            "annual_rate": input.annual_rate,
            "term_years": input.term_years,
            "frequency": input.frequency,
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

    fn mortgage_input() -> LoanInput {
        LoanInput {
            principal: 250_000.0,
            annual_rate: 0.05,
            term_years: 10.0,
            frequency: 12,
        }
    }

    // ---------------------------------------------------------------
    // 1. Regression: 250k over 10 years at 5%, monthly payments
    // ---------------------------------------------------------------
    #[test]
    fn test_mortgage_regression() {
        let payment = emi(250_000.0, 0.05, 10.0, 12);
        assert_relative_eq!(payment, 2_651.637_880_976_9, max_relative = 1e-9);
    }

    // ---------------------------------------------------------------
    // 2. Zero rate is straight-line division, exactly
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_straight_line() {
        assert_eq!(emi(12_000.0, 0.0, 10.0, 12), 12_000.0 / 120.0);
        assert_eq!(emi(9_000.0, 0.0, 3.0, 1), 3_000.0);
    }

    // ---------------------------------------------------------------
    // 3. Percentage and fraction forms are bitwise equivalent
    // ---------------------------------------------------------------
    #[test]
    fn test_percentage_fraction_equivalence() {
        assert_eq!(emi(250_000.0, 5.0, 10.0, 12), emi(250_000.0, 0.05, 10.0, 12));
        assert_eq!(emi(80_000.0, 7.25, 15.0, 12), emi(80_000.0, 0.0725, 15.0, 12));
    }

    // ---------------------------------------------------------------
    // 4. Degenerate denominator returns the infinity sentinel
    // ---------------------------------------------------------------
    #[test]
    fn test_degenerate_denominator_is_infinite() {
        // 1.0 + 1e-18 rounds to exactly 1.0, so (1+i)^(-N) == 1.0 and the
        // denominator is exactly zero
        let payment = emi(1_000.0, 1e-18, 30.0, 1);
        assert!(payment.is_infinite() && payment.is_sign_positive());
    }

    // ---------------------------------------------------------------
    // 5. Round-trip totals are consistent with amortization math
    // ---------------------------------------------------------------
    #[test]
    fn test_repayment_totals() {
        let result = compute_emi(&mortgage_input()).unwrap();
        let out = &result.result;

        assert_relative_eq!(out.total_payments, 318_196.545_717_226_6, max_relative = 1e-9);
        assert_relative_eq!(
            out.total_interest_paid,
            68_196.545_717_226_6,
            max_relative = 1e-9
        );
        assert!(out.total_interest_paid > 0.0);
        assert_eq!(out.total_payments, out.emi * out.total_periods);
        assert!(out.amortizes);
        assert!(result.warnings.is_empty());
    }

    // ---------------------------------------------------------------
    // 6. Envelope flags the non-amortizing sentinel
    // ---------------------------------------------------------------
    #[test]
    fn test_non_amortizing_flagged() {
        let input = LoanInput {
            principal: 1_000.0,
            annual_rate: 1e-18,
            term_years: 30.0,
            frequency: 1,
        };
        let result = compute_emi(&input).unwrap();

        assert!(result.result.emi.is_infinite());
        assert!(!result.result.amortizes);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("infinite"));
    }

    // ---------------------------------------------------------------
    // 7. Validation rejects out-of-domain fields by name
    // ---------------------------------------------------------------
    #[test]
    fn test_validation_errors() {
        let reject = |mutate: fn(&mut LoanInput), expect: &str| {
            let mut input = mortgage_input();
            mutate(&mut input);
            match compute_emi(&input) {
                Err(FinLogicError::InvalidInput { field, .. }) => assert_eq!(field, expect),
                other => panic!("expected InvalidInput for {expect}, got {other:?}"),
            }
        };

        reject(|i| i.principal = 0.0, "principal");
        reject(|i| i.principal = -50_000.0, "principal");
        reject(|i| i.annual_rate = f64::NAN, "annual_rate");
        reject(|i| i.term_years = 0.0, "term_years");
        reject(|i| i.frequency = 0, "frequency");
    }

    // ---------------------------------------------------------------
    // 8. Higher rates cost more per period
    // ---------------------------------------------------------------
    #[test]
    fn test_monotonic_in_rate() {
        let mut prev = 0.0;
        for bps in [1.0, 2.0, 4.0, 6.0, 9.0, 12.0] {
            let payment = emi(100_000.0, bps / 100.0, 20.0, 12);
            assert!(payment > prev, "emi not increasing at {bps}%");
            prev = payment;
        }
    }
}
