//! Balance-over-time series for growth charts.
//!
//! Every point is recomputed from the closed form with the sub-term set to
//! its own index, never accumulated from the previous point. Floating-point
//! error therefore cannot drift across the series, and any point can be
//! reproduced in isolation.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinLogicError;
use crate::savings::future_value::future_value;
use crate::types::{with_metadata, ComputationOutput, Frequency, Money, Rate, Years};
use crate::FinLogicResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Chart granularity for a growth series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One point per elapsed year, compounding at the input frequency
    #[default]
    Yearly,
    /// One point per elapsed month, compounding monthly
    Monthly,
}

/// One charted point after `period` elapsed years or months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// 1-based year or month index
    pub period: u32,
    /// Balance including compounding and contributions
    pub balance: Money,
    /// Principal plus contributions paid in so far
    pub capital: Money,
    /// `balance - capital`, the stacked-chart interest band
    pub interest: Money,
}

/// Input parameters for `compute_growth_series`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSeriesInput {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_years: Years,
    /// Compounding frequency for yearly points; monthly points always
    /// compound at 12
    pub frequency: Frequency,
    #[serde(default)]
    pub contribution: Money,
    #[serde(default)]
    pub granularity: Granularity,
}

/// Output of `compute_growth_series`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSeriesOutput {
    pub granularity: Granularity,
    pub points: Vec<SeriesPoint>,
    pub final_balance: Money,
    pub total_capital: Money,
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// Lazy, finite sequence of growth points.
///
/// The series is cheap to clone and re-iterate; [`GrowthSeries::point_at`]
/// recomputes any point directly from the closed form.
#[derive(Debug, Clone)]
pub struct GrowthSeries {
    principal: Money,
    annual_rate: Rate,
    frequency: Frequency,
    contribution: Money,
    granularity: Granularity,
    next: u32,
    len: u32,
}

impl GrowthSeries {
    pub fn new(input: &GrowthSeriesInput) -> Self {
        let len = match input.granularity {
            Granularity::Yearly => input.term_years.floor() as u32,
            Granularity::Monthly => (input.term_years * 12.0).floor() as u32,
        };
        GrowthSeries {
            principal: input.principal,
            annual_rate: input.annual_rate,
            frequency: input.frequency,
            contribution: input.contribution,
            granularity: input.granularity,
            next: 1,
            len,
        }
    }

    /// Number of points the full series yields.
    pub fn total_points(&self) -> u32 {
        self.len
    }

    /// Recompute the point at the 1-based `period` index from the closed form.
    pub fn point_at(&self, period: u32) -> SeriesPoint {
        let (balance, capital) = match self.granularity {
            Granularity::Yearly => {
                let (fv, _) = future_value(
                    self.principal,
                    self.annual_rate,
                    period as f64,
                    self.frequency,
                    self.contribution,
                );
                let paid_in =
                    self.principal + self.contribution * (period as f64 * self.frequency as f64);
                (fv, paid_in)
            }
            Granularity::Monthly => {
                let (fv, _) = future_value(
                    self.principal,
                    self.annual_rate,
                    period as f64 / 12.0,
                    12,
                    self.contribution,
                );
                let paid_in = self.principal + self.contribution * period as f64;
                (fv, paid_in)
            }
        };

        SeriesPoint {
            period,
            balance,
            capital,
            interest: balance - capital,
        }
    }
}

impl Iterator for GrowthSeries {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<SeriesPoint> {
        if self.next > self.len {
            return None;
        }
        let point = self.point_at(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - (self.next - 1)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GrowthSeries {}

// ---------------------------------------------------------------------------
// Validated operation
// ---------------------------------------------------------------------------

/// Collect the full growth series with the standard envelope.
pub fn compute_growth_series(
    input: &GrowthSeriesInput,
) -> FinLogicResult<ComputationOutput<GrowthSeriesOutput>> {
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

    let series = GrowthSeries::new(input);
    if series.total_points() == 0 {
        warnings.push(
            "term shorter than one yearly period yields an empty series; \
             use monthly granularity for sub-year terms"
                .into(),
        );
    }

    let points: Vec<SeriesPoint> = series.collect();
    let final_balance = points.last().map_or(input.principal, |p| p.balance);
    let total_capital = points.last().map_or(input.principal, |p| p.capital);

    let output = GrowthSeriesOutput {
        granularity: input.granularity,
        points,
        final_balance,
        total_capital,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Closed-form recomputation per period (no iterative accumulation)",
        &serde_json::json!({
            "principal": input.principal,
            "annual_rate": input.annual_rate,
            "term_years": input.term_years,
            "frequency": input.frequency,
            "contribution": input.contribution,
            "granularity": input.granularity,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
