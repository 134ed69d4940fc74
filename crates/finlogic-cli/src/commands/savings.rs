use clap::{Args, ValueEnum};
use serde_json::Value;

use finlogic_core::savings::future_value::{self, FutureValueInput};
use finlogic_core::savings::series::{self, Granularity, GrowthSeriesInput};

use crate::input;

/// Arguments for the future-value calculation
#[derive(Args)]
pub struct FutureValueArgs {
    /// Initial deposit
    #[arg(long)]
    pub principal: Option<f64>,

    /// Annual interest rate, fraction (0.05) or percent (5)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in years
    #[arg(long)]
    pub years: Option<f64>,

    /// Compounding periods per year (1, 2, 4, 12, 365)
    #[arg(long, default_value = "12")]
    pub frequency: u32,

    /// Contribution added at the end of each period
    #[arg(long, default_value = "0")]
    pub contribution: f64,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the growth-series calculation
#[derive(Args)]
pub struct GrowthSeriesArgs {
    /// Initial deposit
    #[arg(long)]
    pub principal: Option<f64>,

    /// Annual interest rate, fraction (0.05) or percent (5)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in years
    #[arg(long)]
    pub years: Option<f64>,

    /// Compounding periods per year for yearly points
    #[arg(long, default_value = "12")]
    pub frequency: u32,

    /// Contribution added at the end of each period
    #[arg(long, default_value = "0")]
    pub contribution: f64,

    /// One point per year or per month
    #[arg(long, value_enum, default_value = "yearly")]
    pub granularity: GranularityArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GranularityArg {
    Yearly,
    Monthly,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Yearly => Granularity::Yearly,
            GranularityArg::Monthly => Granularity::Monthly,
        }
    }
}

pub fn run_future_value(args: FutureValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fv_input: FutureValueInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        FutureValueInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.years.ok_or("--years is required (or provide --input)")?,
            frequency: args.frequency,
            contribution: args.contribution,
        }
    };

    let result = future_value::compute_future_value(&fv_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_growth_series(args: GrowthSeriesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let series_input: GrowthSeriesInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        GrowthSeriesInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.years.ok_or("--years is required (or provide --input)")?,
            frequency: args.frequency,
            contribution: args.contribution,
            granularity: args.granularity.into(),
        }
    };

    let result = series::compute_growth_series(&series_input)?;
    Ok(serde_json::to_value(result)?)
}
