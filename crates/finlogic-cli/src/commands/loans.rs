use clap::Args;
use serde_json::Value;

use finlogic_core::loans::amortization::{self, LoanInput};

use crate::input;

/// Arguments for the loan installment calculation
#[derive(Args)]
pub struct LoanEmiArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<f64>,

    /// Annual interest rate, fraction (0.05) or percent (5)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in years
    #[arg(long)]
    pub years: Option<f64>,

    /// Payments per year (usually 12)
    #[arg(long, default_value = "12")]
    pub frequency: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_loan_emi(args: LoanEmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.years.ok_or("--years is required (or provide --input)")?,
            frequency: args.frequency,
        }
    };

    let result = amortization::compute_emi(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}
