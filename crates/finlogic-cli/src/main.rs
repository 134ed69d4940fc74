mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loans::LoanEmiArgs;
use commands::savings::{FutureValueArgs, GrowthSeriesArgs};

/// Compound interest and loan amortization calculations
#[derive(Parser)]
#[command(
    name = "finlogic",
    version,
    about = "Compound interest and loan amortization calculations",
    long_about = "Closed-form savings and debt arithmetic: future value of a principal \
                  plus periodic contributions, the periodic installment (EMI) that \
                  amortizes a loan, and per-period balance series for charting. \
                  Frequencies are periods per year (conventionally 1, 2, 4, 12, or 365)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Future value of a principal plus periodic contributions
    FutureValue(FutureValueArgs),
    /// Periodic installment (EMI) that amortizes a loan
    LoanEmi(LoanEmiArgs),
    /// Balance/capital/interest series for growth charts
    GrowthSeries(GrowthSeriesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::FutureValue(args) => commands::savings::run_future_value(args),
        Commands::LoanEmi(args) => commands::loans::run_loan_emi(args),
        Commands::GrowthSeries(args) => commands::savings::run_growth_series(args),
        Commands::Version => {
            println!("finlogic {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
