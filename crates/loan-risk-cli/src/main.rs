mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::metrics::MetricsArgs;
use commands::schedule::ScheduleArgs;

/// Loan risk metrics and scoring for consumer loan offers
#[derive(Parser)]
#[command(
    name = "loanrisk",
    version,
    about = "Loan risk metrics and scoring for consumer loan offers",
    long_about = "A CLI for computing loan-cost metrics with decimal precision. \
                  Normalizes daily, monthly-flat, and reducing-balance interest \
                  conventions into comparable annualized figures, derives \
                  affordability against stated income, and scores offers into \
                  four risk tiers."
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
    /// Compute repayment, APR, affordability, and the risk tier for an offer
    Metrics(MetricsArgs),
    /// Build the period-by-period repayment schedule for an offer
    Schedule(ScheduleArgs),
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
        Commands::Metrics(args) => commands::metrics::run_metrics(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Version => {
            println!("loanrisk {}", env!("CARGO_PKG_VERSION"));
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
