use clap::Args;
use serde_json::Value;

use loan_risk_core::schedule::build_repayment_schedule;
use loan_risk_core::types::LoanInput;

use crate::commands::OfferArgs;
use crate::input;

/// Arguments for the repayment schedule breakdown
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub offer: OfferArgs,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan: LoanInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        args.offer.to_loan_input()?
    };

    let schedule = build_repayment_schedule(&loan)?;
    Ok(serde_json::to_value(schedule)?)
}
