use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use loan_risk_core::compute_loan_metrics;
use loan_risk_core::types::LoanInput;

use crate::commands::OfferArgs;
use crate::input;

/// Request body accepted from input files and piped stdin.
#[derive(Deserialize)]
pub struct MetricsRequest {
    #[serde(flatten)]
    pub loan: LoanInput,
    /// Regulator-registration fact for the named lender, resolved upstream.
    #[serde(default)]
    pub is_registered: bool,
}

/// Arguments for the metrics calculation
#[derive(Args)]
pub struct MetricsArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub offer: OfferArgs,

    /// The regulator lists this lender as registered
    #[arg(long)]
    pub registered: bool,
}

pub fn run_metrics(args: MetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: MetricsRequest = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        MetricsRequest {
            loan: args.offer.to_loan_input()?,
            is_registered: args.registered,
        }
    };

    let metrics = compute_loan_metrics(&request.loan, request.is_registered)?;
    Ok(serde_json::to_value(metrics)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_with_flattened_loan() {
        let request: MetricsRequest = serde_json::from_str(
            r#"{
                "amount": "1000000",
                "interest_rate": "1",
                "interest_type": "daily",
                "tenor": "30",
                "tenor_unit": "days",
                "monthly_income": "5000000",
                "is_registered": true
            }"#,
        )
        .unwrap();
        assert!(request.is_registered);
        assert_eq!(request.loan.lender_name, "");
    }

    #[test]
    fn test_registration_defaults_to_false() {
        let request: MetricsRequest = serde_json::from_str(
            r#"{
                "amount": "1000000",
                "interest_rate": "1",
                "interest_type": "daily",
                "tenor": "30",
                "tenor_unit": "days",
                "monthly_income": "5000000"
            }"#,
        )
        .unwrap();
        assert!(!request.is_registered);
    }
}
