use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Loan terms plus the registry fact the web layer resolved upstream.
#[derive(serde::Deserialize)]
struct MetricsBindingInput {
    #[serde(flatten)]
    loan: loan_risk_core::types::LoanInput,
    #[serde(default)]
    is_registered: bool,
}

#[napi]
pub fn compute_loan_metrics(input_json: String) -> NapiResult<String> {
    let binding_input: MetricsBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_risk_core::metrics::compute_loan_metrics(&binding_input.loan, binding_input.is_registered)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_repayment_schedule(input_json: String) -> NapiResult<String> {
    let input: loan_risk_core::types::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_risk_core::schedule::build_repayment_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
