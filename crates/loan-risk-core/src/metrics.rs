//! End-to-end metric assembly.
//!
//! The pipeline is strictly linear: validate, normalize interest, derive the
//! installment, evaluate affordability, score, assemble. Each stage consumes
//! only the prior stage's output; rounding to two decimals happens here,
//! once, on the assembled result.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::affordability::dti_ratio;
use crate::installment::monthly_installment;
use crate::interest::normalize_interest;
use crate::scoring::{classify_risk, risk_score};
use crate::types::{LoanInput, LoanMetrics};
use crate::validate::validate_loan_input;
use crate::LoanRiskResult;

/// Round a currency or percentage figure to two decimals, half away from zero.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the full metric set for one loan offer.
///
/// `is_registered` is the regulator-registration fact for the named lender,
/// resolved by the caller before invocation; the engine performs no lookup.
/// The scorer reads the rounded ratio and rate, so the score always agrees
/// with the figures the caller displays.
pub fn compute_loan_metrics(input: &LoanInput, is_registered: bool) -> LoanRiskResult<LoanMetrics> {
    validate_loan_input(input)?;

    let interest = normalize_interest(input);
    let installment = monthly_installment(input, interest.total_interest);
    let total_repayment = input.amount + interest.total_interest + input.admin_fee;

    let effective_apr = round2(interest.effective_apr);
    let dti = round2(dti_ratio(installment, input.monthly_income));
    let score = risk_score(is_registered, dti, effective_apr);

    Ok(LoanMetrics {
        total_repayment: round2(total_repayment),
        monthly_installment: round2(installment),
        effective_apr,
        dti_ratio: dti,
        risk_score: score,
        risk_level: classify_risk(score),
    })
}
