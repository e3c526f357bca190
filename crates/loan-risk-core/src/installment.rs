//! Periodic payment derivation.
//!
//! Covers:
//! 1. **Flat conventions** -- principal, interest, and fee divided across
//!    whole payment periods.
//! 2. **Reducing balance** -- standard fixed-payment amortization via the
//!    annuity factor.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::tenor::{installment_periods, tenor_in_months};
use crate::types::{InterestType, LoanInput, Money};

/// Fixed payment covering principal and interest for an amortizing loan.
///
/// The zero-rate branch degenerates to straight principal division, so a
/// free loan never hits the annuity division.
pub fn amortized_payment(amount: Money, monthly_rate: Decimal, tenor_months: Decimal) -> Money {
    if monthly_rate.is_zero() {
        return amount / tenor_months;
    }
    let factor = (Decimal::ONE + monthly_rate).powd(tenor_months);
    amount * monthly_rate * factor / (factor - Decimal::ONE)
}

/// Periodic payment for the loan, with the admin fee spread evenly across
/// payment periods. The fee is never compounded.
pub fn monthly_installment(input: &LoanInput, total_interest: Money) -> Money {
    let months = tenor_in_months(input.tenor, input.tenor_unit);
    let periods = installment_periods(months);
    match input.interest_type {
        InterestType::Daily | InterestType::MonthlyFlat => {
            (input.amount + total_interest + input.admin_fee) / periods
        }
        InterestType::ReducingBalance => {
            let monthly_rate = input.interest_rate / dec!(100);
            amortized_payment(input.amount, monthly_rate, months) + input.admin_fee / periods
        }
    }
}
