//! Period-by-period repayment breakdown.
//!
//! Covers:
//! 1. **Flat conventions** -- principal, interest, and fee split evenly
//!    across periods.
//! 2. **Reducing balance** -- interest on the opening balance, principal
//!    from the remainder of the fixed payment.
//! 3. **Close-out** -- the final period retires the balance exactly.
//!
//! Figures stay unrounded; the headline metrics in `metrics` are where the
//! two-decimal presentation happens.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::installment::amortized_payment;
use crate::interest::normalize_interest;
use crate::tenor::{installment_periods, tenor_in_months};
use crate::types::{InterestType, LoanInput, Money};
use crate::validate::validate_loan_input;
use crate::LoanRiskResult;

/// A single payment period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePeriod {
    pub period: u32,
    pub opening_balance: Money,
    pub payment: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub fee_portion: Money,
    pub closing_balance: Money,
}

/// Full repayment schedule for one loan offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    pub periods: Vec<SchedulePeriod>,
    pub total_paid: Money,
    pub total_interest: Money,
    pub total_fees: Money,
}

/// Build the period-by-period schedule behind the headline installment.
pub fn build_repayment_schedule(input: &LoanInput) -> LoanRiskResult<RepaymentSchedule> {
    validate_loan_input(input)?;

    let months = tenor_in_months(input.tenor, input.tenor_unit);
    let period_count = installment_periods(months)
        .to_string()
        .parse::<u32>()
        .unwrap_or(1);
    let n = Decimal::from(period_count);
    let fee_portion = input.admin_fee / n;

    let schedule = match input.interest_type {
        InterestType::Daily | InterestType::MonthlyFlat => {
            let total_interest = normalize_interest(input).total_interest;
            build_flat(input, period_count, total_interest, fee_portion)
        }
        InterestType::ReducingBalance => {
            let monthly_rate = input.interest_rate / dec!(100);
            let payment_portion = amortized_payment(input.amount, monthly_rate, months);
            build_reducing(input, period_count, monthly_rate, payment_portion, fee_portion)
        }
    };

    Ok(schedule)
}

/// Even split: every period carries the same principal, interest, and fee
/// slice. The final period absorbs division residue so the balance closes
/// to exactly zero.
fn build_flat(
    input: &LoanInput,
    period_count: u32,
    total_interest: Money,
    fee_portion: Money,
) -> RepaymentSchedule {
    let n = Decimal::from(period_count);
    let principal_slice = input.amount / n;
    let interest_slice = total_interest / n;

    let mut periods = Vec::with_capacity(period_count as usize);
    let mut balance = input.amount;
    let mut interest_left = total_interest;
    let mut total_paid = Decimal::ZERO;
    let mut interest_paid = Decimal::ZERO;

    for period in 1..=period_count {
        let opening = balance;
        let last = period == period_count;
        let principal = if last { balance } else { principal_slice };
        let interest = if last { interest_left } else { interest_slice };
        let payment = principal + interest + fee_portion;

        balance -= principal;
        interest_left -= interest;
        total_paid += payment;
        interest_paid += interest;

        periods.push(SchedulePeriod {
            period,
            opening_balance: opening,
            payment,
            interest_portion: interest,
            principal_portion: principal,
            fee_portion,
            closing_balance: balance,
        });
    }

    RepaymentSchedule {
        periods,
        total_paid,
        total_interest: interest_paid,
        total_fees: input.admin_fee,
    }
}

/// Amortization walk: interest accrues on each opening balance, the rest of
/// the fixed payment retires principal. The final period pays off whatever
/// balance remains.
fn build_reducing(
    input: &LoanInput,
    period_count: u32,
    monthly_rate: Decimal,
    payment_portion: Money,
    fee_portion: Money,
) -> RepaymentSchedule {
    let mut periods = Vec::with_capacity(period_count as usize);
    let mut balance = input.amount;
    let mut total_paid = Decimal::ZERO;
    let mut interest_paid = Decimal::ZERO;

    for period in 1..=period_count {
        let opening = balance;
        let interest = opening * monthly_rate;
        let principal = if period == period_count {
            balance
        } else {
            payment_portion - interest
        };
        let payment = principal + interest + fee_portion;

        balance -= principal;
        total_paid += payment;
        interest_paid += interest;

        periods.push(SchedulePeriod {
            period,
            opening_balance: opening,
            payment,
            interest_portion: interest,
            principal_portion: principal,
            fee_portion,
            closing_balance: balance,
        });
    }

    RepaymentSchedule {
        periods,
        total_paid,
        total_interest: interest_paid,
        total_fees: input.admin_fee,
    }
}
