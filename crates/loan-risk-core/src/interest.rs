//! Interest-convention normalization.
//!
//! Covers:
//! 1. **Daily** -- simple interest per day on the original principal,
//!    annualized with a fixed 365 multiplier.
//! 2. **Monthly flat** -- simple interest per month on the original
//!    principal, annualized with a fixed 12 multiplier.
//! 3. **Reducing balance** -- true amortization; total interest falls out of
//!    the fixed-payment formula.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::installment::amortized_payment;
use crate::tenor::{tenor_in_days, tenor_in_months};
use crate::types::{InterestType, LoanInput, Money, Percent};

const DAYS_PER_YEAR: Decimal = dec!(365);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Unrounded interest figures for one loan offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestBreakdown {
    /// Absolute interest owed over the full tenor.
    pub total_interest: Money,
    /// Annualized percentage rate implied by the stated periodic rate.
    pub effective_apr: Percent,
}

/// Normalize the loan's interest convention into total interest owed and an
/// annualized rate.
pub fn normalize_interest(input: &LoanInput) -> InterestBreakdown {
    let periodic = input.interest_rate / dec!(100);
    match input.interest_type {
        InterestType::Daily => {
            let days = tenor_in_days(input.tenor, input.tenor_unit);
            InterestBreakdown {
                total_interest: input.amount * periodic * days,
                effective_apr: input.interest_rate * DAYS_PER_YEAR,
            }
        }
        InterestType::MonthlyFlat => {
            let months = tenor_in_months(input.tenor, input.tenor_unit);
            InterestBreakdown {
                total_interest: input.amount * periodic * months,
                effective_apr: input.interest_rate * MONTHS_PER_YEAR,
            }
        }
        InterestType::ReducingBalance => {
            let months = tenor_in_months(input.tenor, input.tenor_unit);
            // Zero-rate loans owe exactly zero interest; skipping the
            // payment round-trip keeps that exact.
            let total_interest = if periodic.is_zero() {
                Decimal::ZERO
            } else {
                amortized_payment(input.amount, periodic, months) * months - input.amount
            };
            InterestBreakdown {
                total_interest,
                effective_apr: input.interest_rate * MONTHS_PER_YEAR,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TenorUnit;

    fn base_input(interest_type: InterestType) -> LoanInput {
        LoanInput {
            amount: dec!(1000000),
            interest_rate: dec!(1),
            interest_type,
            tenor: dec!(30),
            tenor_unit: TenorUnit::Days,
            admin_fee: dec!(0),
            monthly_income: dec!(5000000),
            lender_name: String::new(),
        }
    }

    #[test]
    fn test_daily_interest_over_day_tenor() {
        let breakdown = normalize_interest(&base_input(InterestType::Daily));
        // 1,000,000 x 0.01 x 30 days
        assert_eq!(breakdown.total_interest, dec!(300000));
        assert_eq!(breakdown.effective_apr, dec!(365));
    }

    #[test]
    fn test_daily_interest_over_month_tenor() {
        let mut input = base_input(InterestType::Daily);
        input.tenor = dec!(2);
        input.tenor_unit = TenorUnit::Months;
        let breakdown = normalize_interest(&input);
        // 2 months => 60 days under the 30-day approximation.
        assert_eq!(breakdown.total_interest, dec!(600000));
    }

    #[test]
    fn test_monthly_flat_interest() {
        let mut input = base_input(InterestType::MonthlyFlat);
        input.amount = dec!(10000000);
        input.interest_rate = dec!(2);
        input.tenor = dec!(12);
        input.tenor_unit = TenorUnit::Months;
        let breakdown = normalize_interest(&input);
        // 10,000,000 x 0.02 x 12
        assert_eq!(breakdown.total_interest, dec!(2400000));
        assert_eq!(breakdown.effective_apr, dec!(24));
    }

    #[test]
    fn test_monthly_flat_day_tenor_uses_fractional_months() {
        let mut input = base_input(InterestType::MonthlyFlat);
        input.tenor = dec!(45);
        input.tenor_unit = TenorUnit::Days;
        let breakdown = normalize_interest(&input);
        // 45 days => 1.5 months
        assert_eq!(breakdown.total_interest, dec!(15000));
    }

    #[test]
    fn test_reducing_balance_interest_from_amortization() {
        let mut input = base_input(InterestType::ReducingBalance);
        input.amount = dec!(10000000);
        input.interest_rate = dec!(2);
        input.tenor = dec!(12);
        input.tenor_unit = TenorUnit::Months;
        let breakdown = normalize_interest(&input);
        // payment x 12 - principal, roughly 1,347,152
        assert!((breakdown.total_interest - dec!(1347152)).abs() < dec!(15));
        assert_eq!(breakdown.effective_apr, dec!(24));
    }

    #[test]
    fn test_reducing_balance_costs_less_than_flat_at_same_rate() {
        let mut flat = base_input(InterestType::MonthlyFlat);
        flat.interest_rate = dec!(2);
        flat.tenor = dec!(12);
        flat.tenor_unit = TenorUnit::Months;
        let mut reducing = flat.clone();
        reducing.interest_type = InterestType::ReducingBalance;
        let flat_breakdown = normalize_interest(&flat);
        let reducing_breakdown = normalize_interest(&reducing);
        assert!(reducing_breakdown.total_interest < flat_breakdown.total_interest);
    }

    #[test]
    fn test_reducing_balance_zero_rate_owes_zero_interest() {
        let mut input = base_input(InterestType::ReducingBalance);
        input.interest_rate = dec!(0);
        input.tenor = dec!(12);
        input.tenor_unit = TenorUnit::Months;
        let breakdown = normalize_interest(&input);
        assert_eq!(breakdown.total_interest, dec!(0));
        assert_eq!(breakdown.effective_apr, dec!(0));
    }

    #[test]
    fn test_small_daily_rate_annualizes_large() {
        // The deceptive flat-rate pattern: 0.5% per day reads small but
        // annualizes to 182.5%.
        let mut input = base_input(InterestType::Daily);
        input.interest_rate = dec!(0.5);
        let breakdown = normalize_interest(&input);
        assert_eq!(breakdown.effective_apr, dec!(182.5));
    }
}
