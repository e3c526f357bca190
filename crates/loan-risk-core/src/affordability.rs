use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

/// Share of monthly income consumed by the installment, as a percentage.
///
/// Deliberately unclamped: ratios past 100 are valid and signal an
/// unaffordable loan.
pub fn dti_ratio(monthly_installment: Money, monthly_income: Money) -> Percent {
    monthly_installment / monthly_income * dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dti_basic() {
        assert_eq!(dti_ratio(dec!(1350000), dec!(5000000)), dec!(27));
    }

    #[test]
    fn test_dti_above_one_hundred_unclamped() {
        assert_eq!(dti_ratio(dec!(6000000), dec!(5000000)), dec!(120));
    }
}
