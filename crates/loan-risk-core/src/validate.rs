use rust_decimal::Decimal;

use crate::error::LoanRiskError;
use crate::types::LoanInput;
use crate::LoanRiskResult;

/// Reject structurally invalid loan parameters before any computation runs.
///
/// Checks run in a fixed priority order and only the first violation is
/// reported; no partial result is ever produced from bad input.
pub fn validate_loan_input(input: &LoanInput) -> LoanRiskResult<()> {
    if input.amount <= Decimal::ZERO {
        return Err(LoanRiskError::InvalidInput {
            field: "amount".into(),
            reason: "Loan amount must be positive.".into(),
        });
    }
    if input.interest_rate <= Decimal::ZERO {
        return Err(LoanRiskError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate must be positive.".into(),
        });
    }
    if input.tenor <= Decimal::ZERO {
        return Err(LoanRiskError::InvalidInput {
            field: "tenor".into(),
            reason: "Tenor must be positive.".into(),
        });
    }
    if input.monthly_income <= Decimal::ZERO {
        return Err(LoanRiskError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Monthly income must be positive.".into(),
        });
    }
    if input.admin_fee < Decimal::ZERO {
        return Err(LoanRiskError::InvalidInput {
            field: "admin_fee".into(),
            reason: "Admin fee cannot be negative.".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InterestType, TenorUnit};
    use rust_decimal_macros::dec;

    fn valid_input() -> LoanInput {
        LoanInput {
            amount: dec!(1000000),
            interest_rate: dec!(1),
            interest_type: InterestType::Daily,
            tenor: dec!(30),
            tenor_unit: TenorUnit::Days,
            admin_fee: dec!(50000),
            monthly_income: dec!(5000000),
            lender_name: "Dana Kilat".into(),
        }
    }

    fn violated_field(input: &LoanInput) -> String {
        match validate_loan_input(input) {
            Err(LoanRiskError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_loan_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut input = valid_input();
        input.amount = dec!(0);
        assert_eq!(violated_field(&input), "amount");
    }

    #[test]
    fn test_negative_interest_rate_rejected() {
        let mut input = valid_input();
        input.interest_rate = dec!(-1);
        assert_eq!(violated_field(&input), "interest_rate");
    }

    #[test]
    fn test_zero_tenor_rejected() {
        let mut input = valid_input();
        input.tenor = dec!(0);
        assert_eq!(violated_field(&input), "tenor");
    }

    #[test]
    fn test_zero_income_rejected() {
        let mut input = valid_input();
        input.monthly_income = dec!(0);
        assert_eq!(violated_field(&input), "monthly_income");
    }

    #[test]
    fn test_negative_admin_fee_rejected() {
        let mut input = valid_input();
        input.admin_fee = dec!(-1);
        assert_eq!(violated_field(&input), "admin_fee");
    }

    #[test]
    fn test_zero_admin_fee_allowed() {
        let mut input = valid_input();
        input.admin_fee = dec!(0);
        assert!(validate_loan_input(&input).is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        // Multiple violations: amount has the highest priority.
        let mut input = valid_input();
        input.amount = dec!(0);
        input.interest_rate = dec!(-1);
        input.tenor = dec!(0);
        assert_eq!(violated_field(&input), "amount");
    }

    #[test]
    fn test_priority_order_after_amount() {
        let mut input = valid_input();
        input.interest_rate = dec!(0);
        input.monthly_income = dec!(0);
        assert_eq!(violated_field(&input), "interest_rate");
    }
}
