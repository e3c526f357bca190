pub mod metrics;
pub mod schedule;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use loan_risk_core::types::{InterestType, LoanInput, TenorUnit};

/// Interest convention flag values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InterestTypeArg {
    /// Simple interest accrued per day
    Daily,
    /// Flat interest per month on the original principal
    MonthlyFlat,
    /// Amortizing interest on the outstanding balance
    ReducingBalance,
}

impl From<InterestTypeArg> for InterestType {
    fn from(arg: InterestTypeArg) -> Self {
        match arg {
            InterestTypeArg::Daily => InterestType::Daily,
            InterestTypeArg::MonthlyFlat => InterestType::MonthlyFlat,
            InterestTypeArg::ReducingBalance => InterestType::ReducingBalance,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TenorUnitArg {
    Days,
    Months,
}

impl From<TenorUnitArg> for TenorUnit {
    fn from(arg: TenorUnitArg) -> Self {
        match arg {
            TenorUnitArg::Days => TenorUnit::Days,
            TenorUnitArg::Months => TenorUnit::Months,
        }
    }
}

/// Loan terms shared by every subcommand.
#[derive(Args)]
pub struct OfferArgs {
    /// Principal borrowed
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Periodic interest rate, as a percentage
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Interest convention
    #[arg(long, value_enum)]
    pub interest_type: Option<InterestTypeArg>,

    /// Loan duration magnitude
    #[arg(long)]
    pub tenor: Option<Decimal>,

    /// Unit for --tenor
    #[arg(long, value_enum, default_value = "months")]
    pub tenor_unit: TenorUnitArg,

    /// One-time admin fee
    #[arg(long, default_value = "0")]
    pub admin_fee: Decimal,

    /// Borrower's monthly income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Lender name as printed on the offer
    #[arg(long, default_value = "")]
    pub lender_name: String,
}

impl OfferArgs {
    /// Assemble a `LoanInput` from individual flags.
    pub fn to_loan_input(&self) -> Result<LoanInput, Box<dyn std::error::Error>> {
        Ok(LoanInput {
            amount: self
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            interest_rate: self
                .interest_rate
                .ok_or("--interest-rate is required (or provide --input)")?,
            interest_type: self
                .interest_type
                .ok_or("--interest-type is required (or provide --input)")?
                .into(),
            tenor: self
                .tenor
                .ok_or("--tenor is required (or provide --input)")?,
            tenor_unit: self.tenor_unit.into(),
            admin_fee: self.admin_fee,
            monthly_income: self
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            lender_name: self.lender_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_args() -> OfferArgs {
        OfferArgs {
            amount: Some(dec!(1000000)),
            interest_rate: Some(dec!(1)),
            interest_type: Some(InterestTypeArg::Daily),
            tenor: Some(dec!(30)),
            tenor_unit: TenorUnitArg::Days,
            admin_fee: dec!(50000),
            monthly_income: Some(dec!(5000000)),
            lender_name: "Dana Kilat".into(),
        }
    }

    #[test]
    fn test_flags_assemble_loan_input() {
        let input = full_args().to_loan_input().unwrap();
        assert_eq!(input.amount, dec!(1000000));
        assert_eq!(input.interest_type, InterestType::Daily);
        assert_eq!(input.tenor_unit, TenorUnit::Days);
        assert_eq!(input.admin_fee, dec!(50000));
    }

    #[test]
    fn test_missing_amount_names_the_flag() {
        let mut args = full_args();
        args.amount = None;
        let err = args.to_loan_input().unwrap_err().to_string();
        assert!(err.contains("--amount"));
    }

    #[test]
    fn test_missing_interest_type_names_the_flag() {
        let mut args = full_args();
        args.interest_type = None;
        let err = args.to_loan_input().unwrap_err().to_string();
        assert!(err.contains("--interest-type"));
    }
}
