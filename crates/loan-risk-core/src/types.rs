use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates and ratios expressed as percentages (27.5 = 27.5%). Never as decimals.
pub type Percent = Decimal;

/// Interest convention attached to a loan offer. Determines both the accrual
/// formula and the annualization factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestType {
    /// Simple interest accrued per day on the original principal.
    Daily,
    /// Simple "flat" interest accrued per month on the original principal.
    MonthlyFlat,
    /// Amortizing interest on the outstanding balance, mortgage-style.
    ReducingBalance,
}

/// Unit for the loan duration magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenorUnit {
    Days,
    Months,
}

/// The terms of one proposed loan, supplied once per calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Principal borrowed.
    pub amount: Money,
    /// Rate as a percentage; its accrual period depends on `interest_type`.
    pub interest_rate: Percent,
    pub interest_type: InterestType,
    /// Loan duration magnitude, in `tenor_unit` units.
    pub tenor: Decimal,
    pub tenor_unit: TenorUnit,
    /// One-time fee added to the repayment burden.
    #[serde(default)]
    pub admin_fee: Money,
    /// Borrower's stated monthly income. Used only for affordability,
    /// never persisted.
    pub monthly_income: Money,
    /// Opaque to the engine; the registry collaborator resolves it.
    #[serde(default)]
    pub lender_name: String,
}

/// Computed metric set for one loan offer. Derived entirely from a
/// `LoanInput` plus the caller-supplied registration flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanMetrics {
    /// Principal + total interest + admin fee.
    pub total_repayment: Money,
    /// Periodic payment amount.
    pub monthly_installment: Money,
    /// Annualized percentage rate.
    pub effective_apr: Percent,
    /// Installment as a share of monthly income, unclamped.
    pub dti_ratio: Percent,
    /// Additive score in [0, 100].
    pub risk_score: u8,
    pub risk_level: RiskLevel,
}

/// Four-tier risk classification, a pure function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Rendah,
    Sedang,
    Tinggi,
    #[serde(rename = "Sangat Berbahaya")]
    SangatBerbahaya,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Rendah => write!(f, "Rendah"),
            RiskLevel::Sedang => write!(f, "Sedang"),
            RiskLevel::Tinggi => write!(f, "Tinggi"),
            RiskLevel::SangatBerbahaya => write!(f, "Sangat Berbahaya"),
        }
    }
}
