pub mod error;
pub mod types;

pub mod validate;
pub mod tenor;
pub mod interest;
pub mod installment;
pub mod affordability;
pub mod scoring;
pub mod metrics;
pub mod schedule;

pub use error::LoanRiskError;
pub use metrics::compute_loan_metrics;
pub use types::*;

/// Standard result type for all loan-risk operations
pub type LoanRiskResult<T> = Result<T, LoanRiskError>;
