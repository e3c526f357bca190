use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::TenorUnit;

// 30-day months are a deliberate calendar approximation, inherited from the
// product's original design. Not calendar-aware.
const DAYS_PER_MONTH: Decimal = dec!(30);

/// Tenor expressed in months.
pub fn tenor_in_months(tenor: Decimal, unit: TenorUnit) -> Decimal {
    match unit {
        TenorUnit::Months => tenor,
        TenorUnit::Days => tenor / DAYS_PER_MONTH,
    }
}

/// Tenor expressed in days.
pub fn tenor_in_days(tenor: Decimal, unit: TenorUnit) -> Decimal {
    match unit {
        TenorUnit::Days => tenor,
        TenorUnit::Months => tenor * DAYS_PER_MONTH,
    }
}

/// Whole number of payment periods used to split the repayment burden.
///
/// Months rounded half-up; a tenor short enough to round to zero months
/// still gets one period rather than a zero divisor.
pub fn installment_periods(tenor_months: Decimal) -> Decimal {
    let rounded = tenor_months.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ONE
    } else {
        rounded
    }
}
