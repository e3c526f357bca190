//! Multi-factor risk scoring.
//!
//! Covers:
//! 1. **Legality** -- 50 points when the lender is not registered with the
//!    regulator.
//! 2. **Affordability** -- 15 points above 30% DTI, 30 points above 40%.
//! 3. **Rate burden** -- 10 points above 20% APR, 30 points above 36%.
//! 4. **Classification** -- four tiers at 25/50/75.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal_macros::dec;

use crate::types::{Percent, RiskLevel};

/// Additive risk score in [0, 100].
///
/// Registration status carries the single largest weight; the two financial
/// factors cap at 30 points each, so the top tier is out of reach for an
/// expensive but registered loan on one factor alone. The branch maxima sum
/// past 100, so the score saturates at the top of the range.
pub fn risk_score(is_registered: bool, dti_ratio: Percent, effective_apr: Percent) -> u8 {
    let mut score: u8 = 0;
    if !is_registered {
        score += 50;
    }
    if dti_ratio > dec!(40) {
        score += 30;
    } else if dti_ratio > dec!(30) {
        score += 15;
    }
    if effective_apr > dec!(36) {
        score += 30;
    } else if effective_apr > dec!(20) {
        score += 10;
    }
    score.min(100)
}

/// Tier classification, evaluated high to low. Exclusive bands.
pub fn classify_risk(score: u8) -> RiskLevel {
    if score >= 75 {
        RiskLevel::SangatBerbahaya
    } else if score >= 50 {
        RiskLevel::Tinggi
    } else if score >= 25 {
        RiskLevel::Sedang
    } else {
        RiskLevel::Rendah
    }
}
