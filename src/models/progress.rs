use rust_decimal::Decimal;

use super::SpendingLimit;

/// Display severity derived from the spend ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Normal,
    Warning,
    Danger,
}

/// Progress against the active limit. Derived, never stored: recompute it
/// from the latest `(limit, spending)` pair on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitProgress {
    /// Spend as a percentage of the limit, clamped to 100.
    pub percentage: Decimal,
    pub band: ColorBand,
}

impl LimitProgress {
    /// The band uses the unclamped value: anything at or past the limit is
    /// danger, 80% and up is warning.
    pub fn derive(limit: &SpendingLimit, total_spending: Decimal) -> Self {
        let raw = if limit.amount > Decimal::ZERO {
            total_spending / limit.amount * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let band = if raw >= Decimal::ONE_HUNDRED {
            ColorBand::Danger
        } else if raw >= Decimal::new(80, 0) {
            ColorBand::Warning
        } else {
            ColorBand::Normal
        };

        Self {
            percentage: raw.min(Decimal::ONE_HUNDRED),
            band,
        }
    }
}
