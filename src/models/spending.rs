use rust_decimal::Decimal;
use serde::Deserialize;

/// Aggregate spend inside the active limit's current window, as reported by
/// the transaction aggregation service. Defaults to zero until a fetch lands.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSpending {
    pub total_spending: Decimal,
}
