//! Labels shown on a price card.

use crate::model::PriceRecord;
use dfp_utils::numbers::group_thousands;

/// Shown instead of an amount when upstream has no fare for the day.
pub const NO_FARE_PLACEHOLDER: &str = "-";

/// "$ 12,345" for a real fare, "-" when `amount <= 0`.
pub fn amount_label(record: &PriceRecord) -> String {
    if record.has_fare() {
        format!("$ {}", group_thousands(record.amount))
    } else {
        NO_FARE_PLACEHOLDER.to_string()
    }
}
