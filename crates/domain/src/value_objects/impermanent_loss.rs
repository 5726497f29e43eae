use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of moving a constant-product position to a new price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpermanentLossResult {
    pub token1_initial_amount: Decimal,
    pub token2_initial_amount: Decimal,
    pub token1_new_amount: Decimal,
    pub token2_new_amount: Decimal,
    /// Token2 per token1 at entry.
    pub initial_price: Decimal,
    pub new_price: Decimal,
    /// Signed price move, e.g. `-50` for a halving.
    pub price_change_percent: Decimal,
    /// Value of the untouched tokens at the new price.
    pub hold_value: Decimal,
    /// Value of the rebalanced pool share at the new price.
    pub lp_value: Decimal,
    /// `lp_value - hold_value`, never positive for a constant-product pool.
    pub impermanent_loss: Decimal,
    /// Absolute loss relative to `hold_value`, in percent.
    pub impermanent_loss_percent: Decimal,
}
