// ============================================================================
// Fill Domain Model
// ============================================================================

use crate::domain::order::OrderId;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One side of a matched quantity between two orders.
///
/// Fills always come in reciprocal pairs: when order A records a fill of
/// volume `v` against B, B records a fill of volume `v` against A. Under
/// price-time matching the two records carry each side's counterparty
/// notional (the two prices can differ); under pro-rata both carry the
/// single shared level notional.
///
/// The record is deliberately limited to these three fields — matching is a
/// deterministic recomputation, and two runs over structurally identical
/// batches must produce identical fill lists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fill {
    /// Identifier of the order on the other side of this fill.
    pub counterparty: OrderId,

    /// Execution notional for this side of the fill.
    pub notional: Decimal,

    /// Filled quantity.
    pub volume: i64,
}

impl Fill {
    pub fn new(counterparty: OrderId, notional: Decimal, volume: i64) -> Self {
        Self {
            counterparty,
            notional,
            volume,
        }
    }

    /// Cash value of this fill (notional × volume).
    pub fn notional_value(&self) -> Decimal {
        self.notional * Decimal::from(self.volume)
    }
}
