// ============================================================================
// Order Domain Model
// ============================================================================

use crate::domain::fill::Fill;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Caller-supplied order identifier.
///
/// Identifiers must be unique within a batch; the pro-rata remainder
/// tie-break sorts by identifier, which is why `Ord` is derived.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

// ============================================================================
// Match State Machine
// ============================================================================

pub mod state {
    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Classification of an order after a matching pass.
    ///
    /// `Pending` is the initial state; a matcher call resets every order to
    /// `Pending` (or `InvalidOrder` for non-positive volume) before
    /// allocating, then finalizes to one of the terminal classifications.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub enum MatchState {
        Pending,
        NoMatch,
        PartialMatch,
        FullMatch,
        /// Non-positive volume. Terminal: assigned at reset time and never
        /// overwritten by finalization.
        InvalidOrder,
    }

    impl MatchState {
        /// Classification applied once per matcher call, after all
        /// allocation completes.
        ///
        /// | remaining | fills | result       |
        /// |-----------|-------|--------------|
        /// | 0         | >0    | FullMatch    |
        /// | >0        | >0    | PartialMatch |
        /// | >0        | 0     | NoMatch      |
        /// | otherwise | —     | unchanged    |
        ///
        /// The fall-through arm is what keeps `InvalidOrder` terminal: an
        /// invalid order has `remaining <= 0` with zero fills and retains
        /// its current state.
        pub fn finalize(self, remaining_volume: i64, fill_count: usize) -> Self {
            match (remaining_volume, fill_count) {
                (0, n) if n > 0 => MatchState::FullMatch,
                (r, n) if r > 0 && n > 0 => MatchState::PartialMatch,
                (r, 0) if r > 0 => MatchState::NoMatch,
                _ => self,
            }
        }

        /// Whether this state can no longer change within the current call.
        pub fn is_final(&self) -> bool {
            !matches!(self, MatchState::Pending)
        }

        /// Whether the order received at least one fill.
        pub fn is_matched(&self) -> bool {
            matches!(self, MatchState::PartialMatch | MatchState::FullMatch)
        }
    }
}

use state::MatchState;

// ============================================================================
// Order Entity
// ============================================================================

/// One resting interest in a batch.
///
/// Identity fields are fixed at construction; the matching state (remaining
/// volume, fill list, classification) is private and mutated only by the
/// matchers, which keeps the conservation invariant
/// `remaining_volume = volume - filled_volume()` in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    /// Owning party (e.g. the submitting firm).
    pub party: String,
    pub id: OrderId,
    pub side: Side,
    /// Original volume, fixed at creation.
    pub volume: i64,
    /// Per-unit price level.
    pub notional: Decimal,
    /// Arrival time; earlier arrival wins price-time ties.
    pub timestamp: DateTime<Utc>,

    state: MatchState,
    remaining_volume: i64,
    fills: SmallVec<[Fill; 4]>,
}

impl Order {
    pub fn new(
        party: impl Into<String>,
        id: impl Into<OrderId>,
        side: Side,
        volume: i64,
        notional: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            party: party.into(),
            id: id.into(),
            side,
            volume,
            notional,
            timestamp,
            state: MatchState::Pending,
            remaining_volume: volume,
            fills: SmallVec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Unfilled quantity.
    pub fn remaining_volume(&self) -> i64 {
        self.remaining_volume
    }

    /// Fills recorded against this order, in matching order (which is not
    /// necessarily counterparty priority order).
    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Total filled quantity across all fills.
    pub fn filled_volume(&self) -> i64 {
        self.fills.iter().map(|fill| fill.volume).sum()
    }

    // ========================================================================
    // Matching-state mutators (engine only)
    // ========================================================================

    /// Restore the order to its pre-matching state.
    ///
    /// Every matcher call starts here: remaining volume back to the original
    /// volume, fills cleared, classification back to `Pending` — or straight
    /// to `InvalidOrder` for non-positive volume, which excludes the order
    /// from all grouping, sorting and filling.
    pub(crate) fn reset_match_state(&mut self) {
        self.remaining_volume = self.volume;
        self.fills.clear();
        self.state = if self.volume <= 0 {
            MatchState::InvalidOrder
        } else {
            MatchState::Pending
        };
    }

    /// Record a fill against this order and decrement the remaining volume.
    pub(crate) fn apply_fill(&mut self, counterparty: OrderId, notional: Decimal, volume: i64) {
        debug_assert!(volume > 0 && volume <= self.remaining_volume);
        self.remaining_volume -= volume;
        self.fills.push(Fill::new(counterparty, notional, volume));
    }

    /// Apply the end-of-call classification table.
    pub(crate) fn finalize_match_state(&mut self) {
        self.state = self.state.finalize(self.remaining_volume, self.fills.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_order_creation() {
        let order = Order::new("A", "A1", Side::Buy, 100, Decimal::new(500, 2), ts());

        assert_eq!(order.state(), MatchState::Pending);
        assert_eq!(order.remaining_volume(), 100);
        assert_eq!(order.filled_volume(), 0);
        assert!(order.fills().is_empty());
    }

    #[test]
    fn test_reset_restores_pre_matching_state() {
        let mut order = Order::new("A", "A1", Side::Buy, 100, Decimal::new(500, 2), ts());

        order.apply_fill(OrderId::new("B1"), Decimal::new(500, 2), 60);
        order.finalize_match_state();
        assert_eq!(order.state(), MatchState::PartialMatch);

        order.reset_match_state();
        assert_eq!(order.state(), MatchState::Pending);
        assert_eq!(order.remaining_volume(), 100);
        assert!(order.fills().is_empty());
    }

    #[test]
    fn test_reset_marks_non_positive_volume_invalid() {
        let mut zero = Order::new("A", "A1", Side::Buy, 0, Decimal::new(500, 2), ts());
        let mut negative = Order::new("B", "B1", Side::Sell, -10, Decimal::new(500, 2), ts());

        zero.reset_match_state();
        negative.reset_match_state();

        assert_eq!(zero.state(), MatchState::InvalidOrder);
        assert_eq!(negative.state(), MatchState::InvalidOrder);
    }

    #[test]
    fn test_fills_conserve_volume() {
        let mut order = Order::new("A", "A1", Side::Buy, 100, Decimal::new(500, 2), ts());

        order.apply_fill(OrderId::new("B1"), Decimal::new(500, 2), 70);
        order.apply_fill(OrderId::new("B2"), Decimal::new(500, 2), 30);

        assert_eq!(order.remaining_volume(), 0);
        assert_eq!(order.filled_volume(), 100);
        assert_eq!(order.volume, order.remaining_volume() + order.filled_volume());
    }

    #[test]
    fn test_finalize_classification_table() {
        assert_eq!(MatchState::Pending.finalize(0, 1), MatchState::FullMatch);
        assert_eq!(MatchState::Pending.finalize(50, 1), MatchState::PartialMatch);
        assert_eq!(MatchState::Pending.finalize(100, 0), MatchState::NoMatch);
        // Invalid orders fall through unchanged.
        assert_eq!(
            MatchState::InvalidOrder.finalize(0, 0),
            MatchState::InvalidOrder
        );
        assert_eq!(
            MatchState::InvalidOrder.finalize(-10, 0),
            MatchState::InvalidOrder
        );
    }

    #[test]
    fn test_invalid_order_survives_finalize() {
        let mut order = Order::new("A", "A1", Side::Buy, -5, Decimal::new(500, 2), ts());

        order.reset_match_state();
        order.finalize_match_state();

        assert_eq!(order.state(), MatchState::InvalidOrder);
    }

    #[test]
    fn test_order_id_ordering() {
        let a = OrderId::new("A1");
        let b = OrderId::new("B1");
        assert!(a < b);
        assert_eq!(a.as_str(), "A1");
    }
}
