// ============================================================================
// Matching Algorithm Interface
// Defines the contract for interchangeable allocation policies
// ============================================================================

use crate::domain::Order;

/// Strategy pattern interface for batch allocation policies.
/// Implementations: PriceTimePriority, ProRata.
pub trait MatchingAlgorithm: Send + Sync {
    /// Run one matching pass over a batch of orders, mutating it in place.
    ///
    /// The pass is a pure, from-scratch recomputation: every order is reset
    /// (remaining volume restored, fills cleared, classification back to
    /// `Pending` or `InvalidOrder`), allocation runs, and every order is
    /// reclassified. Never fails for any input, including an empty batch.
    ///
    /// The exclusive borrow gives a single call the whole batch for its
    /// duration; callers that share a batch between threads must serialize
    /// calls or operate on disjoint batches.
    fn match_orders(&self, orders: &mut [Order]);

    /// Algorithm name for logging/metrics.
    fn name(&self) -> &str;

    /// Whether a buy order's price is acceptable to a sell order's price.
    fn crosses(&self, buy: &Order, sell: &Order) -> bool {
        buy.notional >= sell.notional
    }
}
