// ============================================================================
// Price-Time Priority Matching Algorithm
// ============================================================================

use crate::domain::{MatchState, Order, Side};
use crate::engine::{execute_fill, finalize_batch, reset_batch};
use crate::interfaces::MatchingAlgorithm;

/// Price-time priority matching.
///
/// Buy orders are walked in priority order (highest notional first, earlier
/// arrival breaking ties) against sell orders sorted the opposite way
/// (lowest notional first). Each crossing pair fills `min` of the two
/// remaining volumes, and each side records the counterparty's notional —
/// discriminatory pricing, not a uniform clearing price.
///
/// # Example
/// ```text
/// Buys:  B1 200 @ 5.00 (t=10:21)    Sells: D1 150 @ 5.00 (t=10:32)
///        C1 150 @ 5.00 (t=10:26)           E1 100 @ 5.00 (t=10:33)
///
/// B1 fills 150 against D1 and 50 against E1; C1 fills the remaining 50.
/// ```
#[derive(Debug, Default)]
pub struct PriceTimePriority;

impl PriceTimePriority {
    pub fn new() -> Self {
        Self
    }
}

impl MatchingAlgorithm for PriceTimePriority {
    fn match_orders(&self, orders: &mut [Order]) {
        reset_batch(orders);

        let mut buys: Vec<usize> = Vec::new();
        let mut sells: Vec<usize> = Vec::new();
        for (index, order) in orders.iter().enumerate() {
            if order.state() == MatchState::InvalidOrder {
                continue;
            }
            match order.side {
                Side::Buy => buys.push(index),
                Side::Sell => sells.push(index),
            }
        }

        // Buy side: higher notional first, then earlier arrival. The sort is
        // stable, so full ties keep batch order.
        buys.sort_by(|&a, &b| {
            orders[b]
                .notional
                .cmp(&orders[a].notional)
                .then_with(|| orders[a].timestamp.cmp(&orders[b].timestamp))
        });

        // Sell side: lower notional first, then earlier arrival.
        sells.sort_by(|&a, &b| {
            orders[a]
                .notional
                .cmp(&orders[b].notional)
                .then_with(|| orders[a].timestamp.cmp(&orders[b].timestamp))
        });

        // One forward-only cursor over the sorted sells, shared across the
        // whole buy walk: a sell is current at most once and is passed over
        // only when exhausted or priced above every remaining buy.
        let mut cursor = 0;

        for &buy in &buys {
            if orders[buy].remaining_volume() == 0 {
                continue;
            }

            while cursor < sells.len() {
                let sell = sells[cursor];

                if orders[sell].remaining_volume() == 0 {
                    cursor += 1;
                    continue;
                }

                if !self.crosses(&orders[buy], &orders[sell]) {
                    // Sells are sorted ascending and buys descending: a sell
                    // priced above this buy is priced above every later buy
                    // too, so leave the cursor in place and move on.
                    break;
                }

                let volume = orders[buy]
                    .remaining_volume()
                    .min(orders[sell].remaining_volume());
                execute_fill(orders, buy, sell, volume);

                if orders[sell].remaining_volume() == 0 {
                    cursor += 1;
                }
                if orders[buy].remaining_volume() == 0 {
                    break;
                }
            }
        }

        finalize_batch(orders);

        tracing::debug!(
            algorithm = self.name(),
            orders = orders.len(),
            matched = orders.iter().filter(|o| o.state().is_matched()).count(),
            "matched batch"
        );
    }

    fn name(&self) -> &str {
        "PriceTime"
    }
}
