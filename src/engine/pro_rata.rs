// ============================================================================
// Pro-Rata Matching Algorithm
// ============================================================================

use crate::domain::{MatchState, Order, Side};
use crate::engine::allocation::largest_remainder;
use crate::engine::{execute_fill, finalize_batch, reset_batch};
use crate::interfaces::MatchingAlgorithm;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Pro-rata allocation.
///
/// Orders are grouped per side by exact notional; each notional present on
/// both sides is an independent single-price-level auction. There is no
/// price crossing between levels: a buy at 5.00 and a sell at 4.99 never
/// interact.
///
/// At each level the side with the larger (or equal) aggregate volume is the
/// allocating side. Its members' proportional shares of
/// `min(total_buy, total_sell)` are rounded to integers with the
/// largest-remainder method and handed to the opposite side through a
/// forward-only cursor.
///
/// # Example
/// ```text
/// Buys at 5.00: A1 200, A2 75, A3 25 (total 300)
/// Sells at 5.00: B1 50, B2 50 (total 100)
///
/// Allocations: A1 67, A2 25, A3 8 — exactly 100.
/// ```
#[derive(Debug, Default)]
pub struct ProRata;

impl ProRata {
    pub fn new() -> Self {
        Self
    }
}

impl MatchingAlgorithm for ProRata {
    fn match_orders(&self, orders: &mut [Order]) {
        reset_batch(orders);

        // Group pending orders per side by exact notional. BTreeMap keeps
        // level iteration deterministic; levels are disjoint order sets, so
        // the iteration order cannot change any outcome.
        let mut buy_levels: BTreeMap<Decimal, Vec<usize>> = BTreeMap::new();
        let mut sell_levels: BTreeMap<Decimal, Vec<usize>> = BTreeMap::new();

        for (index, order) in orders.iter().enumerate() {
            if order.state() != MatchState::Pending {
                continue;
            }
            match order.side {
                Side::Buy => buy_levels.entry(order.notional).or_default().push(index),
                Side::Sell => sell_levels.entry(order.notional).or_default().push(index),
            }
        }

        for (notional, buys) in &buy_levels {
            let Some(sells) = sell_levels.get(notional) else {
                continue;
            };

            let total_buy: i64 = buys.iter().map(|&i| orders[i].remaining_volume()).sum();
            let total_sell: i64 = sells.iter().map(|&i| orders[i].remaining_volume()).sum();
            let match_volume = total_buy.min(total_sell);

            if match_volume == 0 {
                continue;
            }

            // The larger side's shares are pro-rated; the smaller side is
            // consumed in arrival (batch) order through the cursor.
            let (allocating, allocated_to) = if total_buy >= total_sell {
                (buys, sells)
            } else {
                (sells, buys)
            };

            tracing::debug!(
                %notional,
                total_buy,
                total_sell,
                match_volume,
                "allocating level"
            );

            let allocations = largest_remainder(orders, allocating, match_volume);
            distribute(orders, &allocations, allocated_to);
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
        "ProRata"
    }
}

/// Hand each allocating member's integer quota to the opposite side of the
/// level through a single forward-only cursor.
///
/// A counterparty is current until its remaining volume reaches zero; every
/// fill takes `min(outstanding quota, counterparty remaining)`, so no member
/// ever fills past its allocation and no counterparty past its volume.
fn distribute(orders: &mut [Order], allocations: &[(usize, i64)], allocated_to: &[usize]) {
    let mut cursor = 0;

    for &(member, quota) in allocations {
        if quota == 0 || orders[member].remaining_volume() == 0 {
            continue;
        }

        let mut outstanding = quota;
        while outstanding > 0 && cursor < allocated_to.len() {
            let counterparty = allocated_to[cursor];

            let volume = orders[counterparty]
                .remaining_volume()
                .min(outstanding);
            if volume == 0 {
                cursor += 1;
                continue;
            }

            execute_fill(orders, member, counterparty, volume);
            outstanding -= volume;

            if orders[counterparty].remaining_volume() == 0 {
                cursor += 1;
            }
        }
    }
}
