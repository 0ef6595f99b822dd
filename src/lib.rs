// ============================================================================
// Orderbook Matcher Library
// Batch order matching with interchangeable allocation policies
// ============================================================================

//! # Orderbook Matcher
//!
//! Allocates crossing buy/sell orders of a batch to each other under two
//! interchangeable policies.
//!
//! ## Features
//!
//! - **Price-time priority**: strict price then arrival-time precedence,
//!   sequential fill, discriminatory per-counterparty pricing
//! - **Pro-rata allocation**: proportional split of available counter-volume
//!   at each exact notional level, with exact integer conservation via
//!   largest-remainder rounding
//! - **Shared state-machine contract**: both policies reset, allocate and
//!   reclassify the same way, so callers can swap policies without touching
//!   surrounding code
//! - **Total by construction**: a matching pass never fails, for any input
//!
//! ## Example
//!
//! ```rust
//! use orderbook_matcher::prelude::*;
//! use chrono::{TimeZone, Utc};
//! use rust_decimal::Decimal;
//!
//! let mut batch = vec![
//!     Order::new(
//!         "A",
//!         "A1",
//!         Side::Buy,
//!         150,
//!         Decimal::new(500, 2), // 5.00
//!         Utc.with_ymd_and_hms(2025, 6, 1, 9, 27, 0).unwrap(),
//!     ),
//!     Order::new(
//!         "B",
//!         "B1",
//!         Side::Sell,
//!         100,
//!         Decimal::new(500, 2),
//!         Utc.with_ymd_and_hms(2025, 6, 1, 10, 21, 0).unwrap(),
//!     ),
//! ];
//!
//! let matcher = create_matcher(MatchingPolicy::PriceTime);
//! matcher.match_orders(&mut batch);
//!
//! assert_eq!(batch[0].state(), MatchState::PartialMatch);
//! assert_eq!(batch[0].remaining_volume(), 50);
//! assert_eq!(batch[1].state(), MatchState::FullMatch);
//! assert_eq!(batch[1].fills().len(), 1);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        validate_batch, BatchError, BatchResult, Fill, MatchState, MatchingPolicy, Order, OrderId,
        Side,
    };
    pub use crate::engine::{create_matcher, PriceTimePriority, ProRata};
    pub use crate::interfaces::MatchingAlgorithm;
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;

    const LEVELS: [&str; 4] = ["4.50", "5.00", "5.25", "6.00"];

    fn arb_batch() -> impl Strategy<Value = Vec<Order>> {
        prop::collection::vec(
            (any::<bool>(), -50i64..300, 0usize..LEVELS.len(), 0i64..90),
            0..24,
        )
        .prop_map(|specs| {
            let base = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (is_buy, volume, level, minute))| {
                    Order::new(
                        format!("P{}", i % 5),
                        format!("ORD-{:03}", i),
                        if is_buy { Side::Buy } else { Side::Sell },
                        volume,
                        LEVELS[level].parse::<Decimal>().unwrap(),
                        base + Duration::minutes(minute),
                    )
                })
                .collect()
        })
    }

    fn matchers() -> [Box<dyn MatchingAlgorithm>; 2] {
        [
            create_matcher(MatchingPolicy::PriceTime),
            create_matcher(MatchingPolicy::ProRata),
        ]
    }

    fn assert_conservation(orders: &[Order]) {
        for order in orders {
            if order.volume <= 0 {
                assert_eq!(order.state(), MatchState::InvalidOrder);
                assert!(order.fills().is_empty());
                continue;
            }
            assert!(order.remaining_volume() >= 0);
            assert!(order.remaining_volume() <= order.volume);
            assert_eq!(order.remaining_volume(), order.volume - order.filled_volume());
        }
    }

    fn assert_symmetry(orders: &[Order]) {
        for order in orders {
            for fill in order.fills() {
                let counterparty = orders
                    .iter()
                    .find(|o| o.id == fill.counterparty)
                    .expect("fill references an order in the batch");
                let reciprocal = counterparty
                    .fills()
                    .iter()
                    .filter(|f| f.counterparty == order.id && f.volume == fill.volume)
                    .count();
                assert!(
                    reciprocal >= 1,
                    "missing reciprocal fill {} -> {}",
                    order.id,
                    fill.counterparty
                );
            }
        }
        let total_fills: usize = orders.iter().map(|o| o.fills().len()).sum();
        assert_eq!(total_fills % 2, 0);
    }

    proptest! {
        #[test]
        fn conservation_holds_after_every_pass(mut batch in arb_batch()) {
            for matcher in matchers() {
                matcher.match_orders(&mut batch);
                assert_conservation(&batch);
            }
        }

        #[test]
        fn fills_are_reciprocal(mut batch in arb_batch()) {
            for matcher in matchers() {
                matcher.match_orders(&mut batch);
                assert_symmetry(&batch);
            }
        }

        #[test]
        fn matching_is_deterministic(batch in arb_batch()) {
            for matcher in matchers() {
                let mut first = batch.clone();
                let mut second = batch.clone();
                matcher.match_orders(&mut first);
                matcher.match_orders(&mut second);
                prop_assert_eq!(&first, &second);
            }
        }

        #[test]
        fn pro_rata_allocates_each_level_exactly(mut batch in arb_batch()) {
            // Expected matched volume per level, from the valid input alone.
            let mut buy_totals: BTreeMap<Decimal, i64> = BTreeMap::new();
            let mut sell_totals: BTreeMap<Decimal, i64> = BTreeMap::new();
            for order in batch.iter().filter(|o| o.volume > 0) {
                let totals = match order.side {
                    Side::Buy => &mut buy_totals,
                    Side::Sell => &mut sell_totals,
                };
                *totals.entry(order.notional).or_default() += order.volume;
            }

            create_matcher(MatchingPolicy::ProRata).match_orders(&mut batch);

            for (notional, buy_total) in &buy_totals {
                let sell_total = sell_totals.get(notional).copied().unwrap_or(0);
                let expected = (*buy_total).min(sell_total);
                let matched: i64 = batch
                    .iter()
                    .filter(|o| o.side == Side::Buy && o.notional == *notional)
                    .map(|o| o.filled_volume())
                    .sum();
                prop_assert_eq!(matched, expected, "level {}", notional);
            }
        }

        #[test]
        fn no_pass_ever_panics_or_overfills(mut batch in arb_batch()) {
            for matcher in matchers() {
                matcher.match_orders(&mut batch);
                for order in &batch {
                    if order.volume > 0 {
                        prop_assert!(order.state().is_final());
                    }
                }
            }
        }
    }
}
