// ============================================================================
// Engine Module
// Contains the allocation algorithms and shared fill plumbing
// ============================================================================

mod allocation;
mod price_time;
mod pro_rata;

pub mod factory;

pub use factory::create_matcher;
pub use price_time::PriceTimePriority;
pub use pro_rata::ProRata;

use crate::domain::Order;

/// Mutably borrow two distinct orders of one batch at once.
fn pair_mut(orders: &mut [Order], first: usize, second: usize) -> (&mut Order, &mut Order) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = orders.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = orders.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}

/// Execute a fill of `volume` between two crossing orders.
///
/// Both remaining volumes are decremented and reciprocal fill records are
/// appended, each carrying the *counterparty's* notional: under price-time
/// the two sides can execute at different prices (discriminatory pricing),
/// while under pro-rata the notionals are identical by construction.
fn execute_fill(orders: &mut [Order], first: usize, second: usize, volume: i64) {
    let (a, b) = pair_mut(orders, first, second);

    tracing::trace!(
        first = %a.id,
        second = %b.id,
        volume,
        "executing fill"
    );

    let (a_id, a_notional) = (a.id.clone(), a.notional);
    let (b_id, b_notional) = (b.id.clone(), b.notional);
    a.apply_fill(b_id, b_notional, volume);
    b.apply_fill(a_id, a_notional, volume);
}

/// Reset every order in the batch ahead of a matching pass.
fn reset_batch(orders: &mut [Order]) {
    for order in orders.iter_mut() {
        order.reset_match_state();
    }
}

/// Apply the end-of-call classification to every order in the batch.
fn finalize_batch(orders: &mut [Order]) {
    for order in orders.iter_mut() {
        order.finalize_match_state();
    }
}
