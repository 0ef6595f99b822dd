// ============================================================================
// Largest-Remainder Allocation
// Integer conservation for proportional splits
// ============================================================================

use crate::domain::Order;

/// Split `match_volume` across `members` proportionally to their remaining
/// volumes, returning `(index, allocation)` pairs in distribution order.
///
/// Plain floor rounding of the proportional shares strands up to
/// `members.len() - 1` units; the largest-remainder method hands those
/// stranded units back one at a time, so the returned allocations always sum
/// to exactly `match_volume`. The shortfall goes to the largest fractional
/// remainders first, tie-broken by ascending order identifier.
///
/// Shares are computed with i128 multiply/divide-with-remainder rather than
/// floating-point ratios, so results are bit-exact on every platform.
///
/// Distribution order is the remainder order (largest first). The caller
/// pairs allocations with counterparties through a forward-only cursor, so
/// this ordering is part of the deterministic output, not a presentation
/// detail.
pub(crate) fn largest_remainder(
    orders: &[Order],
    members: &[usize],
    match_volume: i64,
) -> Vec<(usize, i64)> {
    let total: i64 = members
        .iter()
        .map(|&index| orders[index].remaining_volume())
        .sum();

    // Ratios are only computed against a non-zero side total.
    if total == 0 || match_volume == 0 {
        return members.iter().map(|&index| (index, 0)).collect();
    }

    let mut shares: Vec<(usize, i64, i64)> = Vec::with_capacity(members.len());
    let mut floor_sum: i64 = 0;

    for &index in members {
        let product = orders[index].remaining_volume() as i128 * match_volume as i128;
        let floor = (product / total as i128) as i64;
        let remainder = (product % total as i128) as i64;

        shares.push((index, floor, remainder));
        floor_sum += floor;
    }

    // floor_sum <= match_volume, and the gap is at most the number of
    // members with a non-zero remainder.
    let shortfall = match_volume - floor_sum;

    shares.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| orders[a.0].id.cmp(&orders[b.0].id)));

    for share in shares.iter_mut().take(shortfall as usize) {
        share.1 += 1;
    }

    shares
        .into_iter()
        .map(|(index, allocation, _)| (index, allocation))
        .collect()
}
