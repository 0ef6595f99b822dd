// ============================================================================
// Matcher Factory
// ============================================================================

use crate::domain::MatchingPolicy;
use crate::engine::{PriceTimePriority, ProRata};
use crate::interfaces::MatchingAlgorithm;

/// Create the matcher for a policy.
///
/// # Example
/// ```
/// use orderbook_matcher::prelude::*;
///
/// let matcher = create_matcher(MatchingPolicy::ProRata);
/// assert_eq!(matcher.name(), "ProRata");
/// ```
pub fn create_matcher(policy: MatchingPolicy) -> Box<dyn MatchingAlgorithm> {
    match policy {
        MatchingPolicy::PriceTime => Box::new(PriceTimePriority::new()),
        MatchingPolicy::ProRata => Box::new(ProRata::new()),
    }
}
