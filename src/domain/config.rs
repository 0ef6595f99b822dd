// ============================================================================
// Matching Policy Configuration
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects the allocation policy applied to a batch.
///
/// Policy selection belongs to the host layer (configuration value, CLI
/// flag); the core only defines the variants and the factory that turns a
/// variant into a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchingPolicy {
    /// Strict price then arrival-time precedence, sequential fill.
    /// Use case: equity-style central limit order books.
    PriceTime,

    /// Proportional split of available counter-volume at each exact
    /// notional level, with largest-remainder rounding.
    /// Use case: derivatives-style size-proportional allocation.
    ProRata,
}

impl MatchingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingPolicy::PriceTime => "price-time",
            MatchingPolicy::ProRata => "pro-rata",
        }
    }
}
