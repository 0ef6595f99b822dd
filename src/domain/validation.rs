// ============================================================================
// Batch Validation
// Caller-side precondition checks for order batches
// ============================================================================

use crate::domain::order::{Order, OrderId};
use std::collections::HashSet;
use std::fmt;

/// Precondition violations detected before a batch enters the matchers.
///
/// The matching algorithms themselves are total and never fail; they rely on
/// order identifiers being unique and stable (the pro-rata remainder
/// tie-break sorts by identifier). Hosts should reject a batch that fails
/// validation instead of feeding it to a matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// An order carries an empty identifier.
    EmptyOrderId { index: usize },
    /// Two orders in the batch share an identifier.
    DuplicateOrderId(OrderId),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::EmptyOrderId { index } => {
                write!(f, "order at index {} has an empty identifier", index)
            },
            BatchError::DuplicateOrderId(id) => {
                write!(f, "duplicate order identifier: {}", id)
            },
        }
    }
}

impl std::error::Error for BatchError {}

/// Result type alias for batch validation
pub type BatchResult<T> = Result<T, BatchError>;

/// Check the identifier preconditions the matchers depend on.
pub fn validate_batch(orders: &[Order]) -> BatchResult<()> {
    let mut seen = HashSet::with_capacity(orders.len());

    for (index, order) in orders.iter().enumerate() {
        if order.id.is_empty() {
            return Err(BatchError::EmptyOrderId { index });
        }
        if !seen.insert(&order.id) {
            return Err(BatchError::DuplicateOrderId(order.id.clone()));
        }
    }

    Ok(())
}
