// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod fill;
pub mod order;
pub mod validation;

pub use config::MatchingPolicy;
pub use fill::Fill;
pub use order::{Order, OrderId, Side};
pub use validation::{validate_batch, BatchError, BatchResult};

// Re-export state machine
pub use order::state::MatchState;
