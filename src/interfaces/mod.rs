// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod matching_algorithm;

pub use matching_algorithm::MatchingAlgorithm;
