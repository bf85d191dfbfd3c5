//! Consensus state for the attestation light client

use serde::{Deserialize, Serialize};

/// Trusted `(height, timestamp)` snapshot of the counterparty chain.
///
/// Written lazily by the first accepted update at a height and never
/// mutated afterwards; a conflicting write at an existing height freezes
/// the client instead of overwriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusState {
    /// Counterparty chain height
    pub height: u64,
    /// Timestamp in Unix seconds; zero is the sentinel for "not recorded"
    pub timestamp: u64,
}

impl ConsensusState {
    /// Whether a trusted timestamp is actually recorded here. A zero
    /// timestamp is treated identically to a missing entry by all callers.
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        self.timestamp != 0
    }
}
