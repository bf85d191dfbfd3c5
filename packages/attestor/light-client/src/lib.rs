#![doc = "Attestation light client for IBC v2"]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

// serde_json is only exercised by the state serialization tests; the
// self-dependency exists so integration tests get the test-utils feature
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use attestor_light_client as _;

pub mod client;
pub mod client_state;
pub mod consensus_state;
pub mod crypto;
pub mod error;
pub mod membership;
pub mod store;
pub mod update;
pub mod verify;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::{AttestationLightClient, MembershipMsg, NonMembershipMsg};
pub use client_state::{ClientState, Status};
pub use consensus_state::ConsensusState;
pub use error::AttestorClientError;
pub use update::UpdateResult;
