#![doc = "Wire types shared by all attestation light client implementations"]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

// hex is only exercised by the ABI layout tests
#[cfg(test)]
use hex as _;
#[cfg(test)]
use rstest as _;

pub mod attestation;
pub mod error;
pub mod proof;

pub use attestation::{
    decode_packet_attestation, decode_state_attestation, PacketAttestation, PacketCompact,
    StateAttestation,
};
pub use error::CodecError;
pub use proof::{AttestationProof, MAX_PROOF_SIZE};

// Re-exported so downstream crates can ABI-encode the attestation structs
// without depending on alloy-sol-types directly
pub use alloy_sol_types::SolValue;
