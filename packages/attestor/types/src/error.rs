//! Error types for the attestation wire format

use thiserror::Error;

use crate::proof::MAX_PROOF_SIZE;

/// Errors raised while decoding the proof envelope or the inner
/// ABI-encoded attestation payloads.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The outer proof envelope exceeds the size bound; rejected before parsing
    #[error("proof size {size} exceeds maximum {MAX_PROOF_SIZE}")]
    ProofTooLarge {
        /// Size of the submitted envelope in bytes
        size: usize,
    },

    /// The outer proof envelope cannot be deserialized
    #[error("failed to deserialize attestation proof: {0}")]
    InvalidProof(#[source] borsh::io::Error),

    /// The inner attestation payload cannot be ABI-decoded
    #[error("failed to decode attestation data")]
    InvalidAttestationData,
}
