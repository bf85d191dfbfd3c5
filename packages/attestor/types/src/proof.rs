//! The outer proof envelope submitted by relayers.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::CodecError;

/// Maximum accepted envelope size. Oversized payloads are rejected before
/// any parsing to bound decode cost against adversarial input.
pub const MAX_PROOF_SIZE: usize = 64 * 1024; // 64 KiB

/// Proof envelope carrying the exact signed bytes and the attestor
/// signatures over their SHA-256 digest.
///
/// Borsh is used for the envelope (vs JSON which is ~2.5x larger); the
/// inner `attestation_data` stays ABI-encoded so the signed bytes are
/// identical on every chain.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct AttestationProof {
    /// ABI-encoded `StateAttestation` or `PacketAttestation` bytes, exactly
    /// as hashed and signed by the attestors
    pub attestation_data: Vec<u8>,
    /// Raw 65-byte signatures in `r || s || v` format
    pub signatures: Vec<Vec<u8>>,
}

impl AttestationProof {
    /// Decode an envelope, enforcing [`MAX_PROOF_SIZE`] first.
    ///
    /// # Errors
    /// Returns [`CodecError::ProofTooLarge`] for oversized payloads and
    /// [`CodecError::InvalidProof`] if deserialization fails.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() > MAX_PROOF_SIZE {
            return Err(CodecError::ProofTooLarge { size: bytes.len() });
        }
        Self::try_from_slice(bytes).map_err(CodecError::InvalidProof)
    }

    /// Encode the envelope to bytes.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidProof`] if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        borsh::to_vec(self).map_err(CodecError::InvalidProof)
    }
}
