//! Error types for the attestation light client

use alloy_primitives::Address;
use attestor_types::CodecError;
use thiserror::Error;

/// Main error type for attestation light client operations.
///
/// Misbehaviour is deliberately absent: detecting equivocation is a
/// successful, side-effecting outcome reported through
/// [`UpdateResult::Misbehaviour`](crate::update::UpdateResult), not a
/// failure.
#[derive(Debug, Error)]
pub enum AttestorClientError {
    /// Client is frozen due to detected misbehaviour
    #[error("client state is frozen")]
    FrozenClientState,

    /// A client with this id has already been initialized
    #[error("client `{0}` already exists")]
    ClientAlreadyExists(String),

    /// No client with this id is known to the store
    #[error("client `{0}` not found")]
    ClientNotFound(String),

    /// Client id is required as a storage key
    #[error("client id cannot be empty")]
    InvalidClientId,

    /// No attestors provided at initialization
    #[error("no attestors provided")]
    NoAttestors,

    /// Quorum threshold is zero or exceeds the attestor count
    #[error("min required signatures must be positive and not exceed attestor count")]
    BadQuorum,

    /// Height cannot be zero
    #[error("height cannot be zero")]
    InvalidHeight,

    /// Timestamp cannot be zero
    #[error("timestamp cannot be zero")]
    InvalidTimestamp,

    /// Attested height and timestamp must both be non-zero
    #[error("height and timestamp must be non-zero")]
    InvalidState,

    /// Caller-declared height does not match the attested height
    #[error("expected height does not match proof height")]
    HeightMismatch,

    /// The proof envelope is oversized or cannot be deserialized
    #[error("proof validation failed: {0}")]
    InvalidProof(#[source] CodecError),

    /// The inner attestation payload cannot be decoded
    #[error("failed to decode attestation data")]
    InvalidAttestationData,

    /// Signatures must be exactly 65 bytes (r || s || v)
    #[error("signature must be exactly 65 bytes")]
    InvalidSignatureLength,

    /// The recovery primitive rejected the signature
    #[error("signature recovery failed")]
    SignatureRecoveryFailed,

    /// No signatures provided
    #[error("no signatures provided")]
    EmptySignatures,

    /// Fewer signatures than the quorum threshold
    #[error("minimum required signatures not provided")]
    ThresholdNotMet,

    /// Recovered address is not in the trusted attestor set
    #[error("address {0} not in trusted attestor set")]
    UnknownSigner(Address),

    /// The same signer appeared more than once
    #[error("signer {0} provided multiple times")]
    DuplicateSigner(Address),

    /// No trusted timestamp recorded at the requested height
    #[error("no trusted timestamp at height {0}")]
    ConsensusTimestampNotFound(u64),

    /// The attestation contains no packets
    #[error("no packets in attestation data")]
    EmptyAttestation,

    /// Membership value cannot be empty
    #[error("membership proof value cannot be empty")]
    EmptyValue,

    /// Exactly one path element is supported by this scheme
    #[error("expected path length of 1")]
    InvalidPathLength,

    /// Commitment path not present in the attested packet set
    #[error("commitment path not in attestation")]
    NotMember,

    /// The attested commitment does not match the expected value
    #[error("value does not match attested commitment")]
    CommitmentMismatch,

    /// Non-membership requires an all-zero commitment
    #[error("expected zero commitment for non-membership")]
    NonZeroCommitment,
}
