//! Client update and misbehaviour detection.

use attestor_types::{decode_state_attestation, AttestationProof};
use tracing::{debug, info, warn};

use crate::consensus_state::ConsensusState;
use crate::error::AttestorClientError;
use crate::store::ClientEntry;
use crate::verify::verify_attestation;

/// Outcome of an `update_client` call. Matches the counterparty
/// implementations' result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum UpdateResult {
    /// A new consensus state was recorded
    Update = 0,
    /// Conflicting timestamp detected at an existing height; the client is
    /// now frozen. This is a successful detection, not an error: reverting
    /// the state change would erase the evidence.
    Misbehaviour = 1,
    /// The identical consensus state already existed; nothing changed
    NoOp = 2,
}

/// Apply a state attestation to a client instance.
///
/// Accepts out-of-order heights as long as they do not conflict with an
/// existing entry; `latest_height` only ever advances. Safe to call
/// redundantly.
///
/// # Errors
/// - [`AttestorClientError::FrozenClientState`] if the client is frozen
/// - [`AttestorClientError::InvalidProof`] /
///   [`AttestorClientError::InvalidAttestationData`] for malformed proofs
/// - quorum errors from [`verify_attestation`]
/// - [`AttestorClientError::InvalidState`] for a zero attested height or
///   timestamp
/// - [`AttestorClientError::HeightMismatch`] if the caller-declared height
///   does not match the attested height
pub fn update_client(
    entry: &mut ClientEntry,
    new_height: u64,
    proof_bytes: &[u8],
) -> Result<UpdateResult, AttestorClientError> {
    if entry.client_state.is_frozen {
        return Err(AttestorClientError::FrozenClientState);
    }

    let proof = AttestationProof::decode(proof_bytes).map_err(AttestorClientError::InvalidProof)?;

    let attestation = decode_state_attestation(&proof.attestation_data)
        .map_err(|_| AttestorClientError::InvalidAttestationData)?;

    verify_attestation(
        &entry.client_state,
        &proof.attestation_data,
        &proof.signatures,
    )?;

    if attestation.height == 0 || attestation.timestamp == 0 {
        return Err(AttestorClientError::InvalidState);
    }

    if new_height != attestation.height {
        return Err(AttestorClientError::HeightMismatch);
    }

    if let Some(existing) = entry.consensus_state(attestation.height) {
        if existing.timestamp == attestation.timestamp {
            debug!(
                client_id = %entry.client_state.client_id,
                height = attestation.height,
                timestamp = attestation.timestamp,
                "consensus state already exists with matching timestamp"
            );
            return Ok(UpdateResult::NoOp);
        }

        // Equivocation: two quorum-backed timestamps for one height
        warn!(
            client_id = %entry.client_state.client_id,
            height = attestation.height,
            existing_timestamp = existing.timestamp,
            conflicting_timestamp = attestation.timestamp,
            "misbehaviour detected, freezing client"
        );
        entry.client_state.freeze();
        return Ok(UpdateResult::Misbehaviour);
    }

    entry.insert_consensus_state(ConsensusState {
        height: attestation.height,
        timestamp: attestation.timestamp,
    })?;

    if attestation.height > entry.client_state.latest_height {
        entry.client_state.latest_height = attestation.height;
    }

    info!(
        client_id = %entry.client_state.client_id,
        height = attestation.height,
        timestamp = attestation.timestamp,
        latest_height = entry.client_state.latest_height,
        "recorded consensus state"
    );

    Ok(UpdateResult::Update)
}
