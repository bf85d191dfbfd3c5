//! Membership and non-membership verification against attested packet state.

use alloy_primitives::{keccak256, B256};
use attestor_types::{decode_packet_attestation, AttestationProof, PacketAttestation};

use crate::error::AttestorClientError;
use crate::store::ClientEntry;
use crate::verify::verify_attestation;

/// Shared pipeline for both membership checks: frozen gate, trusted
/// timestamp lookup, envelope + attestation decode, quorum verification,
/// height match, and the path-hash scan. Returns the matched commitment and
/// the trusted timestamp at `proof_height`.
///
/// Duplicate path hashes never occur in attestations produced by a correct
/// attestor; if present anyway, the first match wins.
fn find_attested_commitment(
    entry: &ClientEntry,
    proof_height: u64,
    proof_bytes: &[u8],
    path: &[Vec<u8>],
) -> Result<(B256, u64), AttestorClientError> {
    if entry.client_state.is_frozen {
        return Err(AttestorClientError::FrozenClientState);
    }
    if path.len() != 1 {
        return Err(AttestorClientError::InvalidPathLength);
    }

    let consensus = entry
        .consensus_state(proof_height)
        .ok_or(AttestorClientError::ConsensusTimestampNotFound(proof_height))?;

    let proof = AttestationProof::decode(proof_bytes).map_err(AttestorClientError::InvalidProof)?;

    let attestation: PacketAttestation = decode_packet_attestation(&proof.attestation_data)
        .map_err(|_| AttestorClientError::InvalidAttestationData)?;

    verify_attestation(
        &entry.client_state,
        &proof.attestation_data,
        &proof.signatures,
    )?;

    if attestation.height != proof_height {
        return Err(AttestorClientError::HeightMismatch);
    }
    if attestation.packets.is_empty() {
        return Err(AttestorClientError::EmptyAttestation);
    }

    let path_hash = keccak256(&path[0]);

    let packet = attestation
        .packets
        .iter()
        .find(|p| p.path == path_hash)
        .ok_or(AttestorClientError::NotMember)?;

    Ok((packet.commitment, consensus.timestamp))
}

/// Verify that `value` is committed at `path` in the counterparty state
/// attested at `proof_height`.
///
/// # Errors
/// Pipeline errors from the shared checks, plus
/// [`AttestorClientError::EmptyValue`] for an empty value and
/// [`AttestorClientError::CommitmentMismatch`] if the attested commitment
/// differs from the expected 32-byte value.
pub fn verify_membership(
    entry: &ClientEntry,
    proof_height: u64,
    proof_bytes: &[u8],
    path: &[Vec<u8>],
    value: &[u8],
) -> Result<(), AttestorClientError> {
    if entry.client_state.is_frozen {
        return Err(AttestorClientError::FrozenClientState);
    }
    if value.is_empty() {
        return Err(AttestorClientError::EmptyValue);
    }

    let (commitment, _) = find_attested_commitment(entry, proof_height, proof_bytes, path)?;

    let expected: [u8; 32] = value
        .try_into()
        .map_err(|_| AttestorClientError::CommitmentMismatch)?;

    if commitment != B256::from(expected) {
        return Err(AttestorClientError::CommitmentMismatch);
    }

    Ok(())
}

/// Verify that nothing is committed at `path` in the counterparty state
/// attested at `proof_height`.
///
/// On success returns the trusted consensus timestamp at `proof_height`;
/// the packet-timeout path needs it to check expiration against the
/// counterparty's clock.
///
/// # Errors
/// Pipeline errors from the shared checks, plus
/// [`AttestorClientError::NonZeroCommitment`] if the matched commitment is
/// not all-zero.
pub fn verify_non_membership(
    entry: &ClientEntry,
    proof_height: u64,
    proof_bytes: &[u8],
    path: &[Vec<u8>],
) -> Result<u64, AttestorClientError> {
    let (commitment, timestamp) = find_attested_commitment(entry, proof_height, proof_bytes, path)?;

    if commitment != B256::ZERO {
        return Err(AttestorClientError::NonZeroCommitment);
    }

    Ok(timestamp)
}
