//! Signature quorum verification.

use alloy_primitives::Address;

use crate::client_state::ClientState;
use crate::crypto::{recover_attestor_address, sha256_digest};
use crate::error::AttestorClientError;

/// Verify attestation signatures against the trusted attestor set.
///
/// Every signature must recover to a distinct, trusted attestor and the
/// count must meet the quorum threshold. Signature order does not affect
/// the outcome; processing is sequential and fails fast on the first
/// violation. Read-only, no side effects.
///
/// # Errors
/// - [`AttestorClientError::EmptySignatures`] if no signatures are provided
/// - [`AttestorClientError::ThresholdNotMet`] if fewer than
///   `min_required_sigs` are provided
/// - recovery errors from [`recover_attestor_address`]
/// - [`AttestorClientError::DuplicateSigner`] if an address recovers twice
/// - [`AttestorClientError::UnknownSigner`] if an address is untrusted
pub fn verify_attestation(
    client_state: &ClientState,
    attestation_data: &[u8],
    raw_signatures: &[Vec<u8>],
) -> Result<(), AttestorClientError> {
    if raw_signatures.is_empty() {
        return Err(AttestorClientError::EmptySignatures);
    }
    if raw_signatures.len() < usize::from(client_state.min_required_sigs) {
        return Err(AttestorClientError::ThresholdNotMet);
    }

    let message_hash = sha256_digest(attestation_data);

    // Recover addresses and check duplicates + trust in a single pass
    let mut recovered_addresses: Vec<Address> = Vec::with_capacity(raw_signatures.len());

    for raw_sig in raw_signatures {
        let recovered_address = recover_attestor_address(&message_hash, raw_sig)?;

        if recovered_addresses.contains(&recovered_address) {
            return Err(AttestorClientError::DuplicateSigner(recovered_address));
        }

        if !client_state.attestor_addresses.contains(&recovered_address) {
            return Err(AttestorClientError::UnknownSigner(recovered_address));
        }

        recovered_addresses.push(recovered_address);
    }

    Ok(())
}
