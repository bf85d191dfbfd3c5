//! Signature digest and address recovery.

use alloy_primitives::{Address, Signature, B256, U256};
use sha2::{Digest, Sha256};

use crate::error::AttestorClientError;

/// Expected signature length: 64-byte (r, s) plus one recovery byte.
pub const SIGNATURE_LEN: usize = 65;
/// Attestor addresses are Ethereum-style 20-byte addresses on every chain.
pub const ATTESTOR_ADDRESS_LEN: usize = 20;

const ETH_RECOVERY_ID_OFFSET: u8 = 27;

/// SHA-256 digest of the signed attestation bytes.
pub type MessageHash = [u8; 32];

/// Compute the signing digest over the attestation data. Computed once per
/// proof and reused across all signature checks so every signer is
/// guaranteed to have attested to byte-identical data.
#[must_use]
pub fn sha256_digest(data: &[u8]) -> MessageHash {
    Sha256::digest(data).into()
}

/// Recover the attestor address from a precomputed message hash and a
/// 65-byte recoverable secp256k1 signature.
///
/// Accepts both Ethereum-style (27/28) and canonical (0/1) recovery ids.
/// The address is the last 20 bytes of the keccak-256 of the uncompressed
/// recovered public key.
///
/// # Errors
/// - [`AttestorClientError::InvalidSignatureLength`] unless the signature is
///   exactly 65 bytes
/// - [`AttestorClientError::SignatureRecoveryFailed`] for an invalid recovery
///   id, a malformed curve point, or a zero-address recovery result
pub fn recover_attestor_address(
    message_hash: &MessageHash,
    signature: &[u8],
) -> Result<Address, AttestorClientError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(AttestorClientError::InvalidSignatureLength);
    }

    let v = signature[SIGNATURE_LEN - 1];
    let recovery_id = if v >= ETH_RECOVERY_ID_OFFSET {
        v - ETH_RECOVERY_ID_OFFSET
    } else {
        v
    };
    if recovery_id > 1 {
        return Err(AttestorClientError::SignatureRecoveryFailed);
    }

    let sig = Signature::new(
        U256::from_be_slice(&signature[..32]),
        U256::from_be_slice(&signature[32..64]),
        recovery_id != 0,
    );

    let address = sig
        .recover_address_from_prehash(&B256::from(*message_hash))
        .map_err(|_| AttestorClientError::SignatureRecoveryFailed)?;

    // The recovery primitive should never yield the zero address for valid
    // input; treat it as a recovery failure rather than a valid signer
    if address == Address::ZERO {
        return Err(AttestorClientError::SignatureRecoveryFailed);
    }

    Ok(address)
}
