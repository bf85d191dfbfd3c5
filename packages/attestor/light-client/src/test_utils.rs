//! Test utilities: deterministic attestor keys and proof construction.

use alloy_primitives::Address;
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use attestor_types::{AttestationProof, PacketAttestation, PacketCompact, StateAttestation};

use crate::crypto::sha256_digest;

/// Test attestor with a deterministic key for unit and integration tests.
pub struct TestAttestor {
    signer: PrivateKeySigner,
    /// Address derived from the attestor's public key
    pub address: Address,
}

impl TestAttestor {
    /// Create a test attestor from a deterministic seed.
    ///
    /// # Panics
    /// Panics if the seeded key bytes are rejected, which cannot happen for
    /// the non-zero keys produced here.
    #[must_use]
    pub fn new(seed: u8) -> Self {
        let mut key_bytes = [0u8; 32];
        key_bytes[0] = seed;
        key_bytes[31] = 1; // Ensure non-zero

        let signer =
            PrivateKeySigner::from_bytes(&key_bytes.into()).expect("valid key bytes for testing");
        let address = signer.address();

        Self { signer, address }
    }

    /// Sign attestation data; returns a 65-byte signature with an
    /// Ethereum-style recovery id.
    ///
    /// # Panics
    /// Panics if signing fails, which cannot happen for a valid local key.
    #[must_use]
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        let message_hash = sha256_digest(data);
        let sig = self
            .signer
            .sign_hash_sync(&message_hash.into())
            .expect("signing should succeed");

        let mut result = Vec::with_capacity(65);
        result.extend_from_slice(&sig.r().to_be_bytes::<32>());
        result.extend_from_slice(&sig.s().to_be_bytes::<32>());
        result.push(u8::from(sig.v()) + 27);
        result
    }
}

fn proof_over(attestors: &[TestAttestor], attestation_data: Vec<u8>) -> Vec<u8> {
    let signatures = attestors
        .iter()
        .map(|a| a.sign(&attestation_data))
        .collect();
    AttestationProof {
        attestation_data,
        signatures,
    }
    .encode()
    .expect("envelope encoding should succeed")
}

/// Encode a quorum-signed proof envelope over a `StateAttestation`.
#[must_use]
pub fn state_proof(attestors: &[TestAttestor], height: u64, timestamp: u64) -> Vec<u8> {
    use attestor_types::SolValue;
    proof_over(attestors, StateAttestation { height, timestamp }.abi_encode())
}

/// Encode a quorum-signed proof envelope over a `PacketAttestation`.
#[must_use]
pub fn packet_proof(
    attestors: &[TestAttestor],
    height: u64,
    packets: &[([u8; 32], [u8; 32])],
) -> Vec<u8> {
    use attestor_types::SolValue;
    let attestation = PacketAttestation {
        height,
        packets: packets
            .iter()
            .map(|(path, commitment)| PacketCompact::new(*path, *commitment))
            .collect(),
    };
    proof_over(attestors, attestation.abi_encode())
}
