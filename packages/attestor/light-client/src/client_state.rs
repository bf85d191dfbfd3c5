//! Client state for the attestation light client

use std::collections::HashSet;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::AttestorClientError;

/// Lifecycle status of a client instance. `Active` is initial; the
/// transition to `Frozen` happens only on detected misbehaviour and is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Accepting updates and verifications
    Active,
    /// Permanently frozen; every state-changing and verification call fails
    Frozen,
}

/// Client state tracking one counterparty chain through a trusted
/// attestor set.
///
/// `client_id`, `attestor_addresses` and `min_required_sigs` are immutable
/// after initialization; only `latest_height` and `is_frozen` are mutated,
/// and all mutation funnels through `update_client`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    /// Stable identifier, used as a storage key
    pub client_id: String,
    /// Trusted attestor addresses (20 bytes each, secp256k1-derived)
    pub attestor_addresses: Vec<Address>,
    /// Minimum number of distinct attestor signatures per attestation
    pub min_required_sigs: u8,
    /// Highest height ever accepted; monotonically non-decreasing
    pub latest_height: u64,
    /// Whether the client is frozen due to misbehaviour
    pub is_frozen: bool,
}

impl ClientState {
    /// Validate the attestor configuration and construct an active client
    /// state.
    ///
    /// # Errors
    /// - [`AttestorClientError::InvalidClientId`] if `client_id` is empty
    /// - [`AttestorClientError::NoAttestors`] if the attestor set is empty
    /// - [`AttestorClientError::BadQuorum`] if the threshold is zero or
    ///   exceeds the attestor count
    /// - [`AttestorClientError::DuplicateSigner`] if an address repeats
    pub fn new(
        client_id: impl Into<String>,
        attestor_addresses: Vec<Address>,
        min_required_sigs: u8,
        latest_height: u64,
    ) -> Result<Self, AttestorClientError> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(AttestorClientError::InvalidClientId);
        }
        if attestor_addresses.is_empty() {
            return Err(AttestorClientError::NoAttestors);
        }
        if min_required_sigs == 0 || usize::from(min_required_sigs) > attestor_addresses.len() {
            return Err(AttestorClientError::BadQuorum);
        }

        let mut seen: HashSet<Address> = HashSet::with_capacity(attestor_addresses.len());
        for address in &attestor_addresses {
            if !seen.insert(*address) {
                return Err(AttestorClientError::DuplicateSigner(*address));
            }
        }

        Ok(Self {
            client_id,
            attestor_addresses,
            min_required_sigs,
            latest_height,
            is_frozen: false,
        })
    }

    /// Permanently freeze this client. There is no unfreeze.
    pub const fn freeze(&mut self) {
        self.is_frozen = true;
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> Status {
        if self.is_frozen {
            Status::Frozen
        } else {
            Status::Active
        }
    }
}
