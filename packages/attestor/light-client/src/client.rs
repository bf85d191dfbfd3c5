//! The relayer-facing light client entry points.

use std::sync::PoisonError;

use alloy_primitives::Address;
use tracing::info;

use crate::client_state::{ClientState, Status};
use crate::consensus_state::ConsensusState;
use crate::error::AttestorClientError;
use crate::membership;
use crate::store::{ClientEntry, ClientStore};
use crate::update::{self, UpdateResult};

/// Message for a membership verification call, issued by the router during
/// packet receive processing.
#[derive(Debug, Clone)]
pub struct MembershipMsg {
    /// Target client instance
    pub client_id: String,
    /// Height of the consensus state the proof is anchored to
    pub height: u64,
    /// Encoded proof envelope
    pub proof: Vec<u8>,
    /// Commitment path; exactly one element is supported
    pub path: Vec<Vec<u8>>,
    /// Expected 32-byte commitment value
    pub value: Vec<u8>,
}

/// Message for a non-membership verification call, issued by the router
/// during packet timeout processing.
#[derive(Debug, Clone)]
pub struct NonMembershipMsg {
    /// Target client instance
    pub client_id: String,
    /// Height of the consensus state the proof is anchored to
    pub height: u64,
    /// Encoded proof envelope
    pub proof: Vec<u8>,
    /// Commitment path; exactly one element is supported
    pub path: Vec<Vec<u8>>,
}

/// Attestation-based light client tracking any number of counterparty
/// chains, one instance per client id.
///
/// Each call is a single atomic unit of work: all hashing and recovery is
/// synchronous pure computation, and the per-client lock in the store
/// serializes racing relayers. Retry/backoff policy belongs to the caller.
#[derive(Debug, Default)]
pub struct AttestationLightClient {
    store: ClientStore,
}

impl AttestationLightClient {
    /// Create a light client with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize a new client instance.
    ///
    /// Persists the client state (active, `latest_height = initial_height`)
    /// and the initial consensus state atomically; on any validation error
    /// no partial state is created.
    ///
    /// # Errors
    /// Configuration errors per [`ClientState::new`], plus
    /// [`AttestorClientError::InvalidHeight`] /
    /// [`AttestorClientError::InvalidTimestamp`] for zero initial values and
    /// [`AttestorClientError::ClientAlreadyExists`] for a taken id.
    pub fn initialize(
        &self,
        client_id: &str,
        attestor_addresses: Vec<Address>,
        min_required_sigs: u8,
        initial_height: u64,
        initial_timestamp: u64,
    ) -> Result<(), AttestorClientError> {
        let client_state = ClientState::new(
            client_id,
            attestor_addresses,
            min_required_sigs,
            initial_height,
        )?;

        if initial_height == 0 {
            return Err(AttestorClientError::InvalidHeight);
        }
        if initial_timestamp == 0 {
            return Err(AttestorClientError::InvalidTimestamp);
        }

        let num_attestors = client_state.attestor_addresses.len();
        self.store.create_client(ClientEntry::new(
            client_state,
            ConsensusState {
                height: initial_height,
                timestamp: initial_timestamp,
            },
        ))?;

        info!(
            client_id,
            num_attestors,
            quorum = min_required_sigs,
            height = initial_height,
            timestamp = initial_timestamp,
            "attestation light client initialized"
        );

        Ok(())
    }

    /// Submit a quorum-signed state attestation for `new_height`.
    ///
    /// # Errors
    /// See [`update::update_client`].
    pub fn update_client(
        &self,
        client_id: &str,
        new_height: u64,
        proof: &[u8],
    ) -> Result<UpdateResult, AttestorClientError> {
        let client = self.store.client(client_id)?;
        let mut entry = client.lock().unwrap_or_else(PoisonError::into_inner);
        update::update_client(&mut entry, new_height, proof)
    }

    /// Verify that a value is committed in counterparty state.
    ///
    /// # Errors
    /// See [`membership::verify_membership`].
    pub fn verify_membership(&self, msg: &MembershipMsg) -> Result<(), AttestorClientError> {
        let client = self.store.client(&msg.client_id)?;
        let entry = client.lock().unwrap_or_else(PoisonError::into_inner);
        membership::verify_membership(&entry, msg.height, &msg.proof, &msg.path, &msg.value)
    }

    /// Verify that a path is absent from counterparty state. Returns the
    /// trusted consensus timestamp at the proof height for the caller's
    /// timeout-expiration check.
    ///
    /// # Errors
    /// See [`membership::verify_non_membership`].
    pub fn verify_non_membership(
        &self,
        msg: &NonMembershipMsg,
    ) -> Result<u64, AttestorClientError> {
        let client = self.store.client(&msg.client_id)?;
        let entry = client.lock().unwrap_or_else(PoisonError::into_inner);
        membership::verify_non_membership(&entry, msg.height, &msg.proof, &msg.path)
    }

    /// Snapshot of the client state.
    ///
    /// # Errors
    /// [`AttestorClientError::ClientNotFound`] for an unknown id.
    pub fn client_state(&self, client_id: &str) -> Result<ClientState, AttestorClientError> {
        let client = self.store.client(client_id)?;
        let entry = client.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entry.client_state.clone())
    }

    /// Consensus state recorded at a height, if any.
    ///
    /// # Errors
    /// [`AttestorClientError::ClientNotFound`] for an unknown id.
    pub fn consensus_state(
        &self,
        client_id: &str,
        height: u64,
    ) -> Result<Option<ConsensusState>, AttestorClientError> {
        let client = self.store.client(client_id)?;
        let entry = client.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entry.consensus_state(height).copied())
    }

    /// Highest height ever accepted for this client.
    ///
    /// # Errors
    /// [`AttestorClientError::ClientNotFound`] for an unknown id.
    pub fn latest_height(&self, client_id: &str) -> Result<u64, AttestorClientError> {
        Ok(self.client_state(client_id)?.latest_height)
    }

    /// Lifecycle status of this client.
    ///
    /// # Errors
    /// [`AttestorClientError::ClientNotFound`] for an unknown id.
    pub fn status(&self, client_id: &str) -> Result<Status, AttestorClientError> {
        Ok(self.client_state(client_id)?.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestAttestor;
    use rstest::rstest;

    fn attestor_addresses(attestors: &[TestAttestor]) -> Vec<Address> {
        attestors.iter().map(|a| a.address).collect()
    }

    #[test]
    fn initialize_succeeds() {
        let attestors: Vec<_> = (1..=3).map(TestAttestor::new).collect();
        let client = AttestationLightClient::new();

        client
            .initialize("c0", attestor_addresses(&attestors), 2, 100, 1000)
            .unwrap();

        assert_eq!(client.latest_height("c0").unwrap(), 100);
        assert_eq!(client.status("c0").unwrap(), Status::Active);
        assert_eq!(
            client.consensus_state("c0", 100).unwrap().unwrap().timestamp,
            1000
        );
    }

    #[rstest]
    #[case::zero_height(0, 1000)]
    #[case::zero_timestamp(100, 0)]
    fn initialize_invalid_initial_state(#[case] height: u64, #[case] timestamp: u64) {
        let attestors: Vec<_> = (1..=3).map(TestAttestor::new).collect();
        let client = AttestationLightClient::new();
        assert!(client
            .initialize("c0", attestor_addresses(&attestors), 1, height, timestamp)
            .is_err());
        // No partial state
        assert!(matches!(
            client.client_state("c0"),
            Err(AttestorClientError::ClientNotFound(_))
        ));
    }

    #[test]
    fn initialize_bad_quorum() {
        let attestors: Vec<_> = (1..=3).map(TestAttestor::new).collect();
        let client = AttestationLightClient::new();
        assert!(matches!(
            client.initialize("c0", attestor_addresses(&attestors), 4, 100, 1000),
            Err(AttestorClientError::BadQuorum)
        ));
    }

    #[test]
    fn initialize_twice_fails() {
        let attestors: Vec<_> = (1..=3).map(TestAttestor::new).collect();
        let client = AttestationLightClient::new();

        client
            .initialize("c0", attestor_addresses(&attestors), 2, 100, 1000)
            .unwrap();
        assert!(matches!(
            client.initialize("c0", attestor_addresses(&attestors), 2, 100, 1000),
            Err(AttestorClientError::ClientAlreadyExists(_))
        ));
    }

    #[test]
    fn operations_on_unknown_client_fail() {
        let client = AttestationLightClient::new();
        assert!(matches!(
            client.update_client("missing", 1, &[]),
            Err(AttestorClientError::ClientNotFound(_))
        ));
    }
}
