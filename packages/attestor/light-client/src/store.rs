//! Height-indexed persistent state for client instances.
//!
//! Ledger-hosted deployments get per-height write atomicity from the host's
//! transaction serialization; this in-process store takes an explicit lock
//! per client id instead, since the freeze flag is shared mutable state
//! across heights.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::client_state::ClientState;
use crate::consensus_state::ConsensusState;
use crate::error::AttestorClientError;

/// A client instance and its height-indexed consensus states.
///
/// The consensus map is append-only: entries are never deleted or mutated
/// once created. Retention/pruning is an external concern.
#[derive(Debug)]
pub struct ClientEntry {
    /// The mutable client record
    pub client_state: ClientState,
    consensus_states: BTreeMap<u64, ConsensusState>,
}

impl ClientEntry {
    /// Create an entry with its initial consensus state.
    #[must_use]
    pub fn new(client_state: ClientState, initial_consensus: ConsensusState) -> Self {
        let mut consensus_states = BTreeMap::new();
        consensus_states.insert(initial_consensus.height, initial_consensus);
        Self {
            client_state,
            consensus_states,
        }
    }

    /// Look up the consensus state at a height, treating the zero-timestamp
    /// sentinel as absent.
    #[must_use]
    pub fn consensus_state(&self, height: u64) -> Option<&ConsensusState> {
        self.consensus_states
            .get(&height)
            .filter(|cns| cns.is_recorded())
    }

    /// Insert a consensus state at its height.
    ///
    /// At most one consensus state may exist per height; callers must route
    /// conflicting writes through the misbehaviour check in `update_client`
    /// rather than call this directly.
    ///
    /// # Errors
    /// Returns [`AttestorClientError::InvalidState`] if a recorded entry
    /// already exists at that height.
    pub fn insert_consensus_state(
        &mut self,
        consensus_state: ConsensusState,
    ) -> Result<(), AttestorClientError> {
        if self.consensus_state(consensus_state.height).is_some() {
            return Err(AttestorClientError::InvalidState);
        }
        self.consensus_states
            .insert(consensus_state.height, consensus_state);
        Ok(())
    }
}

/// In-process store keyed by client id.
///
/// Each client id maps to its own mutex so concurrent relayers racing on
/// the same instance serialize: exactly one writer wins a given height and
/// the loser observes the winner's state, which is what makes misbehaviour
/// detection sound under contention. Different client ids are fully
/// independent.
#[derive(Debug, Default)]
pub struct ClientStore {
    clients: RwLock<HashMap<String, Arc<Mutex<ClientEntry>>>>,
}

impl ClientStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new client instance.
    ///
    /// # Errors
    /// Returns [`AttestorClientError::ClientAlreadyExists`] if the id is
    /// taken.
    pub fn create_client(&self, entry: ClientEntry) -> Result<(), AttestorClientError> {
        let client_id = entry.client_state.client_id.clone();
        let mut clients = self
            .clients
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if clients.contains_key(&client_id) {
            return Err(AttestorClientError::ClientAlreadyExists(client_id));
        }
        clients.insert(client_id, Arc::new(Mutex::new(entry)));
        Ok(())
    }

    /// Fetch the lock handle for a client instance.
    ///
    /// # Errors
    /// Returns [`AttestorClientError::ClientNotFound`] for an unknown id.
    pub fn client(&self, client_id: &str) -> Result<Arc<Mutex<ClientEntry>>, AttestorClientError> {
        let clients = self.clients.read().unwrap_or_else(PoisonError::into_inner);
        clients
            .get(client_id)
            .cloned()
            .ok_or_else(|| AttestorClientError::ClientNotFound(client_id.to_string()))
    }
}
