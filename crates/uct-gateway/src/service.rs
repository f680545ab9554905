//! # In-Memory Unicity Service
//!
//! A reference model of the Unicity Service: the exactly-once registry,
//! the per-round commitment tree, and certificate signing, all in one
//! process. Backs the protocol property tests (no-replay, condition
//! gating at submission) and local end-to-end pipelines.
//!
//! ## The Spent-State Set
//!
//! The registry inside this type is the single piece of shared mutable
//! state in the whole system. It is owned exclusively by the service and
//! reachable only through the two [`UnicityService`] operations — no other
//! component reads or writes it.

use std::collections::BTreeMap;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use uct_core::error::ServiceError;
use uct_core::{Digest, Timestamp};
use uct_crypto::ed25519::Ed25519KeyPair;
use uct_crypto::merkle::{audit_path, merkle_root};
use uct_crypto::{derive_state_id, spending_message, StateId};

use crate::contract::{SubmitRequest, SubmitResponse, UnicityService};
use crate::proof::{commitment_leaf, InclusionProof, TrustAnchor, UnicityCertificate};

/// The append-only exactly-once registry.
///
/// A BTreeMap keyed by StateId gives a deterministic leaf order for the
/// commitment tree: the same registered set always certifies the same
/// root.
struct SpentStateSet {
    entries: BTreeMap<StateId, Digest>,
    round: u64,
}

/// An in-process Unicity Service.
pub struct InMemoryUnicityService {
    signer: Ed25519KeyPair,
    registry: Mutex<SpentStateSet>,
}

impl InMemoryUnicityService {
    /// Start an empty service with a fresh random signing key.
    pub fn new() -> Self {
        Self::with_signer(Ed25519KeyPair::generate())
    }

    /// Start an empty service signing certificates with the given key.
    pub fn with_signer(signer: Ed25519KeyPair) -> Self {
        Self {
            signer,
            registry: Mutex::new(SpentStateSet {
                entries: BTreeMap::new(),
                round: 0,
            }),
        }
    }

    /// The trust anchor clients use to verify this service's certificates.
    pub fn trust_anchor(&self) -> TrustAnchor {
        TrustAnchor::new(self.signer.public_key())
    }

    /// Number of registered commitments.
    pub async fn registered_count(&self) -> usize {
        self.registry.lock().await.entries.len()
    }

    /// Build an inclusion proof for a registered id against the current
    /// round. Caller must hold the registry lock.
    fn build_proof(
        &self,
        set: &SpentStateSet,
        state_id: &StateId,
        timestamp: Timestamp,
    ) -> Result<InclusionProof, ServiceError> {
        let leaves: Vec<Digest> = set
            .entries
            .iter()
            .map(|(id, tx)| commitment_leaf(id, tx))
            .collect();
        let index = set
            .entries
            .keys()
            .position(|id| id == state_id)
            .ok_or_else(|| ServiceError::Unavailable("state id not registered".into()))?;
        let root = merkle_root(&leaves)
            .map_err(|e| ServiceError::Unavailable(format!("commitment tree: {e}")))?;
        let path = audit_path(&leaves, index)
            .map_err(|e| ServiceError::Unavailable(format!("commitment tree: {e}")))?;
        let certificate = UnicityCertificate::issue(root, set.round, timestamp, &self.signer)
            .map_err(|e| ServiceError::Unavailable(format!("certificate: {e}")))?;
        Ok(InclusionProof { path, certificate })
    }
}

impl Default for InMemoryUnicityService {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicityService for InMemoryUnicityService {
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, ServiceError> {
        let fingerprint = request.predicate.fingerprint();
        let state_id = derive_state_id(&fingerprint, &request.state_hash);
        let mut set = self.registry.lock().await;

        if set.entries.contains_key(&state_id) {
            warn!(%state_id, "rejected double-spend attempt");
            return Err(ServiceError::DoubleSpend {
                state_id: state_id.digest().clone(),
            });
        }

        let now = Timestamp::now();
        let message = spending_message(&request.state_hash, &request.transaction_hash);
        if !request
            .predicate
            .evaluate(now, &message, &request.witness, None)
        {
            debug!(%state_id, "rejected witness");
            return Err(ServiceError::ConditionRejected);
        }

        set.entries
            .insert(state_id.clone(), request.transaction_hash.clone());
        set.round += 1;
        debug!(%state_id, round = set.round, "commitment registered");

        let proof = self.build_proof(&set, &state_id, now)?;
        Ok(SubmitResponse { state_id, proof })
    }

    async fn inclusion_proof(
        &self,
        state_id: &StateId,
    ) -> Result<Option<InclusionProof>, ServiceError> {
        let set = self.registry.lock().await;
        if !set.entries.contains_key(state_id) {
            return Ok(None);
        }
        self.build_proof(&set, state_id, Timestamp::now()).map(Some)
    }
}
