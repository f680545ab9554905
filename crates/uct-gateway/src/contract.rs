//! # Submission Contract
//!
//! The request/response pair and trait through which the core talks to a
//! Unicity Service. These are the only network-bound operations in the
//! stack; everything else is pure computation.
//!
//! ## Semantics
//!
//! On `submit`, the service derives `StateId = H(fingerprint(predicate) ‖
//! state_hash)`, rejects if that id is already recorded (double-spend) or
//! if the witness fails the predicate, and otherwise records
//! `StateId → transaction_hash` exactly once and returns proof of the
//! registration.
//!
//! ## Failure Semantics
//!
//! Timeouts and transport failures surface as
//! `ServiceError::Unavailable` and are verification failures to the
//! caller; retry policy belongs to outer layers, never to the core.
//! Cancelling an in-flight call aborts that single check — the caller
//! must report failure, not assume success.

use serde::{Deserialize, Serialize};

use uct_core::error::ServiceError;
use uct_core::Digest;
use uct_crypto::StateId;
use uct_predicate::{Predicate, Witness};

use crate::proof::InclusionProof;

/// A one-time commitment claim on a (condition, state) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// The locking condition of the state being spent.
    pub predicate: Predicate,
    /// The rolling hash of the state being spent.
    pub state_hash: Digest,
    /// Canonical hash of the transaction data being committed to.
    pub transaction_hash: Digest,
    /// Witness satisfying the predicate over the spending message.
    pub witness: Witness,
}

/// Successful registration: the claimed id and its proof.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// The StateId the service derived and recorded.
    pub state_id: StateId,
    /// Proof of the exactly-once registration.
    pub proof: InclusionProof,
}

/// The two operations of the Unicity Service boundary.
///
/// Implementations may be remote (wire transport is an outer concern) or
/// local models like [`crate::InMemoryUnicityService`]. Calls on
/// independent tokens may run concurrently; entries within one token's
/// history are verified strictly in sequence by the caller.
pub trait UnicityService {
    /// Submit a one-time commitment claim.
    fn submit(
        &self,
        request: SubmitRequest,
    ) -> impl std::future::Future<Output = Result<SubmitResponse, ServiceError>> + Send;

    /// Fetch a fresh inclusion proof for an already-registered StateId,
    /// or `None` if nothing is registered under it.
    fn inclusion_proof(
        &self,
        state_id: &StateId,
    ) -> impl std::future::Future<Output = Result<Option<InclusionProof>, ServiceError>> + Send;
}
