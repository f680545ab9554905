//! # Transactions
//!
//! The transition records of the protocol: `TransactionData` (what the
//! sender commits to), `Transaction` (data bound to the state being
//! spent), and `CertifiedTransaction` (a transaction made authoritative
//! by witness and inclusion proof).
//!
//! ## Canonical Hash Rule
//!
//! The transaction hash is `sha256_digest(CanonicalBytes(data))` — JCS
//! over the serde model, binary material as lowercase hex, absent
//! optional fields omitted entirely. Every peer must reproduce these
//! bytes bit-for-bit or hash equality breaks silently, which is why the
//! only constructor path runs through `CanonicalBytes`.

use serde::{Deserialize, Serialize};

use uct_core::error::CanonicalizationError;
use uct_core::{sha256_digest, BlindingMask, Bytes, CanonicalBytes, Digest, TokenId, TokenType};
use uct_gateway::InclusionProof;
use uct_predicate::{Predicate, Witness};

/// Genesis payload fixing a token's identity and class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintData {
    /// The token's permanent identifier.
    pub token_id: TokenId,
    /// Application-level token class.
    pub token_type: TokenType,
    /// Opaque token payload fixed at mint.
    pub token_data: Bytes,
    /// Optional fungible-value payload.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub coin_data: Option<Bytes>,
    /// Optional human-readable mint justification reference.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

/// What a sender commits to: who may spend next, and the mask that
/// advances the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    /// Locking condition of the next state.
    pub recipient_predicate: Predicate,
    /// Auxiliary data of the next state.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recipient_auxiliary_data: Option<Bytes>,
    /// Recipient-chosen randomness advancing the state hash.
    pub blinding_mask: BlindingMask,
    /// Present on genesis only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mint: Option<MintData>,
}

impl TransactionData {
    /// Transfer payload: no mint data.
    pub fn transfer(
        recipient_predicate: Predicate,
        recipient_auxiliary_data: Option<Bytes>,
        blinding_mask: BlindingMask,
    ) -> Self {
        Self {
            recipient_predicate,
            recipient_auxiliary_data,
            blinding_mask,
            mint: None,
        }
    }

    /// Genesis payload: transfer shape plus mint data.
    pub fn mint(
        mint: MintData,
        recipient_predicate: Predicate,
        recipient_auxiliary_data: Option<Bytes>,
        blinding_mask: BlindingMask,
    ) -> Self {
        Self {
            recipient_predicate,
            recipient_auxiliary_data,
            blinding_mask,
            mint: Some(mint),
        }
    }

    /// The canonical transaction hash of this payload.
    pub fn digest(&self) -> Result<Digest, CanonicalizationError> {
        Ok(sha256_digest(&CanonicalBytes::new(self)?))
    }
}

/// Transaction data bound to the state it spends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// State hash of the position being spent.
    pub current_state_hash: Digest,
    /// The committed payload.
    pub data: TransactionData,
}

/// A transaction plus everything that makes it authoritative: the witness
/// satisfying the spent state's condition, the declared canonical hash,
/// and the service's proof of exactly-once registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertifiedTransaction {
    /// The underlying transaction.
    pub transaction: Transaction,
    /// Witness over the spending message.
    pub witness: Witness,
    /// Declared canonical hash of `transaction.data`.
    pub transaction_hash: Digest,
    /// Proof that the service registered this claim exactly once.
    pub inclusion_proof: InclusionProof,
}

impl CertifiedTransaction {
    /// Assemble a certified transaction, computing the canonical hash.
    pub fn new(
        transaction: Transaction,
        witness: Witness,
        inclusion_proof: InclusionProof,
    ) -> Result<Self, CanonicalizationError> {
        let transaction_hash = transaction.data.digest()?;
        Ok(Self {
            transaction,
            witness,
            transaction_hash,
            inclusion_proof,
        })
    }
}
