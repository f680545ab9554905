//! # Inclusion Proofs and Unicity Certificates
//!
//! Evidence that a (StateId → transaction hash) commitment was registered
//! exactly once.
//!
//! ## Security Invariant
//!
//! Proof verification is self-contained. Everything needed to check a
//! proof travels inside it: the Merkle audit path to the round root and
//! the service's signature over that root. A verifier holding a
//! [`TrustAnchor`] (the service's public key, distributed out of band)
//! can verify years later, offline, without the service existing anymore.
//!
//! The certificate signs the canonical bytes of its payload, so two peers
//! computing the payload independently agree on the signed message.

use serde::{Deserialize, Serialize};

use uct_core::error::VerificationError;
use uct_core::{CanonicalBytes, Digest, Timestamp};
use uct_crypto::ed25519::{self, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use uct_crypto::merkle::{leaf_hash, verify_audit_path, PathStep};
use uct_crypto::StateId;

/// The service verifying key a proof consumer trusts.
///
/// Distributed out of band (deployment configuration); compromise of this
/// key is compromise of every certificate it ever signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustAnchor {
    /// The service's certificate-signing public key.
    pub public_key: Ed25519PublicKey,
}

impl TrustAnchor {
    /// Trust the given service key.
    pub fn new(public_key: Ed25519PublicKey) -> Self {
        Self { public_key }
    }
}

/// A signed commitment to one registration round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnicityCertificate {
    /// Root of the commitment tree at this round.
    pub root: Digest,
    /// Monotone round counter.
    pub round: u64,
    /// Registration time stamped by the service.
    pub timestamp: Timestamp,
    /// Service signature over the canonical payload (root, round, timestamp).
    pub signature: Ed25519Signature,
}

/// The canonically-signed body of a certificate.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CertificatePayload<'a> {
    root: &'a Digest,
    round: u64,
    timestamp: &'a Timestamp,
}

impl UnicityCertificate {
    /// Issue a certificate for a round root. Service-side only.
    pub fn issue(
        root: Digest,
        round: u64,
        timestamp: Timestamp,
        signer: &Ed25519KeyPair,
    ) -> Result<Self, VerificationError> {
        let payload = CanonicalBytes::new(&CertificatePayload {
            root: &root,
            round,
            timestamp: &timestamp,
        })?;
        let signature = signer.sign(&payload);
        Ok(Self {
            root,
            round,
            timestamp,
            signature,
        })
    }

    /// Check the service signature against a trust anchor.
    pub fn verify(&self, anchor: &TrustAnchor) -> Result<(), VerificationError> {
        let payload = CanonicalBytes::new(&CertificatePayload {
            root: &self.root,
            round: self.round,
            timestamp: &self.timestamp,
        })?;
        ed25519::verify(&payload, &self.signature, &anchor.public_key)
            .map_err(|_| VerificationError::ProofInvalid("certificate signature invalid".into()))
    }
}

/// Self-contained evidence of an exactly-once registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionProof {
    /// Audit path from the commitment leaf to the certified root.
    pub path: Vec<PathStep>,
    /// The signed round commitment.
    pub certificate: UnicityCertificate,
}

impl InclusionProof {
    /// Verify this proof for the given commitment, offline.
    ///
    /// Recomputes the commitment leaf, folds the audit path, compares the
    /// result with the certified root, and checks the certificate
    /// signature. Any divergence is `VerificationError::ProofInvalid`.
    pub fn verify(
        &self,
        state_id: &StateId,
        transaction_hash: &Digest,
        anchor: &TrustAnchor,
    ) -> Result<(), VerificationError> {
        let leaf = commitment_leaf(state_id, transaction_hash);
        if !verify_audit_path(&leaf, &self.path, &self.certificate.root) {
            return Err(VerificationError::ProofInvalid(
                "audit path does not reach certified root".into(),
            ));
        }
        self.certificate.verify(anchor)
    }

    /// Registration time of the commitment, for time-dependent predicates.
    pub fn timestamp(&self) -> Timestamp {
        self.certificate.timestamp
    }
}

/// The commitment-tree leaf for one registration:
/// `leaf_hash(state_id ‖ transaction_hash)`.
pub fn commitment_leaf(state_id: &StateId, transaction_hash: &Digest) -> Digest {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(state_id.digest().as_bytes());
    data[32..].copy_from_slice(transaction_hash.as_bytes());
    leaf_hash(&data)
}
