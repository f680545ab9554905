//! # State Hash Chain
//!
//! The pure derivations behind token state identity:
//!
//! - genesis: `state_hash₀ = H(token_id ‖ MINT_SUFFIX)`
//! - transition i: `state_hash_{i+1} = H(state_hash_i ‖ blinding_mask_i)`
//! - `StateId = H(fingerprint(condition) ‖ state_hash)` — the key under
//!   which the Unicity Service records spentness, exactly once.
//! - `spending_message = H(state_hash ‖ transaction_hash)` — what a
//!   witness must authorize.
//!
//! All functions here are total over well-formed inputs and free of side
//! effects; component widths are fixed by the types, so each concatenation
//! parses unambiguously. Collision resistance of SHA-256 is what makes
//! `StateId` injective in practice: two distinct (condition, state) pairs
//! colliding would exhibit a hash collision.

use serde::{Deserialize, Serialize};

use uct_core::{sha256_concat, BlindingMask, Digest, TokenId};

/// Fixed public suffix seeding every genesis state hash.
pub const MINT_SUFFIX: &[u8] = b"MINT_SUFFIX";

/// The one-time spentness key for a (condition, state) pair.
///
/// Ordering delegates to the digest byte order; the service uses it for a
/// deterministic commitment-tree layout.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(Digest);

impl StateId {
    /// The underlying digest value.
    pub fn digest(&self) -> &Digest {
        &self.0
    }

    /// Consume into the underlying digest.
    pub fn into_digest(self) -> Digest {
        self.0
    }
}

impl std::fmt::Debug for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.bytes.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "StateId({prefix}…)")
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "state:{}", self.0.to_hex())
    }
}

/// Derive the genesis state hash for a token: `H(token_id ‖ MINT_SUFFIX)`.
pub fn derive_mint_state_hash(token_id: &TokenId) -> Digest {
    sha256_concat(&[token_id.as_slice(), MINT_SUFFIX])
}

/// Advance the chain one transition: `H(state_hash ‖ blinding_mask)`.
pub fn derive_next_state_hash(state_hash: &Digest, mask: &BlindingMask) -> Digest {
    sha256_concat(&[state_hash.as_bytes(), mask.as_slice()])
}

/// Derive the one-time spentness key: `H(fingerprint ‖ state_hash)`.
pub fn derive_state_id(fingerprint: &Digest, state_hash: &Digest) -> StateId {
    StateId(sha256_concat(&[fingerprint.as_bytes(), state_hash.as_bytes()]))
}

/// The message a spending witness must authorize:
/// `H(state_hash ‖ transaction_hash)`.
pub fn spending_message(state_hash: &Digest, transaction_hash: &Digest) -> Digest {
    sha256_concat(&[state_hash.as_bytes(), transaction_hash.as_bytes()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use uct_core::sha256_concat;

    #[test]
    fn test_mint_state_hash_matches_definition() {
        let id = TokenId::new(*b"T1");
        let expected = sha256_concat(&[b"T1", MINT_SUFFIX]);
        assert_eq!(derive_mint_state_hash(&id), expected);
    }

    #[test]
    fn test_mint_state_hash_deterministic() {
        let id = TokenId::new(*b"T1");
        assert_eq!(derive_mint_state_hash(&id), derive_mint_state_hash(&id));
    }

    #[test]
    fn test_mint_state_hash_unique_per_token_id() {
        let a = derive_mint_state_hash(&TokenId::new(*b"T1"));
        let b = derive_mint_state_hash(&TokenId::new(*b"T2"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_state_hash_depends_on_mask() {
        let state = derive_mint_state_hash(&TokenId::new(*b"T1"));
        let m1 = BlindingMask::new(vec![1u8; 16]).unwrap();
        let m2 = BlindingMask::new(vec![2u8; 16]).unwrap();
        assert_ne!(
            derive_next_state_hash(&state, &m1),
            derive_next_state_hash(&state, &m2)
        );
    }

    #[test]
    fn test_state_id_distinguishes_conditions_and_states() {
        let fp1 = sha256_concat(&[b"condition-1"]);
        let fp2 = sha256_concat(&[b"condition-2"]);
        let s1 = sha256_concat(&[b"state-1"]);
        let s2 = sha256_concat(&[b"state-2"]);
        let ids = [
            derive_state_id(&fp1, &s1),
            derive_state_id(&fp1, &s2),
            derive_state_id(&fp2, &s1),
            derive_state_id(&fp2, &s2),
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_spending_message_binds_both_hashes() {
        let state = sha256_concat(&[b"state"]);
        let tx1 = sha256_concat(&[b"tx-1"]);
        let tx2 = sha256_concat(&[b"tx-2"]);
        assert_ne!(spending_message(&state, &tx1), spending_message(&state, &tx2));
    }

    #[test]
    fn test_state_id_display() {
        let id = derive_state_id(&sha256_concat(&[b"fp"]), &sha256_concat(&[b"st"]));
        let s = id.to_string();
        assert!(s.starts_with("state:"));
        assert_eq!(s.len(), 6 + 64);
    }
}
