//! # Token State
//!
//! One position in a token's hash chain: the locking condition gating it,
//! optional auxiliary data carried alongside, and the rolling state hash
//! identifying the position.

use serde::{Deserialize, Serialize};

use uct_core::{Bytes, Digest};
use uct_crypto::{derive_state_id, StateId};
use uct_predicate::Predicate;

/// An immutable token state.
///
/// Never mutated in place — every transition produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenState {
    /// The locking condition a spender must satisfy.
    pub predicate: Predicate,
    /// Opaque data carried with the state (reserved for predicate
    /// variants that consume it).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auxiliary_data: Option<Bytes>,
    /// The rolling state identifier: `H(token_id ‖ MINT_SUFFIX)` at
    /// genesis, `H(previous ‖ blinding_mask)` after each transition.
    pub state_hash: Digest,
}

impl TokenState {
    /// Assemble a state value.
    pub fn new(predicate: Predicate, auxiliary_data: Option<Bytes>, state_hash: Digest) -> Self {
        Self {
            predicate,
            auxiliary_data,
            state_hash,
        }
    }

    /// The one-time key under which the Unicity Service records this
    /// state's spentness: `H(fingerprint(predicate) ‖ state_hash)`.
    pub fn state_id(&self) -> StateId {
        derive_state_id(&self.predicate.fingerprint(), &self.state_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uct_core::{sha256_concat, TokenId};
    use uct_crypto::derive_mint_state_hash;
    use uct_crypto::ed25519::Ed25519KeyPair;

    fn sample_state() -> TokenState {
        let kp = Ed25519KeyPair::from_seed(&[5u8; 32]);
        TokenState::new(
            Predicate::unlock_by_key(kp.public_key()),
            None,
            derive_mint_state_hash(&TokenId::new(*b"T1")),
        )
    }

    #[test]
    fn test_state_id_deterministic() {
        let state = sample_state();
        assert_eq!(state.state_id(), state.state_id());
    }

    #[test]
    fn test_state_id_changes_with_condition() {
        let state = sample_state();
        let mut reowned = state.clone();
        reowned.predicate =
            Predicate::unlock_by_key(Ed25519KeyPair::from_seed(&[6u8; 32]).public_key());
        assert_ne!(state.state_id(), reowned.state_id());
    }

    #[test]
    fn test_state_id_changes_with_state_hash() {
        let state = sample_state();
        let mut advanced = state.clone();
        advanced.state_hash = sha256_concat(&[b"different-position"]);
        assert_ne!(state.state_id(), advanced.state_id());
    }

    #[test]
    fn test_serde_omits_absent_auxiliary_data() {
        let json = serde_json::to_string(&sample_state()).unwrap();
        assert!(!json.contains("auxiliaryData"));
        let back: TokenState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_state());
    }
}
