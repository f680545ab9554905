//! # The Token Dossier
//!
//! A token is its own evidence: version, current state, genesis, and the
//! ordered history of certified transfers. Replaying genesis then each
//! history entry in order must reproduce the current state exactly — the
//! verifier enforces this, and the constructors here maintain it.

use serde::{Deserialize, Serialize};

use uct_core::error::VerificationError;
use uct_core::TokenId;
use uct_crypto::{derive_mint_state_hash, derive_next_state_hash};

use crate::state::TokenState;
use crate::transaction::CertifiedTransaction;

/// Token layout version understood by this implementation.
pub const TOKEN_VERSION: &str = "1.0";

/// A complete, self-contained token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Layout version tag.
    pub version: String,
    /// The state a spender must currently satisfy.
    pub current_state: TokenState,
    /// The certified mint transaction.
    pub genesis: CertifiedTransaction,
    /// Ordered certified transfers after genesis.
    pub history: Vec<CertifiedTransaction>,
}

impl Token {
    /// Create a token from its certified mint transaction.
    ///
    /// Seeds the current state from the genesis payload: the recipient's
    /// condition and auxiliary data at the mint position
    /// `H(token_id ‖ MINT_SUFFIX)`. Structural only — cryptographic
    /// verification is the verifier's job.
    ///
    /// # Errors
    ///
    /// `VerificationError::MintInvalid` if the genesis transaction carries
    /// no mint data.
    pub fn mint(genesis: CertifiedTransaction) -> Result<Self, VerificationError> {
        let mint = genesis.transaction.data.mint.as_ref().ok_or_else(|| {
            VerificationError::MintInvalid {
                reason: "genesis transaction carries no mint data".into(),
            }
        })?;
        let current_state = TokenState::new(
            genesis.transaction.data.recipient_predicate.clone(),
            genesis.transaction.data.recipient_auxiliary_data.clone(),
            derive_mint_state_hash(&mint.token_id),
        );
        Ok(Self {
            version: TOKEN_VERSION.to_string(),
            current_state,
            genesis,
            history: Vec::new(),
        })
    }

    /// Append a certified transfer, producing the successor token value.
    ///
    /// Advances the state by the chain rule: the new state hash is
    /// `H(current ‖ transfer.blinding_mask)` and the new condition and
    /// auxiliary data are the transfer's recipient fields. The input
    /// token is consumed — there is no in-place mutation.
    pub fn with_transfer(self, transfer: CertifiedTransaction) -> Self {
        let next_state = TokenState::new(
            transfer.transaction.data.recipient_predicate.clone(),
            transfer.transaction.data.recipient_auxiliary_data.clone(),
            derive_next_state_hash(
                &self.current_state.state_hash,
                &transfer.transaction.data.blinding_mask,
            ),
        );
        let mut history = self.history;
        history.push(transfer);
        Self {
            version: self.version,
            current_state: next_state,
            genesis: self.genesis,
            history,
        }
    }

    /// The token's permanent identifier, if the genesis payload is well
    /// formed.
    pub fn token_id(&self) -> Option<&TokenId> {
        self.genesis
            .transaction
            .data
            .mint
            .as_ref()
            .map(|m| &m.token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uct_core::{sha256_concat, BlindingMask, Bytes, Timestamp, TokenId, TokenType};
    use uct_crypto::ed25519::Ed25519KeyPair;
    use uct_gateway::{InclusionProof, UnicityCertificate};
    use uct_predicate::{Predicate, Witness};

    use crate::mint::mint_keypair;
    use crate::transaction::{MintData, Transaction, TransactionData};

    /// A structurally complete certified transaction. The placeholder
    /// proof does not verify — these tests cover dossier mechanics, not
    /// cryptographic verification.
    fn certified(data: TransactionData, current_state_hash: uct_core::Digest) -> CertifiedTransaction {
        let transaction = Transaction {
            current_state_hash,
            data,
        };
        let certificate = UnicityCertificate::issue(
            sha256_concat(&[b"placeholder-root"]),
            1,
            Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
            &mint_keypair(),
        )
        .unwrap();
        let proof = InclusionProof {
            path: Vec::new(),
            certificate,
        };
        CertifiedTransaction::new(transaction, Witness::Absent, proof).unwrap()
    }

    fn genesis_tx(owner: &Predicate) -> CertifiedTransaction {
        let token_id = TokenId::new(*b"T1");
        let state_hash = derive_mint_state_hash(&token_id);
        let data = TransactionData::mint(
            MintData {
                token_id,
                token_type: TokenType::new("uct/demo"),
                token_data: Bytes::new(vec![1, 2]),
                coin_data: None,
                reason: None,
            },
            owner.clone(),
            None,
            BlindingMask::new(vec![0xaa; 16]).unwrap(),
        );
        certified(data, state_hash)
    }

    #[test]
    fn test_mint_seeds_state_from_genesis_payload() {
        let owner = Predicate::unlock_by_key(Ed25519KeyPair::from_seed(&[41u8; 32]).public_key());
        let token = Token::mint(genesis_tx(&owner)).unwrap();
        assert_eq!(token.version, TOKEN_VERSION);
        assert_eq!(token.current_state.predicate, owner);
        assert_eq!(
            token.current_state.state_hash,
            derive_mint_state_hash(&TokenId::new(*b"T1"))
        );
        assert!(token.history.is_empty());
        assert_eq!(token.token_id().unwrap(), &TokenId::new(*b"T1"));
    }

    #[test]
    fn test_mint_without_mint_data_rejected() {
        let owner = Predicate::unlock_by_key(Ed25519KeyPair::from_seed(&[41u8; 32]).public_key());
        let data = TransactionData::transfer(owner, None, BlindingMask::new(vec![1; 16]).unwrap());
        let tx = certified(data, sha256_concat(&[b"whatever"]));
        assert!(matches!(
            Token::mint(tx),
            Err(VerificationError::MintInvalid { .. })
        ));
    }

    #[test]
    fn test_with_transfer_advances_by_chain_rule() {
        let alice = Predicate::unlock_by_key(Ed25519KeyPair::from_seed(&[41u8; 32]).public_key());
        let bob = Predicate::unlock_by_key(Ed25519KeyPair::from_seed(&[42u8; 32]).public_key());
        let token = Token::mint(genesis_tx(&alice)).unwrap();
        let state0 = token.current_state.state_hash.clone();

        let mask = BlindingMask::new(vec![0xbb; 16]).unwrap();
        let transfer = certified(
            TransactionData::transfer(bob.clone(), None, mask.clone()),
            state0.clone(),
        );
        let token = token.with_transfer(transfer);

        assert_eq!(token.history.len(), 1);
        assert_eq!(token.current_state.predicate, bob);
        assert_eq!(
            token.current_state.state_hash,
            derive_next_state_hash(&state0, &mask)
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let owner = Predicate::unlock_by_key(Ed25519KeyPair::from_seed(&[41u8; 32]).public_key());
        let token = Token::mint(genesis_tx(&owner)).unwrap();
        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
