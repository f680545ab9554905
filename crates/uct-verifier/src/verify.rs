//! # The Verifier
//!
//! Pure verdicts over immutable inputs. Every rejection names the first
//! failing check; there is no partial acceptance, no aggregation, and no
//! retry. Verifying the same token value twice yields the same result —
//! nothing here holds mutable state.

use uct_core::error::VerificationError;
use uct_crypto::{
    derive_mint_state_hash, derive_next_state_hash, derive_state_id, spending_message,
};
use uct_gateway::TrustAnchor;
use uct_token::{mint_predicate, CertifiedTransaction, Token, TokenState, TOKEN_VERSION};

use crate::policy::{AcceptAllMints, MintPolicy};

/// Verifies certified transactions and whole tokens against a trusted
/// Unicity Service key and a mint policy.
#[derive(Debug, Clone)]
pub struct Verifier<P = AcceptAllMints> {
    trust_anchor: TrustAnchor,
    mint_policy: P,
}

impl Verifier<AcceptAllMints> {
    /// A verifier trusting the given service key, accepting all mints.
    pub fn new(trust_anchor: TrustAnchor) -> Self {
        Self {
            trust_anchor,
            mint_policy: AcceptAllMints,
        }
    }
}

impl<P: MintPolicy> Verifier<P> {
    /// A verifier trusting the given service key, with an application
    /// mint policy.
    pub fn with_policy(trust_anchor: TrustAnchor, mint_policy: P) -> Self {
        Self {
            trust_anchor,
            mint_policy,
        }
    }

    /// Verify one certified transaction against the state it claims to
    /// spend.
    ///
    /// Runs the four checks in order and surfaces the first failure:
    /// `StaleState`, `HashMismatch`, `ConditionUnsatisfied`, or
    /// `ProofInvalid`.
    pub fn verify_certified_transaction(
        &self,
        certified: &CertifiedTransaction,
        expected: &TokenState,
    ) -> Result<(), VerificationError> {
        // 1. The transaction must spend exactly the expected position.
        if certified.transaction.current_state_hash != expected.state_hash {
            return Err(VerificationError::StaleState {
                expected: expected.state_hash.clone(),
                actual: certified.transaction.current_state_hash.clone(),
            });
        }

        // 2. The declared hash must match the canonical recomputation.
        let computed = certified.transaction.data.digest()?;
        if certified.transaction_hash != computed {
            return Err(VerificationError::HashMismatch {
                declared: certified.transaction_hash.clone(),
                computed,
            });
        }

        // 3. The witness must satisfy the state's locking condition over
        //    the spending message, at registration time.
        let message = spending_message(&expected.state_hash, &certified.transaction_hash);
        let registered_at = certified.inclusion_proof.timestamp();
        if !expected.predicate.evaluate(
            registered_at,
            &message,
            &certified.witness,
            expected.auxiliary_data.as_ref(),
        ) {
            return Err(VerificationError::ConditionUnsatisfied);
        }

        // 4. The exactly-once registration must be proven.
        let state_id = derive_state_id(&expected.predicate.fingerprint(), &expected.state_hash);
        certified
            .inclusion_proof
            .verify(&state_id, &certified.transaction_hash, &self.trust_anchor)
    }

    /// Verify a genesis transaction.
    ///
    /// Same four checks, against the well-known mint condition at the
    /// token's mint position, plus presence of mint data and the
    /// application's mint policy. Every failure surfaces as
    /// `MintInvalid`.
    pub fn verify_mint_transaction(
        &self,
        certified: &CertifiedTransaction,
    ) -> Result<(), VerificationError> {
        let Some(mint) = certified.transaction.data.mint.as_ref() else {
            return Err(VerificationError::MintInvalid {
                reason: "genesis transaction carries no mint data".into(),
            });
        };
        if !self.mint_policy.justify(mint) {
            return Err(VerificationError::MintInvalid {
                reason: "mint justification rejected by policy".into(),
            });
        }
        let expected = TokenState::new(
            mint_predicate(),
            None,
            derive_mint_state_hash(&mint.token_id),
        );
        self.verify_certified_transaction(certified, &expected)
            .map_err(|source| VerificationError::MintInvalid {
                reason: source.to_string(),
            })
    }

    /// Verify a whole token: genesis, then the strict ordered fold over
    /// its history, then exact equality of the folded state with the
    /// declared current state.
    ///
    /// Short-circuits on the first failing entry;
    /// `VerificationError::HistoryEntry` carries its index. No entry is
    /// skipped and none is reordered — entry `i + 1` is only examined
    /// once entry `i` has verified.
    pub fn verify_token(&self, token: &Token) -> Result<(), VerificationError> {
        if token.version != TOKEN_VERSION {
            return Err(VerificationError::UnsupportedVersion {
                found: token.version.clone(),
            });
        }

        self.verify_mint_transaction(&token.genesis)?;

        // Seed the accumulator from the genesis payload.
        let Some(mint) = token.genesis.transaction.data.mint.as_ref() else {
            // Unreachable after mint verification, but never panic on
            // untrusted input.
            return Err(VerificationError::MintInvalid {
                reason: "genesis transaction carries no mint data".into(),
            });
        };
        let mut state_hash = derive_mint_state_hash(&mint.token_id);
        let mut predicate = token.genesis.transaction.data.recipient_predicate.clone();
        let mut auxiliary_data = token
            .genesis
            .transaction
            .data
            .recipient_auxiliary_data
            .clone();

        for (index, entry) in token.history.iter().enumerate() {
            let expected = TokenState::new(
                predicate.clone(),
                auxiliary_data.clone(),
                state_hash.clone(),
            );
            self.verify_certified_transaction(entry, &expected)
                .map_err(|source| VerificationError::HistoryEntry {
                    index,
                    source: Box::new(source),
                })?;

            state_hash = derive_next_state_hash(&state_hash, &entry.transaction.data.blinding_mask);
            predicate = entry.transaction.data.recipient_predicate.clone();
            auxiliary_data = entry.transaction.data.recipient_auxiliary_data.clone();
        }

        let derived = TokenState::new(predicate, auxiliary_data, state_hash);
        if derived != token.current_state {
            let reason = if derived.state_hash != token.current_state.state_hash {
                "state hash diverged"
            } else if derived.predicate != token.current_state.predicate {
                "locking condition diverged"
            } else {
                "auxiliary data diverged"
            };
            return Err(VerificationError::StateMismatch {
                reason: reason.into(),
            });
        }
        Ok(())
    }
}
