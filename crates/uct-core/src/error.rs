//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the UCT Stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Cryptographic errors fail loudly with full context.
//! - Verification errors name the first check that failed; the verifier
//!   never aggregates multiple simultaneous failures.
//! - Every variant is recoverable by the caller — nothing here is
//!   process-fatal. A verification failure means "reject this token or
//!   transaction", never "partially trust it".

use thiserror::Error;

use crate::digest::Digest;

/// Top-level error type for the UCT Stack.
#[derive(Error, Debug)]
pub enum UctError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Cryptographic operation failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Verification rejected a transaction or token.
    #[error("verification error: {0}")]
    Verification(#[from] VerificationError),

    /// The Unicity Service rejected or could not serve a request.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// Input failed structural validation.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Amounts must be strings or integers.
    #[error("float values are not permitted in canonical representations; use string or integer: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error in cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key generation or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),

    /// Digest computation or parsing failed.
    #[error("digest error: {0}")]
    DigestError(String),
}

/// Rejection raised by the transaction/token verifier.
///
/// The verifier surfaces the *first* failing check per certified
/// transaction and the *first* failing entry per token history. Callers
/// must treat any variant as "reject", never as a basis for partial trust.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// A record could not be canonically encoded, so its hash cannot be
    /// recomputed or its certificate payload rebuilt.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// The transaction's declared current state hash does not match the
    /// expected chain position.
    #[error("stale state: transaction targets {actual}, expected chain position {expected}")]
    StaleState {
        /// State hash at the expected chain position.
        expected: Digest,
        /// State hash the transaction actually declares.
        actual: Digest,
    },

    /// The declared transaction hash does not match the recomputed hash of
    /// its canonical transaction data.
    #[error("transaction hash mismatch: declared {declared}, computed {computed}")]
    HashMismatch {
        /// Hash carried inside the certified transaction.
        declared: Digest,
        /// Hash recomputed from the canonical transaction data.
        computed: Digest,
    },

    /// The locking condition evaluated to false for the supplied witness.
    #[error("locking condition unsatisfied by witness")]
    ConditionUnsatisfied,

    /// The inclusion proof failed self-contained verification.
    #[error("inclusion proof invalid: {0}")]
    ProofInvalid(String),

    /// The genesis transaction failed a certified-transaction check or the
    /// application-specific mint justification.
    #[error("invalid mint transaction: {reason}")]
    MintInvalid {
        /// Which mint check failed.
        reason: String,
    },

    /// Folding genesis plus history did not reproduce the token's declared
    /// current state.
    #[error("token state mismatch after replay: {reason}")]
    StateMismatch {
        /// Which component of the folded state diverged.
        reason: String,
    },

    /// A history entry failed verification. Carries the zero-based index of
    /// the first failing entry; earlier entries all verified.
    #[error("history entry {index} rejected: {source}")]
    HistoryEntry {
        /// Index of the first failing entry in `token.history`.
        index: usize,
        /// The check that failed for that entry.
        #[source]
        source: Box<VerificationError>,
    },

    /// The token's version field names a layout this verifier does not
    /// understand.
    #[error("unsupported token version {found:?}")]
    UnsupportedVersion {
        /// Version string found on the token.
        found: String,
    },
}

/// Error reported by the Unicity Service, or by transport to it.
///
/// `DoubleSpend` is observable only at submission time; verification of an
/// already-certified transaction never contacts the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The StateId was already registered. The exactly-once claim failed.
    #[error("state {state_id} already spent")]
    DoubleSpend {
        /// The StateId digest that was already recorded.
        state_id: Digest,
    },

    /// The service evaluated the locking condition against the submitted
    /// witness and rejected it.
    #[error("locking condition rejected by service")]
    ConditionRejected,

    /// Transport failure or timeout. Callers may retry the network call;
    /// the verification core itself never does.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}
