//! # uct-token — Token Data Model
//!
//! The value types a token holder carries: the current [`TokenState`], the
//! genesis [`CertifiedTransaction`], and the ordered transfer history. A
//! token is a self-contained dossier — replaying genesis plus each history
//! entry in order deterministically reproduces the current state, and
//! anyone holding the dossier plus a trust anchor can verify the whole
//! chain of custody offline.
//!
//! ## Lifecycle
//!
//! A token is created by a mint transaction and mutated only by appending
//! a certified transfer; every transition produces a new immutable value
//! ([`Token::with_transfer`] consumes and returns). Token values are
//! exclusive to their holder — there is no shared mutable token state
//! across parties, and unlinkability of successive states depends on
//! that exclusivity.

pub mod mint;
pub mod state;
pub mod token;
pub mod transaction;

pub use mint::{mint_keypair, mint_predicate, MINT_AUTHORITY_SEED};
pub use state::TokenState;
pub use token::{Token, TOKEN_VERSION};
pub use transaction::{CertifiedTransaction, MintData, Transaction, TransactionData};
