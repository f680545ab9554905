//! # uct-predicate — Locking Conditions
//!
//! A token state is gated by a *locking condition* (predicate): a pure
//! test that a spender's witness must satisfy. This crate defines the
//! closed variant set, its evaluation contract, the condition fingerprint
//! that feeds StateId derivation, and the `DIRECT://` address form used to
//! hand a condition to a sender.
//!
//! ## Evaluation Contract
//!
//! `Predicate::evaluate(time, message, witness, aux)` is a pure function
//! of its explicit arguments — no clock reads, no global state, no side
//! effects. Deterministic replay of a token history depends on this.
//!
//! ## Crate Policy
//!
//! - The variant set is closed; adding a variant is a breaking change that
//!   every `match` must handle. Composite (recursive) predicates are a
//!   documented future extension, not a variant today.
//! - Fingerprints are infallible, tag-prefixed digest computations.

pub mod address;
pub mod predicate;

pub use address::{Address, AddressError};
pub use predicate::{IndexedSignature, Predicate, Witness};
