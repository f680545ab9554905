//! # uct-verifier — Transaction and Token Verification
//!
//! The verdict layer of the UCT Stack. Given an immutable token dossier
//! and a trust anchor, [`Verifier`] decides — offline, deterministically,
//! and without side effects — whether the chain of custody holds.
//!
//! ## The Four Checks
//!
//! A certified transaction is accepted against an expected state only if,
//! in order (cheapest first, all mandatory):
//!
//! 1. it spends exactly the expected chain position (state hash equality),
//! 2. its declared transaction hash matches the recomputed canonical hash,
//! 3. the state's locking condition accepts the witness over the spending
//!    message `H(state_hash ‖ transaction_hash)`,
//! 4. its inclusion proof certifies the exactly-once registration of the
//!    state's one-time id.
//!
//! Token verification is a strict left-fold: genesis first, then every
//! history entry in order against the accumulated (state hash, condition,
//! auxiliary data), short-circuiting on the first failure, and finally an
//! exact comparison of the folded state with the declared current state.
//!
//! ## Why Double-Spending Fails
//!
//! Accepting two conflicting spends of one state requires two distinct
//! certified transactions passing check 4 for the same StateId. Under the
//! service's append-only, at-most-one-entry guarantee, that needs either
//! two (condition, state) pairs with colliding StateIds — a SHA-256
//! collision — or a certificate binding one registered transaction hash
//! to a different transaction — a forged signature or, again, a hash
//! collision in the commitment tree. This reduction is a design property,
//! exercised empirically by the replay and tamper tests in this crate and
//! in `uct-gateway`; it is not a machine-checked proof.

pub mod policy;
pub mod verify;

pub use policy::{AcceptAllMints, MintPolicy};
pub use verify::Verifier;
