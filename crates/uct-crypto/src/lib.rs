//! # uct-crypto — Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for the UCT Stack:
//!
//! - **Ed25519** signing and verification, over `CanonicalBytes` for
//!   structured payloads (unicity certificates) and over `Digest` messages
//!   for spending authorizations.
//! - **State hash chain** — the pure derivations that give every token
//!   state its rolling identifier and every (condition, state) pair its
//!   one-time `StateId`.
//! - **Merkle audit paths** with domain-separated leaf/node hashing, the
//!   substrate of offline-verifiable inclusion proofs.
//!
//! ## Crate Policy
//!
//! - Depends only on `uct-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use real
//!   SHA-256 and real Ed25519.
//! - `unsafe` prohibited.

pub mod chain;
pub mod ed25519;
pub mod merkle;

pub use chain::{
    derive_mint_state_hash, derive_next_state_hash, derive_state_id, spending_message, StateId,
    MINT_SUFFIX,
};
pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use merkle::{audit_path, leaf_hash, merkle_root, node_hash, verify_audit_path, PathStep, Side};
