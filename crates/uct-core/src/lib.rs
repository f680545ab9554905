//! # uct-core — Foundational Types for the UCT Stack
//!
//! This crate is the bedrock of the UCT Stack (Unicity-Certified Tokens).
//! It defines the type-system primitives that every other crate builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** ALL structured hashing and signing flows
//!    through `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for
//!    digests. Ever. Two peers that disagree on a single canonical byte
//!    disagree on every hash-based equality in the protocol.
//!
//! 2. **Two hashing paths, both explicit.** `sha256_digest()` accepts only
//!    `&CanonicalBytes` (structured records); `sha256_concat()` accepts
//!    fixed-width byte components (hash-chain links). There is no third path.
//!
//! 3. **Newtype wrappers for domain primitives.** `TokenId`, `TokenType`,
//!    `BlindingMask`, `Bytes` — no bare strings or naked `Vec<u8>` for
//!    protocol material.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so registration times canonicalize
//!    identically everywhere.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `uct-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod bytes;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use bytes::{BlindingMask, Bytes};
pub use canonical::CanonicalBytes;
pub use digest::{sha256_concat, sha256_digest, Digest, DigestAlgorithm};
pub use error::{
    CanonicalizationError, CryptoError, ServiceError, UctError, VerificationError,
};
pub use identity::{TokenId, TokenType};
pub use temporal::Timestamp;
