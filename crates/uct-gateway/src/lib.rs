//! # uct-gateway — The Unicity Service Boundary
//!
//! The Unicity Service is the one external collaborator the protocol
//! cannot do without: an append-only registry that records each StateId at
//! most once and certifies the registration. This crate defines the whole
//! boundary with it:
//!
//! - [`contract`] — the submission request/response pair and the async
//!   [`UnicityService`] trait. These two operations are the only
//!   suspension points in the entire verification path.
//! - [`proof`] — inclusion proofs and the signed unicity certificate.
//!   Proof verification is fully offline: a Merkle audit path plus a
//!   certificate signature check against a [`TrustAnchor`], no service
//!   round-trip.
//! - [`service`] — [`InMemoryUnicityService`], a reference model of the
//!   service for tests and local pipelines. It owns the spent-state set,
//!   the single piece of shared mutable state in the whole system.
//!
//! ## Trust Assumption
//!
//! The service's guarantee — the StateId → transaction-hash mapping is
//! append-only with at most one entry per StateId, ever — is assumed here,
//! not re-derived. The verification core relies on it through certificates
//! alone and never inspects the registry.

pub mod contract;
pub mod proof;
pub mod service;

pub use contract::{SubmitRequest, SubmitResponse, UnicityService};
pub use proof::{commitment_leaf, InclusionProof, TrustAnchor, UnicityCertificate};
pub use service::InMemoryUnicityService;
