//! # Content Digests — Hash Values and the Two Hashing Paths
//!
//! Defines `Digest` and `DigestAlgorithm`, plus the only two digest
//! computation paths in the stack:
//!
//! - [`sha256_digest()`] hashes a structured record and accepts only
//!   `&CanonicalBytes`, so every record digest flows through the
//!   canonicalization pipeline.
//! - [`sha256_concat()`] hashes a concatenation of byte components and is
//!   reserved for hash-chain links (state hashes, state ids, spending
//!   messages), where each component except possibly the first has a fixed
//!   width and the concatenation parses unambiguously.
//!
//! Digest equality is bitwise. Serde form is the self-describing string
//! `"sha256:<64 lowercase hex chars>"`, which embeds cleanly in canonical
//! JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CryptoError;

/// The hash algorithm that produced a digest.
///
/// A single algorithm today; every digest carries the tag anyway so that a
/// future algorithm migration is a data change, not a format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DigestAlgorithm {
    /// SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 32-byte hash value with its algorithm tag.
///
/// Ordering is the lexicographic order of the raw bytes; the Unicity
/// Service relies on it for a deterministic commitment-tree layout.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl Digest {
    /// Create a digest from raw bytes and an algorithm tag.
    ///
    /// Prefer [`sha256_digest()`] or [`sha256_concat()`] for computing
    /// digests; this constructor is for deserialization-adjacent code.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// The raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Render the digest value as a lowercase hex string (no algorithm tag).
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse the self-describing form `"sha256:<hex>"`.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        let (tag, hex) = s
            .split_once(':')
            .ok_or_else(|| CryptoError::DigestError(format!("missing algorithm tag: {s:?}")))?;
        match tag {
            "sha256" => Ok(Self::new(DigestAlgorithm::Sha256, hex_to_32bytes(hex)?)),
            other => Err(CryptoError::DigestError(format!(
                "unknown digest algorithm {other:?}"
            ))),
        }
    }

    /// Parse a bare 64-char hex string as a SHA-256 digest.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        Ok(Self::new(DigestAlgorithm::Sha256, hex_to_32bytes(hex)?))
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.bytes.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Digest({}:{prefix}…)", self.algorithm)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute a SHA-256 digest of a structured record.
///
/// Accepts only `&CanonicalBytes`, not raw `&[u8]`. This compile-time
/// constraint prevents any code path from hashing a record that skipped the
/// canonicalization pipeline.
pub fn sha256_digest(data: &CanonicalBytes) -> Digest {
    Digest::new(DigestAlgorithm::Sha256, sha256_raw(data.as_bytes()))
}

/// Compute a SHA-256 digest of concatenated byte components.
///
/// This is the hash-chain path: state hashes, state ids, and spending
/// messages are defined as hashes over concatenations of fixed-width
/// digests, masks, and tags. Component lengths are a caller contract —
/// every component except possibly the first must have a width fixed by
/// the protocol, so the concatenation parses unambiguously.
pub fn sha256_concat(parts: &[&[u8]]) -> Digest {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    Digest::new(DigestAlgorithm::Sha256, bytes)
}

fn sha256_raw(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    out
}

fn hex_to_32bytes(hex: &str) -> Result<[u8; 32], CryptoError> {
    let hex = hex.trim().to_lowercase();
    if hex.len() != 64 {
        return Err(CryptoError::DigestError(format!(
            "expected 64 hex chars, got {}",
            hex.len()
        )));
    }
    let mut out = [0u8; 32];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let s = std::str::from_utf8(chunk)
            .map_err(|e| CryptoError::DigestError(format!("invalid hex: {e}")))?;
        out[i] = u8::from_str_radix(s, 16)
            .map_err(|e| CryptoError::DigestError(format!("invalid hex at {i}: {e}")))?;
    }
    Ok(out)
}
