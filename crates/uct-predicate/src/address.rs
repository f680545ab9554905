//! # DIRECT:// Addressing
//!
//! Display/addressing convenience layered above the core: a recipient
//! renders the fingerprint of their chosen locking condition as
//! `DIRECT://<hex fingerprint><hex checksum>` and hands it to a sender.
//!
//! The checksum is the first 4 bytes of `SHA256(fingerprint)`. A checksum
//! mismatch is a local parse failure — a typo caught at the keyboard, not
//! a protocol violation. Nothing in the verification core consumes
//! addresses.

use thiserror::Error;

use uct_core::{sha256_concat, Digest};

use crate::predicate::Predicate;

/// Scheme prefix of a direct predicate address.
pub const ADDRESS_SCHEME: &str = "DIRECT://";

/// Checksum length in bytes.
const CHECKSUM_LEN: usize = 4;

/// Failure to parse a `DIRECT://` address. Local to the parsing party.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// The address does not start with `DIRECT://`.
    #[error("address must start with {ADDRESS_SCHEME}")]
    Scheme,

    /// The address body has the wrong length.
    #[error("address body must be {expected} hex chars, got {actual}")]
    Length {
        /// Expected hex length (fingerprint + checksum).
        expected: usize,
        /// Length found.
        actual: usize,
    },

    /// The address body is not valid hex.
    #[error("address body is not valid hex: {0}")]
    Hex(String),

    /// The checksum does not match the fingerprint.
    #[error("address checksum mismatch")]
    ChecksumMismatch,
}

/// A parsed direct address: the fingerprint of a locking condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    fingerprint: Digest,
}

impl Address {
    /// Address the given locking condition.
    pub fn from_predicate(predicate: &Predicate) -> Self {
        Self {
            fingerprint: predicate.fingerprint(),
        }
    }

    /// The condition fingerprint this address names.
    pub fn fingerprint(&self) -> &Digest {
        &self.fingerprint
    }

    /// Parse and checksum-validate a `DIRECT://` address.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let body = s.strip_prefix(ADDRESS_SCHEME).ok_or(AddressError::Scheme)?;
        let expected = (32 + CHECKSUM_LEN) * 2;
        if body.len() != expected {
            return Err(AddressError::Length {
                expected,
                actual: body.len(),
            });
        }
        let (fp_hex, check_hex) = body.split_at(64);
        let fingerprint =
            Digest::from_hex(fp_hex).map_err(|e| AddressError::Hex(e.to_string()))?;
        let declared = hex_to_bytes(check_hex).map_err(AddressError::Hex)?;
        if declared != checksum(&fingerprint) {
            return Err(AddressError::ChecksumMismatch);
        }
        Ok(Self { fingerprint })
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let check: String = checksum(&self.fingerprint)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        write!(f, "{ADDRESS_SCHEME}{}{check}", self.fingerprint.to_hex())
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// First 4 bytes of `SHA256(fingerprint)`.
fn checksum(fingerprint: &Digest) -> Vec<u8> {
    let digest = sha256_concat(&[fingerprint.as_bytes()]);
    digest.as_bytes()[..CHECKSUM_LEN].to_vec()
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}
