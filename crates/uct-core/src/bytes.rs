//! # Byte Material — Opaque Payloads and Blinding Masks
//!
//! Defines `Bytes`, the hex-serialized carrier for opaque protocol
//! payloads (auxiliary data, token data, coin data), and `BlindingMask`,
//! the per-transition randomness that chains state hashes.
//!
//! ## Security Invariant
//!
//! A `BlindingMask` must carry at least 128 bits of entropy and must be
//! drawn fresh, by the recipient who will own the next state, for every
//! transition. The constructor enforces the length floor; freshness is a
//! caller contract. Reuse across transitions links states that the
//! protocol keeps unlinkable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;

/// Minimum blinding mask length in bytes (128 bits of entropy).
pub const MIN_MASK_LEN: usize = 16;

/// Opaque byte payload, serialized as a lowercase hex string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    /// Wrap raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Access the raw bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Parse from a hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        Ok(Self(hex_to_bytes(hex)?))
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bytes({} bytes, {}…)", self.0.len(), hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Per-transition randomness chaining one state hash to the next.
///
/// Chosen by the party that will own the next state; the service never
/// sees it. Serialized as a lowercase hex string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BlindingMask(Vec<u8>);

impl BlindingMask {
    /// Wrap caller-supplied mask bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyError` if the mask is shorter than
    /// [`MIN_MASK_LEN`] bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, CryptoError> {
        let bytes = bytes.into();
        if bytes.len() < MIN_MASK_LEN {
            return Err(CryptoError::KeyError(format!(
                "blinding mask must be at least {MIN_MASK_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bytes))
    }

    /// Draw a fresh 32-byte mask from the OS entropy source.
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = vec![0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Access the raw mask bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Parse from a hex string, enforcing the length floor.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        Self::new(hex_to_bytes(hex)?)
    }
}

impl std::fmt::Debug for BlindingMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BlindingMask({}…)", hex_prefix(&self.0))
    }
}

impl Serialize for BlindingMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BlindingMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(4).map(|b| format!("{b:02x}")).collect()
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, CryptoError> {
    let hex = hex.trim().to_lowercase();
    if hex.len() % 2 != 0 {
        return Err(CryptoError::KeyError(
            "hex string must have even length".to_string(),
        ));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| CryptoError::KeyError(format!("invalid hex at position {i}: {e}")))
        })
        .collect()
}
