//! # Token Identity Newtypes
//!
//! Newtype wrappers for token identifiers. These prevent accidental
//! identifier confusion — you cannot pass a `TokenType` where a `TokenId`
//! is expected.
//!
//! A `TokenId` is raw bytes, not a UUID: it seeds the genesis state hash
//! (`H(token_id ‖ MINT_SUFFIX)`), so the protocol treats it as opaque
//! hash-chain material of any length.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;

/// Unique identifier of a token, fixed at mint.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenId(Vec<u8>);

impl TokenId {
    /// Wrap caller-supplied identifier bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Draw a fresh random 32-byte identifier from the OS entropy source.
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = vec![0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Access the raw identifier bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse from a hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() % 2 != 0 {
            return Err(CryptoError::KeyError(
                "token id hex must have even length".to_string(),
            ));
        }
        let bytes: Result<Vec<u8>, _> = (0..hex.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|e| CryptoError::KeyError(format!("invalid hex at {i}: {e}")))
            })
            .collect();
        Ok(Self(bytes?))
    }
}

impl std::fmt::Debug for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "TokenId({prefix}…)")
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "token:{}", self.to_hex())
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Application-level token class label (e.g., `"uct/fungible"`).
///
/// Opaque to the verification core; carried through mint data and hashed
/// with everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenType(pub String);

impl TokenType {
    /// Wrap a token type label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id_hex_roundtrip() {
        let id = TokenId::new(*b"T1");
        assert_eq!(id.to_hex(), "5431");
        assert_eq!(TokenId::from_hex("5431").unwrap(), id);
    }

    #[test]
    fn test_token_id_random_distinct() {
        assert_ne!(TokenId::random(), TokenId::random());
    }

    #[test]
    fn test_token_id_serde_is_hex_string() {
        let id = TokenId::new(vec![0xab, 0xcd]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abcd\"");
        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_token_id_display() {
        let id = TokenId::new(vec![0x00, 0x11]);
        assert_eq!(id.to_string(), "token:0011");
    }

    #[test]
    fn test_token_type_serde_is_plain_string() {
        let tt = TokenType::new("uct/fungible");
        let json = serde_json::to_string(&tt).unwrap();
        assert_eq!(json, "\"uct/fungible\"");
    }
}
