//! # Ed25519 Signing and Verification
//!
//! Key, signature, and key-pair types for witness signatures and unicity
//! certificates.
//!
//! ## Security Invariant
//!
//! There are exactly two signing inputs, both type-enforced:
//!
//! - `&CanonicalBytes` — structured payloads (certificate bodies). You
//!   cannot sign raw bytes, so every structured signature covers bytes
//!   that went through the canonicalization pipeline.
//! - `&Digest` — spending authorizations, which sign the fixed-width
//!   message `H(state_hash ‖ transaction_hash)` rather than a record.
//!
//! Private keys are never serialized or logged. `Ed25519KeyPair` does not
//! implement `Serialize` or expose the private key bytes.
//!
//! ## Serde
//!
//! Public keys and signatures serialize as lowercase hex strings.

use ed25519_dalek::{Signer, Verifier};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use uct_core::error::CryptoError;
use uct_core::{CanonicalBytes, Digest};

/// An Ed25519 public key (32 bytes) for signature verification.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(pub [u8; 32]);

/// An Ed25519 signature (64 bytes).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ed25519Signature(pub [u8; 64]);

/// An Ed25519 key pair for signing operations.
///
/// Does not implement `Serialize` — private keys must not be accidentally
/// serialized into logs, responses, or artifacts.
pub struct Ed25519KeyPair {
    signing_key: ed25519_dalek::SigningKey,
}

// ---------------------------------------------------------------------------
// Ed25519PublicKey impls
// ---------------------------------------------------------------------------

impl Ed25519PublicKey {
    /// Create a public key from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the public key as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a public key from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 64 {
            return Err(CryptoError::KeyError(format!(
                "public key hex must be 64 chars, got {}",
                hex.len()
            )));
        }
        let bytes = hex_to_bytes(&hex).map_err(CryptoError::KeyError)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Convert to an `ed25519_dalek::VerifyingKey` for verification.
    pub fn to_verifying_key(&self) -> Result<ed25519_dalek::VerifyingKey, CryptoError> {
        ed25519_dalek::VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::KeyError(format!("invalid public key: {e}")))
    }
}

impl Serialize for Ed25519PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Ed25519PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519PublicKey({}…)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Ed25519Signature impls
// ---------------------------------------------------------------------------

impl Ed25519Signature {
    /// Create a signature from raw 64 bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Return the raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Render the signature as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a signature from a 128-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 128 {
            return Err(CryptoError::VerificationFailed(format!(
                "signature hex must be 128 chars, got {}",
                hex.len()
            )));
        }
        let bytes = hex_to_bytes(&hex).map_err(CryptoError::VerificationFailed)?;
        let mut arr = [0u8; 64];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for Ed25519Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Ed25519Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519Signature({}…)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Ed25519KeyPair impls
// ---------------------------------------------------------------------------

impl Ed25519KeyPair {
    /// Generate a new random Ed25519 key pair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut csprng);
        Self { signing_key }
    }

    /// Create a key pair from a raw 32-byte private key seed.
    ///
    /// Deterministic: the same seed always yields the same key pair. The
    /// well-known mint authority is built this way from a public seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// The public key of this key pair.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a structured canonical payload.
    pub fn sign(&self, data: &CanonicalBytes) -> Ed25519Signature {
        Ed25519Signature(self.signing_key.sign(data.as_bytes()).to_bytes())
    }

    /// Sign a fixed-width digest message.
    ///
    /// This is the spending-authorization path: the witness signs
    /// `H(state_hash ‖ transaction_hash)`, a digest rather than a record.
    pub fn sign_digest(&self, message: &Digest) -> Ed25519Signature {
        Ed25519Signature(self.signing_key.sign(message.as_bytes()).to_bytes())
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519KeyPair(<private>)")
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verify an Ed25519 signature over a structured canonical payload.
pub fn verify(
    data: &CanonicalBytes,
    signature: &Ed25519Signature,
    public_key: &Ed25519PublicKey,
) -> Result<(), CryptoError> {
    verify_bytes(data.as_bytes(), signature, public_key)
}

/// Verify an Ed25519 signature over a fixed-width digest message.
pub fn verify_digest(
    message: &Digest,
    signature: &Ed25519Signature,
    public_key: &Ed25519PublicKey,
) -> Result<(), CryptoError> {
    verify_bytes(message.as_bytes(), signature, public_key)
}

fn verify_bytes(
    message: &[u8],
    signature: &Ed25519Signature,
    public_key: &Ed25519PublicKey,
) -> Result<(), CryptoError> {
    let vk = public_key.to_verifying_key()?;
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    vk.verify(message, &sig)
        .map_err(|e| CryptoError::VerificationFailed(format!("ed25519 verification failed: {e}")))
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(4).map(|b| format!("{b:02x}")).collect()
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

#[cfg(test)]
mod tests {
    use super::*;
    use uct_core::sha256_concat;

    #[test]
    fn test_keypair_generation() {
        let kp = Ed25519KeyPair::generate();
        assert_eq!(kp.public_key().as_bytes().len(), 32);
    }

    #[test]
    fn test_sign_and_verify_canonical() {
        let kp = Ed25519KeyPair::generate();
        let data = serde_json::json!({"round": 7, "root": "aa"});
        let canonical = CanonicalBytes::new(&data).expect("should canonicalize");
        let sig = kp.sign(&canonical);
        verify(&canonical, &sig, &kp.public_key()).expect("valid signature should verify");
    }

    #[test]
    fn test_sign_and_verify_digest() {
        let kp = Ed25519KeyPair::generate();
        let message = sha256_concat(&[b"state", b"tx"]);
        let sig = kp.sign_digest(&message);
        verify_digest(&message, &sig, &kp.public_key()).expect("should verify");
    }

    #[test]
    fn test_verify_wrong_key_fails() {
        let kp1 = Ed25519KeyPair::generate();
        let kp2 = Ed25519KeyPair::generate();
        let message = sha256_concat(&[b"message"]);
        let sig = kp1.sign_digest(&message);
        assert!(verify_digest(&message, &sig, &kp2.public_key()).is_err());
    }

    #[test]
    fn test_verify_wrong_message_fails() {
        let kp = Ed25519KeyPair::generate();
        let sig = kp.sign_digest(&sha256_concat(&[b"original"]));
        let tampered = sha256_concat(&[b"tampered"]);
        assert!(verify_digest(&tampered, &sig, &kp.public_key()).is_err());
    }

    #[test]
    fn test_bit_flipped_signature_fails() {
        let kp = Ed25519KeyPair::generate();
        let message = sha256_concat(&[b"flip"]);
        let sig = kp.sign_digest(&message);
        let mut bytes = *sig.as_bytes();
        bytes[0] ^= 0x01;
        let flipped = Ed25519Signature::from_bytes(bytes);
        assert!(verify_digest(&message, &flipped, &kp.public_key()).is_err());
    }

    #[test]
    fn test_deterministic_from_seed() {
        let seed = [42u8; 32];
        let kp1 = Ed25519KeyPair::from_seed(&seed);
        let kp2 = Ed25519KeyPair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
        let message = sha256_concat(&[b"deterministic"]);
        assert_eq!(kp1.sign_digest(&message), kp2.sign_digest(&message));
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let pk = Ed25519KeyPair::generate().public_key();
        let hex = pk.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(Ed25519PublicKey::from_hex(&hex).unwrap(), pk);
    }

    #[test]
    fn test_signature_serde_roundtrip() {
        let kp = Ed25519KeyPair::generate();
        let sig = kp.sign_digest(&sha256_concat(&[b"serde"]));
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json.len(), 128 + 2);
        let back: Ed25519Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(sig, back);
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(Ed25519PublicKey::from_hex("not-hex").is_err());
        assert!(Ed25519PublicKey::from_hex("aabb").is_err());
        assert!(Ed25519Signature::from_hex("aabb").is_err());
    }

    #[test]
    fn test_debug_does_not_leak_private_key() {
        let kp = Ed25519KeyPair::generate();
        assert_eq!(format!("{kp:?}"), "Ed25519KeyPair(<private>)");
    }
}
