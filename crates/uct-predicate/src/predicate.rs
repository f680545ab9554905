//! # Predicate Variants and Witness Evaluation
//!
//! The closed set of locking conditions and the witness material that
//! satisfies them.
//!
//! ## Fingerprints
//!
//! Every variant has a deterministic fingerprint: a SHA-256 digest over a
//! tag-prefixed byte layout. The tag byte keeps variants in disjoint hash
//! domains — a multisig over one key can never fingerprint-collide with
//! plain key ownership of that key. StateId derivation consumes this
//! fingerprint, so fingerprint equality is condition equality everywhere
//! the service is concerned.
//!
//! Layouts (all multi-byte integers big-endian):
//!
//! - `0x11 ‖ public_key` — ownership by key.
//! - `0x12 ‖ threshold ‖ key₀ ‖ key₁ ‖ …` — multisig (key order is
//!   significant).
//! - `0x13 ‖ not_before_epoch_secs (8 bytes) ‖ public_key` — timelock.
//! - `0x14` — burn.

use serde::{Deserialize, Serialize};

use uct_core::{sha256_concat, Bytes, Digest, Timestamp};
use uct_crypto::ed25519::{verify_digest, Ed25519PublicKey, Ed25519Signature};

const TAG_UNLOCK_BY_KEY: u8 = 0x11;
const TAG_MULTISIG: u8 = 0x12;
const TAG_TIMELOCK: u8 = 0x13;
const TAG_BURN: u8 = 0x14;

/// A locking condition gating a token state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Predicate {
    /// Satisfied by a signature from the named key.
    #[serde(rename_all = "camelCase")]
    UnlockByKey {
        /// The key whose signature spends this state.
        public_key: Ed25519PublicKey,
    },

    /// Satisfied by at least `threshold` distinct valid signatures from
    /// the key set.
    #[serde(rename_all = "camelCase")]
    Multisig {
        /// The eligible keys, in fingerprint order (order is significant).
        public_keys: Vec<Ed25519PublicKey>,
        /// How many distinct keys must sign.
        threshold: u8,
    },

    /// Satisfied by a signature from the named key, but only at or after
    /// `not_before` (measured at commitment registration time).
    #[serde(rename_all = "camelCase")]
    Timelock {
        /// Earliest registration time at which spending is allowed.
        not_before: Timestamp,
        /// The key whose signature spends this state.
        public_key: Ed25519PublicKey,
    },

    /// Never satisfied. Locking a state with this burns the token.
    Burn,
}

/// Witness material supplied by a spender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Witness {
    /// A single signature over the spending message.
    #[serde(rename_all = "camelCase")]
    Signature {
        /// Signature over `H(state_hash ‖ transaction_hash)`.
        signature: Ed25519Signature,
    },

    /// Signatures from several keys of a multisig set.
    #[serde(rename_all = "camelCase")]
    MultiSignature {
        /// One entry per signing key.
        signatures: Vec<IndexedSignature>,
    },

    /// No witness material (satisfies nothing).
    Absent,
}

/// A signature paired with the index of the multisig key that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedSignature {
    /// Index into the predicate's key list.
    pub index: u8,
    /// Signature over the spending message.
    pub signature: Ed25519Signature,
}

impl Predicate {
    /// Ownership by a single key.
    pub fn unlock_by_key(public_key: Ed25519PublicKey) -> Self {
        Self::UnlockByKey { public_key }
    }

    /// Evaluate the condition against a witness.
    ///
    /// Pure function of its explicit arguments. `time` is the commitment
    /// registration time (extracted from the inclusion proof during
    /// verification; the service clock at submission). `aux` is the
    /// state's auxiliary data — reserved for future variants, ignored by
    /// all current ones.
    ///
    /// Total: malformed witnesses evaluate to `false`, never to an error.
    pub fn evaluate(
        &self,
        time: Timestamp,
        message: &Digest,
        witness: &Witness,
        _aux: Option<&Bytes>,
    ) -> bool {
        match self {
            Self::UnlockByKey { public_key } => match witness {
                Witness::Signature { signature } => {
                    verify_digest(message, signature, public_key).is_ok()
                }
                _ => false,
            },

            Self::Multisig {
                public_keys,
                threshold,
            } => match witness {
                Witness::MultiSignature { signatures } => {
                    evaluate_multisig(public_keys, *threshold, signatures, message)
                }
                _ => false,
            },

            Self::Timelock {
                not_before,
                public_key,
            } => match witness {
                Witness::Signature { signature } => {
                    time >= *not_before && verify_digest(message, signature, public_key).is_ok()
                }
                _ => false,
            },

            Self::Burn => false,
        }
    }

    /// The condition fingerprint feeding StateId derivation.
    ///
    /// Deterministic and infallible; see the module docs for the byte
    /// layouts.
    pub fn fingerprint(&self) -> Digest {
        match self {
            Self::UnlockByKey { public_key } => {
                sha256_concat(&[&[TAG_UNLOCK_BY_KEY], public_key.as_bytes()])
            }
            Self::Multisig {
                public_keys,
                threshold,
            } => {
                let tag = [TAG_MULTISIG, *threshold];
                let mut parts: Vec<&[u8]> = Vec::with_capacity(public_keys.len() + 1);
                parts.push(&tag);
                for key in public_keys {
                    parts.push(key.as_bytes());
                }
                sha256_concat(&parts)
            }
            Self::Timelock {
                not_before,
                public_key,
            } => {
                let secs = not_before.epoch_secs().to_be_bytes();
                sha256_concat(&[&[TAG_TIMELOCK], &secs, public_key.as_bytes()])
            }
            Self::Burn => sha256_concat(&[&[TAG_BURN]]),
        }
    }
}

/// Count distinct valid multisig signatures against the key set.
///
/// Degenerate parameter sets (threshold of zero, or larger than the key
/// set) are unsatisfiable rather than trivially satisfied.
fn evaluate_multisig(
    public_keys: &[Ed25519PublicKey],
    threshold: u8,
    signatures: &[IndexedSignature],
    message: &Digest,
) -> bool {
    let threshold = threshold as usize;
    if threshold == 0 || threshold > public_keys.len() {
        return false;
    }
    let mut satisfied = vec![false; public_keys.len()];
    for entry in signatures {
        let idx = entry.index as usize;
        if idx >= public_keys.len() || satisfied[idx] {
            continue;
        }
        if verify_digest(message, &entry.signature, &public_keys[idx]).is_ok() {
            satisfied[idx] = true;
        }
    }
    satisfied.iter().filter(|s| **s).count() >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use uct_crypto::ed25519::Ed25519KeyPair;
    use uct_crypto::spending_message;

    fn message() -> Digest {
        let state = sha256_concat(&[b"state"]);
        let tx = sha256_concat(&[b"tx"]);
        spending_message(&state, &tx)
    }

    fn now() -> Timestamp {
        Timestamp::parse("2026-06-01T12:00:00Z").unwrap()
    }

    #[test]
    fn test_unlock_by_key_accepts_owner_signature() {
        let kp = Ed25519KeyPair::from_seed(&[7u8; 32]);
        let predicate = Predicate::unlock_by_key(kp.public_key());
        let witness = Witness::Signature {
            signature: kp.sign_digest(&message()),
        };
        assert!(predicate.evaluate(now(), &message(), &witness, None));
    }

    #[test]
    fn test_unlock_by_key_rejects_other_key() {
        let owner = Ed25519KeyPair::from_seed(&[7u8; 32]);
        let thief = Ed25519KeyPair::from_seed(&[8u8; 32]);
        let predicate = Predicate::unlock_by_key(owner.public_key());
        let witness = Witness::Signature {
            signature: thief.sign_digest(&message()),
        };
        assert!(!predicate.evaluate(now(), &message(), &witness, None));
    }

    #[test]
    fn test_unlock_by_key_rejects_bit_flipped_signature() {
        let kp = Ed25519KeyPair::from_seed(&[7u8; 32]);
        let predicate = Predicate::unlock_by_key(kp.public_key());
        let mut bytes = *kp.sign_digest(&message()).as_bytes();
        bytes[17] ^= 0x40;
        let witness = Witness::Signature {
            signature: Ed25519Signature::from_bytes(bytes),
        };
        assert!(!predicate.evaluate(now(), &message(), &witness, None));
    }

    #[test]
    fn test_unlock_by_key_rejects_wrong_witness_shape() {
        let kp = Ed25519KeyPair::from_seed(&[7u8; 32]);
        let predicate = Predicate::unlock_by_key(kp.public_key());
        assert!(!predicate.evaluate(now(), &message(), &Witness::Absent, None));
    }

    #[test]
    fn test_burn_never_satisfied() {
        let kp = Ed25519KeyPair::from_seed(&[7u8; 32]);
        let witness = Witness::Signature {
            signature: kp.sign_digest(&message()),
        };
        assert!(!Predicate::Burn.evaluate(now(), &message(), &witness, None));
        assert!(!Predicate::Burn.evaluate(now(), &message(), &Witness::Absent, None));
    }

    #[test]
    fn test_multisig_threshold_met() {
        let kps: Vec<_> = (0..3u8).map(|i| Ed25519KeyPair::from_seed(&[i; 32])).collect();
        let predicate = Predicate::Multisig {
            public_keys: kps.iter().map(|k| k.public_key()).collect(),
            threshold: 2,
        };
        let witness = Witness::MultiSignature {
            signatures: vec![
                IndexedSignature { index: 0, signature: kps[0].sign_digest(&message()) },
                IndexedSignature { index: 2, signature: kps[2].sign_digest(&message()) },
            ],
        };
        assert!(predicate.evaluate(now(), &message(), &witness, None));
    }

    #[test]
    fn test_multisig_duplicate_index_not_double_counted() {
        let kps: Vec<_> = (0..3u8).map(|i| Ed25519KeyPair::from_seed(&[i; 32])).collect();
        let predicate = Predicate::Multisig {
            public_keys: kps.iter().map(|k| k.public_key()).collect(),
            threshold: 2,
        };
        let sig = kps[1].sign_digest(&message());
        let witness = Witness::MultiSignature {
            signatures: vec![
                IndexedSignature { index: 1, signature: sig.clone() },
                IndexedSignature { index: 1, signature: sig },
            ],
        };
        assert!(!predicate.evaluate(now(), &message(), &witness, None));
    }

    #[test]
    fn test_multisig_degenerate_thresholds_unsatisfiable() {
        let kp = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let zero = Predicate::Multisig {
            public_keys: vec![kp.public_key()],
            threshold: 0,
        };
        let oversized = Predicate::Multisig {
            public_keys: vec![kp.public_key()],
            threshold: 2,
        };
        let witness = Witness::MultiSignature {
            signatures: vec![IndexedSignature { index: 0, signature: kp.sign_digest(&message()) }],
        };
        assert!(!zero.evaluate(now(), &message(), &witness, None));
        assert!(!oversized.evaluate(now(), &message(), &witness, None));
    }

    #[test]
    fn test_timelock_gates_on_registration_time() {
        let kp = Ed25519KeyPair::from_seed(&[9u8; 32]);
        let predicate = Predicate::Timelock {
            not_before: Timestamp::parse("2026-06-01T12:00:00Z").unwrap(),
            public_key: kp.public_key(),
        };
        let witness = Witness::Signature {
            signature: kp.sign_digest(&message()),
        };
        let before = Timestamp::parse("2026-06-01T11:59:59Z").unwrap();
        let at = Timestamp::parse("2026-06-01T12:00:00Z").unwrap();
        let after = Timestamp::parse("2026-07-01T00:00:00Z").unwrap();
        assert!(!predicate.evaluate(before, &message(), &witness, None));
        assert!(predicate.evaluate(at, &message(), &witness, None));
        assert!(predicate.evaluate(after, &message(), &witness, None));
    }

    #[test]
    fn test_fingerprints_distinct_across_variants() {
        let kp = Ed25519KeyPair::from_seed(&[3u8; 32]);
        let by_key = Predicate::unlock_by_key(kp.public_key());
        let multi = Predicate::Multisig {
            public_keys: vec![kp.public_key()],
            threshold: 1,
        };
        let lock = Predicate::Timelock {
            not_before: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
            public_key: kp.public_key(),
        };
        let fps = [
            by_key.fingerprint(),
            multi.fingerprint(),
            lock.fingerprint(),
            Predicate::Burn.fingerprint(),
        ];
        for (i, a) in fps.iter().enumerate() {
            for b in fps.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let kp = Ed25519KeyPair::from_seed(&[4u8; 32]);
        let p = Predicate::unlock_by_key(kp.public_key());
        assert_eq!(p.fingerprint(), p.fingerprint());
    }

    #[test]
    fn test_multisig_fingerprint_sensitive_to_key_order() {
        let a = Ed25519KeyPair::from_seed(&[5u8; 32]).public_key();
        let b = Ed25519KeyPair::from_seed(&[6u8; 32]).public_key();
        let ab = Predicate::Multisig { public_keys: vec![a.clone(), b.clone()], threshold: 1 };
        let ba = Predicate::Multisig { public_keys: vec![b, a], threshold: 1 };
        assert_ne!(ab.fingerprint(), ba.fingerprint());
    }

    #[test]
    fn test_predicate_serde_roundtrip() {
        let kp = Ed25519KeyPair::from_seed(&[2u8; 32]);
        let p = Predicate::Timelock {
            not_before: Timestamp::parse("2026-03-01T00:00:00Z").unwrap(),
            public_key: kp.public_key(),
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"type\":\"timelock\""));
        assert!(json.contains("notBefore"));
        let back: Predicate = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_witness_serde_roundtrip() {
        let kp = Ed25519KeyPair::from_seed(&[2u8; 32]);
        let w = Witness::Signature {
            signature: kp.sign_digest(&message()),
        };
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"type\":\"signature\""));
        let back: Witness = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
