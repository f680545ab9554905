//! # The Well-Known Mint Authority
//!
//! Every genesis transaction spends the mint position of its token id
//! under a fixed, public, well-known locking condition. The key pair is
//! derived from a published seed — the "secret" is public by design.
//! Possession of the mint key authorizes nothing by itself: what makes a
//! mint acceptable is the application's mint policy, checked during
//! verification, plus the exactly-once registration of the mint StateId.
//! The well-known condition merely gives genesis transactions the same
//! shape as every other transition.

use uct_crypto::ed25519::Ed25519KeyPair;
use uct_predicate::Predicate;

/// Published seed of the mint authority key pair.
pub const MINT_AUTHORITY_SEED: [u8; 32] = *b"uct:universal-mint-authority:v1\0";

/// The mint authority key pair. Anyone can derive it; minters sign the
/// genesis spending message with it.
pub fn mint_keypair() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed(&MINT_AUTHORITY_SEED)
}

/// The fixed locking condition of every mint position.
pub fn mint_predicate() -> Predicate {
    Predicate::unlock_by_key(mint_keypair().public_key())
}
