//! # Mint Policies
//!
//! What makes a mint *justified* is an application decision — a payment
//! received, an asset escrowed, an issuer allowlist — not a protocol one.
//! The verifier delegates that decision to a [`MintPolicy`] and treats a
//! rejection as `MintInvalid`.

use uct_token::MintData;

/// Application hook deciding whether a mint is justified.
///
/// Implementations must be pure with respect to the mint data: the same
/// dossier must verify the same way on every call.
pub trait MintPolicy {
    /// Accept or reject the genesis payload.
    fn justify(&self, mint: &MintData) -> bool;
}

/// Accepts every structurally valid mint. The default for contexts where
/// mint justification is enforced elsewhere or not at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllMints;

impl MintPolicy for AcceptAllMints {
    fn justify(&self, _mint: &MintData) -> bool {
        true
    }
}
