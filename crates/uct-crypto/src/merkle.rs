//! # Merkle Audit Paths
//!
//! Binary Merkle tree with domain-separated hashing, used by the Unicity
//! Service to commit to its registered (StateId → transaction hash)
//! entries and by verifiers to check inclusion offline.
//!
//! ## Hashing
//!
//! - Leaf: `SHA256(0x00 ‖ leaf_bytes)`.
//! - Node: `SHA256(0x01 ‖ left ‖ right)`.
//!
//! The 0x00/0x01 prefixes keep leaves and interior nodes in disjoint hash
//! domains, so an interior node can never be replayed as a leaf.
//!
//! ## Shape
//!
//! Levels are built left to right; an unpaired last node is promoted to
//! the next level unchanged. An audit path therefore contains one step per
//! level at which the node had a sibling, and folding the leaf through the
//! path must land exactly on the committed root.

use serde::{Deserialize, Serialize};

use uct_core::error::CryptoError;
use uct_core::{sha256_concat, Digest};

/// Which side of the current node the sibling hash sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Sibling is the left input of the parent node.
    Left,
    /// Sibling is the right input of the parent node.
    Right,
}

/// A single step of a Merkle audit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// Which side the sibling is on.
    pub side: Side,
    /// The sibling hash.
    pub hash: Digest,
}

/// Compute a leaf hash: `SHA256(0x00 ‖ data)`.
pub fn leaf_hash(data: &[u8]) -> Digest {
    sha256_concat(&[&[0x00], data])
}

/// Compute a parent node hash: `SHA256(0x01 ‖ left ‖ right)`.
pub fn node_hash(left: &Digest, right: &Digest) -> Digest {
    sha256_concat(&[&[0x01], left.as_bytes(), right.as_bytes()])
}

/// Compute the root over already-hashed leaves.
///
/// # Errors
///
/// Returns `CryptoError::DigestError` for an empty leaf set — the service
/// never certifies an empty tree.
pub fn merkle_root(leaves: &[Digest]) -> Result<Digest, CryptoError> {
    if leaves.is_empty() {
        return Err(CryptoError::DigestError(
            "cannot compute root of empty tree".to_string(),
        ));
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = fold_level(&level);
    }
    Ok(level.remove(0))
}

/// Compute the audit path for the leaf at `index`.
///
/// # Errors
///
/// Returns `CryptoError::DigestError` if `index` is out of range or the
/// leaf set is empty.
pub fn audit_path(leaves: &[Digest], index: usize) -> Result<Vec<PathStep>, CryptoError> {
    if index >= leaves.len() {
        return Err(CryptoError::DigestError(format!(
            "leaf index {index} out of range for {} leaves",
            leaves.len()
        )));
    }
    let mut level = leaves.to_vec();
    let mut pos = index;
    let mut path = Vec::new();

    while level.len() > 1 {
        let sibling = pos ^ 1;
        if sibling < level.len() {
            let side = if sibling < pos { Side::Left } else { Side::Right };
            path.push(PathStep {
                side,
                hash: level[sibling].clone(),
            });
        }
        // An unpaired last node is promoted with no step at this level.
        level = fold_level(&level);
        pos /= 2;
    }
    Ok(path)
}

/// Fold a leaf hash through an audit path and compare with the root.
///
/// Pure and total: malformed paths simply fail to reproduce the root.
pub fn verify_audit_path(leaf: &Digest, path: &[PathStep], root: &Digest) -> bool {
    let mut cur = leaf.clone();
    for step in path {
        cur = match step.side {
            Side::Left => node_hash(&step.hash, &cur),
            Side::Right => node_hash(&cur, &step.hash),
        };
    }
    cur == *root
}

/// Build the next level up: hash pairs, promote an unpaired last node.
fn fold_level(level: &[Digest]) -> Vec<Digest> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut chunks = level.chunks_exact(2);
    for pair in chunks.by_ref() {
        next.push(node_hash(&pair[0], &pair[1]));
    }
    if let [odd] = chunks.remainder() {
        next.push(odd.clone());
    }
    next
}
