//! Chain validation: per-block self-consistency and hash linkage.

use crate::block::Block;
use crate::error::ChainError;

/// Validate a chain of blocks in index order.
///
/// For every block after genesis:
/// 1. its stored hash must equal the digest of its own fields
/// 2. its previous hash must equal the preceding block's hash
///
/// The first failure is returned. Genesis is trusted by construction and is
/// not re-hashed. An empty chain or a lone genesis block is valid.
pub fn validate_chain(blocks: &[Block]) -> Result<(), ChainError> {
    for pair in blocks.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        if current.recompute_hash() != *current.hash() {
            return Err(ChainError::HashMismatch {
                index: current.index(),
            });
        }

        if !current.previous_hash().links_to(previous.hash()) {
            return Err(ChainError::BrokenLink {
                index: current.index(),
            });
        }
    }

    Ok(())
}

/// Boolean form of [`validate_chain`].
pub fn is_chain_valid(blocks: &[Block]) -> bool {
    validate_chain(blocks).is_ok()
}
