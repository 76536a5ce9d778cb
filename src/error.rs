//! Error types for the bounded sampler.

use thiserror::Error;

/// Invalid arguments passed to a [`Rand`](crate::rng::Rand) operation.
///
/// These are caller mistakes, detected before any keystream byte is
/// drawn; the generator state is unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandError {
    /// The operation requires a strictly positive upper bound.
    #[error("invalid bound {bound}: must be greater than zero")]
    NonPositiveBound { bound: i128 },

    /// The operation accepts zero but not a negative upper bound.
    #[error("invalid bound {bound}: must not be negative")]
    NegativeBound { bound: i128 },

    /// A permutation length was negative.
    #[error("invalid permutation length {len}: must not be negative")]
    NegativeLength { len: i128 },
}
