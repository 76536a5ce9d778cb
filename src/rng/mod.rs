//! Bounded random values
//!
//! This module turns a keystream from [`crate::cipher`] into uniformly
//! distributed integers, permutations and shuffles.
//!
//! Uniformity comes from rejection sampling rather than modulo reduction:
//! candidates are drawn from the smallest power-of-two range covering the
//! bound and redrawn when they fall outside it. Each attempt consumes a
//! fixed number of bytes and succeeds with probability above one half.
//!
//! Every result is a pure function of the source's byte stream and the
//! call sequence, so a given key always reproduces the same values.

/// Design goals:
/// - No modulo bias
/// - Bit-exact compatibility with existing keyed streams
/// - No heap allocation outside the returned collections
mod int;
mod rand;
pub(crate) mod sample;

/// Keystream-backed uniform sampler.
pub use rand::Rand;

/// Integer types accepted by [`Rand::below`].
pub use int::SampleInt;
