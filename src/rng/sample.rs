//! Rejection sampling over a keystream.
//!
//! Each attempt draws `k = ceil(bit_len(max - 1) / 8)` bytes, clears every
//! bit of the leading byte above `bit_len(max - 1)`, reads the bytes as a
//! big-endian integer and accepts it if it is below `max`. The masked
//! candidate space is always smaller than `2 * max`, so an attempt succeeds
//! with probability above one half.
//!
//! The scratch buffer starts zeroed and is reused across attempts, and
//! [`KeyStream::fill`] XORs into it: a rejected candidate's bytes are mixed
//! into the next one. Masking the leading byte in place or masking the
//! assembled integer gives the same candidates, since the mask is reapplied
//! after every XOR.

use crate::cipher::KeyStream;

/// Widest candidate, in bytes.
const MAX_BYTES: usize = 8;

/// Number of significant bits in `n`; zero for zero.
#[inline]
fn bit_len(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Uniform value in `[0, max)`.
///
/// Returns 0 for `max <= 1` without drawing.
pub(crate) fn below<S: KeyStream + ?Sized>(source: &mut S, max: u64) -> u64 {
    let bits = bit_len(max.saturating_sub(1));
    if bits == 0 {
        return 0;
    }

    let len = bits.div_ceil(8) as usize;
    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let top_mask = u8::MAX >> (8 - top_bits);

    let mut scratch = [0u8; MAX_BYTES];
    let bytes = &mut scratch[..len];

    loop {
        source.fill(bytes);
        bytes[0] &= top_mask;

        let candidate = bytes
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

        if candidate < max {
            return candidate;
        }
    }
}
