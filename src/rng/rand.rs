//! Bounded random values drawn from a keystream.
//!
//! [`Rand`] wraps a [`KeyStream`] and turns its bytes into uniformly
//! distributed integers, permutations and shuffles. It holds no state of
//! its own: two `Rand`s over generators in the same state produce the same
//! values for the same call sequence.

use std::io::{self, Read};

use crate::cipher::KeyStream;
use crate::error::RandError;
use crate::rng::SampleInt;
use crate::rng::sample;

/// Uniform sampler over a keystream source.
///
/// The source can be owned (`Rand<Jc1>`) or borrowed (`Rand<&mut Jc1>`).
pub struct Rand<S> {
    source: S,
}

impl<S: KeyStream> Rand<S> {
    /// Attaches a sampler to `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Detaches the sampler and hands back the source in its current state.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Uniform `isize` in `[0, max)`.
    ///
    /// # Errors
    ///
    /// [`RandError::NonPositiveBound`] if `max <= 0`.
    pub fn isize_below(&mut self, max: isize) -> Result<isize, RandError> {
        if max <= 0 {
            return Err(RandError::NonPositiveBound { bound: max as i128 });
        }

        Ok(sample::below(&mut self.source, max as u64) as isize)
    }

    /// Uniform `i16` in `[0, max)`.
    ///
    /// # Errors
    ///
    /// [`RandError::NonPositiveBound`] if `max <= 0`.
    pub fn i16_below(&mut self, max: i16) -> Result<i16, RandError> {
        if max <= 0 {
            return Err(RandError::NonPositiveBound { bound: max.into() });
        }

        Ok(sample::below(&mut self.source, max as u64) as i16)
    }

    /// Uniform `i32` in `[0, max)`; a bound of zero yields zero.
    ///
    /// # Errors
    ///
    /// [`RandError::NegativeBound`] if `max < 0`.
    pub fn i32_below(&mut self, max: i32) -> Result<i32, RandError> {
        if max < 0 {
            return Err(RandError::NegativeBound { bound: max.into() });
        }

        Ok(sample::below(&mut self.source, max as u64) as i32)
    }

    /// Uniform `i64` in `[0, max)`; a bound of zero yields zero.
    ///
    /// # Errors
    ///
    /// [`RandError::NegativeBound`] if `max < 0`.
    pub fn i64_below(&mut self, max: i64) -> Result<i64, RandError> {
        if max < 0 {
            return Err(RandError::NegativeBound { bound: max.into() });
        }

        Ok(sample::below(&mut self.source, max as u64) as i64)
    }

    /// Uniform `u64` in `[0, max)`; a bound of zero yields zero.
    pub fn u64_below(&mut self, max: u64) -> u64 {
        sample::below(&mut self.source, max)
    }

    /// Uniform value of any primitive integer type in `[0, max)`.
    ///
    /// Runs the same loop as [`Rand::u64_below`], so equal bounds give
    /// identical results whatever the type.
    ///
    /// # Errors
    ///
    /// [`RandError::NonPositiveBound`] if `max <= 0`.
    pub fn below<T: SampleInt>(&mut self, max: T) -> Result<T, RandError> {
        if !max.is_positive() {
            return Err(RandError::NonPositiveBound {
                bound: max.to_i128(),
            });
        }

        Ok(T::from_u64(self.u64_below(max.to_u64())))
    }

    /// Four keystream bytes read as a big-endian `u32`.
    pub fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.source.fill(&mut bytes);
        u32::from_be_bytes(bytes)
    }

    /// A uniformly random permutation of `0..n`.
    ///
    /// Built by inside-out Fisher–Yates: each `i` is inserted at a random
    /// slot `j <= i` and the previous occupant moves to the end.
    ///
    /// # Errors
    ///
    /// [`RandError::NegativeLength`] if `n < 0`.
    pub fn perm(&mut self, n: isize) -> Result<Vec<usize>, RandError> {
        let Ok(len) = usize::try_from(n) else {
            return Err(RandError::NegativeLength { len: n as i128 });
        };

        let mut out = vec![0usize; len];

        for i in 1..len {
            let j = sample::below(&mut self.source, i as u64 + 1) as usize;
            out[i] = out[j];
            out[j] = i;
        }

        Ok(out)
    }

    /// A shuffled copy of `items`; the input is left untouched.
    ///
    /// Fisher–Yates from the end. Elements are only cloned and moved,
    /// never compared.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();

        for i in (1..out.len()).rev() {
            let j = sample::below(&mut self.source, i as u64 + 1) as usize;
            out.swap(i, j);
        }

        out
    }

    /// XORs the keystream into `buf` and returns `buf.len()`.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        self.source.fill(buf)
    }
}

impl<S: KeyStream> Read for Rand<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.source.fill(buf))
    }
}
