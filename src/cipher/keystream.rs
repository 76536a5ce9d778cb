//! Keystream source abstraction
//!
//! Everything that produces a JC1-style keystream implements
//! [`KeyStream`]. The bounded sampler in [`crate::rng`] is written once
//! against this trait and works unchanged over a single generator or the
//! four-lane cascade.

/// A keyed, deterministic byte generator.
///
/// Implementors provide the single state-mutating primitive
/// [`step`](KeyStream::step) and a way back to the unkeyed state. The
/// buffer-level operations are derived from `step` and advance the
/// generator by exactly one step per byte.
///
/// No operation here can fail: any buffer length is accepted, including
/// zero.
pub trait KeyStream {
    /// Feeds `input` through the generator and returns the produced byte.
    fn step(&mut self, input: u8) -> u8;

    /// Returns the generator to its unkeyed, all-zero state.
    fn reset(&mut self);

    /// Encrypts or decrypts `src`, returning a new buffer of the same length.
    ///
    /// Each byte is XORed with `step(0)`. Applying the same keystream twice
    /// restores the input, so encryption and decryption are one operation.
    fn xor_keystream(&mut self, src: &[u8]) -> Vec<u8> {
        let mut dst = src.to_vec();
        self.fill(&mut dst);
        dst
    }

    /// XORs the keystream into `buf` in place and returns `buf.len()`.
    ///
    /// The existing contents of `buf` are kept and XORed, not overwritten.
    /// A zeroed buffer therefore receives the raw keystream.
    fn fill(&mut self, buf: &mut [u8]) -> usize {
        for byte in buf.iter_mut() {
            *byte ^= self.step(0);
        }

        buf.len()
    }
}

impl<S: KeyStream + ?Sized> KeyStream for &mut S {
    #[inline]
    fn step(&mut self, input: u8) -> u8 {
        (**self).step(input)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn xor_keystream(&mut self, src: &[u8]) -> Vec<u8> {
        (**self).xor_keystream(src)
    }

    fn fill(&mut self, buf: &mut [u8]) -> usize {
        (**self).fill(buf)
    }
}
