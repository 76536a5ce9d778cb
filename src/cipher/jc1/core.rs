//! JC1 core state machine
//!
//! JC1 is a byte-oriented generator designed by John C. Craig (1996) and
//! placed in the public domain. Its whole state is a 256-byte table and
//! two one-byte cursors; every output byte mutates both cursors and one
//! table entry.
//!
//! All arithmetic is modulo 256. Overflow is part of the algorithm and is
//! spelled out with `wrapping_add` everywhere.
//!
//! This is a legacy construction kept for compatibility with existing
//! keyed streams. It makes no claim of cryptographic security.

use std::io::{Read, Result};

use serde::{Deserialize, Serialize};

use crate::cipher::KeyStream;

/// Number of entries in the JC1 state table.
pub const STATE_LEN: usize = 256;

/// Single-lane JC1 generator.
///
/// Construct with [`Jc1::new`]. [`Jc1::default`] yields the unkeyed
/// all-zero state, which is also what [`KeyStream::reset`] returns to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jc1 {
    /// Permutation-like state table, indexed by the cursors.
    #[serde(with = "super::table")]
    pub(crate) state: [u8; STATE_LEN],

    /// Position cursor, incremented once per step.
    pub(crate) p: u8,

    /// Accumulator cursor.
    pub(crate) q: u8,
}

impl Jc1 {
    /// Creates a generator keyed with `key`.
    ///
    /// Every key byte is fed through the core transform, followed by one
    /// warm-up pass feeding `0..=255`. All outputs of both passes are
    /// discarded. Any key is accepted, including an empty one.
    pub fn new(key: &[u8]) -> Self {
        let mut jc1 = Self::default();
        jc1.rekey(key);
        jc1
    }

    /// Resets the generator, then keys it with `key`.
    ///
    /// The result is identical to `Jc1::new(key)` no matter how the
    /// generator was used before.
    pub fn rekey(&mut self, key: &[u8]) {
        self.reset();

        for &byte in key {
            self.step(byte);
        }

        self.warm_up();
    }

    /// Read-only view of the state table.
    pub fn table(&self) -> &[u8; STATE_LEN] {
        &self.state
    }

    /// Current `(p, q)` cursor pair.
    pub fn cursors(&self) -> (u8, u8) {
        (self.p, self.q)
    }

    fn warm_up(&mut self) {
        for value in 0..=u8::MAX {
            self.step(value);
        }
    }
}

impl Default for Jc1 {
    fn default() -> Self {
        Self {
            state: [0u8; STATE_LEN],
            p: 0,
            q: 0,
        }
    }
}

impl KeyStream for Jc1 {
    /// The JC1 core transform.
    ///
    /// In order: advance `p`; add `input` into `state[p]`; add `state[p]`
    /// into `q`; add `state[q] + p` into `state[p]`; emit `state[p]`.
    #[inline(always)]
    fn step(&mut self, input: u8) -> u8 {
        self.p = self.p.wrapping_add(1);

        let p = self.p as usize;
        self.state[p] = self.state[p].wrapping_add(input);
        self.q = self.q.wrapping_add(self.state[p]);

        let mix = self.state[self.q as usize].wrapping_add(self.p);
        self.state[p] = self.state[p].wrapping_add(mix);

        self.state[p]
    }

    fn reset(&mut self) {
        self.state.fill(0);
        self.p = 0;
        self.q = 0;
    }
}

impl Read for Jc1 {
    /// Fills `buf` by XORing it with the keystream. Never fails.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.fill(buf))
    }
}
