//! Keystream generators.
//!
//! This module provides the JC1 pseudorandom byte generator in two forms:
//!
//! - [`Jc1`]
//!   A single 256-byte table with two cursors. One call to
//!   [`KeyStream::step`] yields one keystream byte.
//!
//! - [`UberJc1`]
//!   Four independently keyed [`Jc1`] lanes chained in series, trading
//!   four times the work per byte for a larger effective state.
//!
//! Both implement [`KeyStream`], the capability the bounded sampler in
//! [`crate::rng`] is written against, and `std::io::Read` for use with
//! generic byte consumers.
//!
//! Encryption and decryption are the same operation: XOR with the
//! keystream.
//!
//! # Concurrency
//!
//! Every operation that produces output takes `&mut self`. A generator
//! has no internal synchronization; callers that need several threads of
//! randomness should key separate instances.

mod jc1;
mod keystream;
mod uber;

pub use self::jc1::core::{Jc1, STATE_LEN};
pub use keystream::KeyStream;
pub use uber::{LANES, UberJc1};
