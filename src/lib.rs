//! JC1 keyed pseudorandom byte generator
//!
//! This crate provides the JC1 byte generator, usable as a stream cipher
//! (XOR with the keystream), and a sampler that turns its keystream into
//! uniformly distributed bounded integers.
//!
//! The focus is on **reproducibility**: for a given key and call sequence
//! every output is bit-exact, so streams produced by existing deployments
//! can be regenerated and checked.
//!
//! # Module overview
//!
//! - `cipher`
//!   The generators. [`cipher::Jc1`] is the single-lane state machine: a
//!   256-byte table and two cursors, mutated once per output byte.
//!   [`cipher::UberJc1`] chains four independently keyed lanes.
//!   Both implement [`cipher::KeyStream`] and `std::io::Read`.
//!
//! - `rng`
//!   [`rng::Rand`], a rejection sampler over any [`cipher::KeyStream`]:
//!   integers below a bound for every primitive width, permutations and
//!   shuffles, all free of modulo bias.
//!
//! - `error`
//!   [`error::RandError`], returned for invalid sampler arguments.
//!
//! # Example
//!
//! ```
//! use jc1::cipher::{Jc1, KeyStream};
//! use jc1::rng::Rand;
//!
//! let mut jc1 = Jc1::new(b"SecretKey");
//! let ciphertext = jc1.xor_keystream(b"attack at dawn");
//!
//! let mut jc1 = Jc1::new(b"SecretKey");
//! assert_eq!(jc1.xor_keystream(&ciphertext), b"attack at dawn");
//!
//! let mut rand = Rand::new(Jc1::new(b"NowIsNotTheTimeToRunForFun"));
//! assert_eq!(rand.perm(10).unwrap(), [6, 8, 3, 7, 2, 9, 0, 1, 4, 5]);
//! ```
//!
//! # Security
//!
//! JC1 is a home-grown construction from 1996. It is kept for
//! compatibility, not for confidentiality, and must not be relied on where
//! cryptographic strength matters.

pub mod cipher;
pub mod error;
pub mod rng;
