//! Single-lane JC1 generator.
//!
//! The implementation is split into:
//!
//! - `core`
//!   The state machine: keying, the core transform and reset.
//!
//! - `dump`
//!   The `Display` hex dump of the current state.
//!
//! - `table`
//!   Serde support for the fixed 256-byte table.

pub(crate) mod core;
pub(crate) mod dump;
mod table;
