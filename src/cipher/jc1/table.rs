//! Serde adapter for the 256-byte state table.
//!
//! Serde only derives fixed-size arrays up to 32 elements, so the table is
//! written as a plain sequence and length-checked on the way back in.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

use super::core::STATE_LEN;

pub(crate) fn serialize<S>(table: &[u8; STATE_LEN], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(table.iter())
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<[u8; STATE_LEN], D::Error>
where
    D: Deserializer<'de>,
{
    let bytes = Vec::<u8>::deserialize(deserializer)?;
    let len = bytes.len();

    <[u8; STATE_LEN]>::try_from(bytes)
        .map_err(|_| D::Error::invalid_length(len, &"a state table of 256 bytes"))
}
