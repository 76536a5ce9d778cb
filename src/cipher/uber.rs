//! UberJc1: four JC1 lanes in series.
//!
//! Each input byte passes through lane 0, its output feeds lane 1, and so
//! on; lane 3 produces the result. All four lanes advance exactly once per
//! step.
//!
//! Lane keys are derived from the caller's key: lane `i` is keyed with
//! the original key encrypted under lane `i - 1`. Deriving a key advances
//! the previous lane by `key.len()` steps, and that advanced state is kept.

use std::fmt::{Display, Formatter};
use std::io::{self, Read};

use serde::{Deserialize, Serialize};

use crate::cipher::KeyStream;
use crate::cipher::jc1::core::Jc1;
use crate::cipher::jc1::dump::write_state;

/// Number of cascaded lanes.
pub const LANES: usize = 4;

/// Four-lane cascaded JC1 generator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UberJc1 {
    lanes: [Jc1; LANES],
}

impl UberJc1 {
    /// Creates a cascade keyed with `key`.
    pub fn new(key: &[u8]) -> Self {
        let mut lanes: [Jc1; LANES] = Default::default();
        lanes[0] = Jc1::new(key);

        for i in 1..LANES {
            let derived = lanes[i - 1].xor_keystream(key);
            lanes[i] = Jc1::new(&derived);
        }

        Self { lanes }
    }

    /// The lanes in pipeline order.
    pub fn lanes(&self) -> &[Jc1; LANES] {
        &self.lanes
    }
}

impl KeyStream for UberJc1 {
    #[inline]
    fn step(&mut self, input: u8) -> u8 {
        self.lanes
            .iter_mut()
            .fold(input, |byte, lane| lane.step(byte))
    }

    fn reset(&mut self) {
        for lane in &mut self.lanes {
            lane.reset();
        }
    }
}

impl Read for UberJc1 {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.fill(buf))
    }
}

impl Display for UberJc1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }

            write_state(f, format_args!("lane {i}"), lane)?;
        }

        Ok(())
    }
}
