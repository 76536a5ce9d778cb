//! Human-readable state dump.
//!
//! Renders the table as 16 rows of 16 hex bytes followed by both cursors.
//! Formatting only reads the state.

use std::fmt::{Display, Formatter, Result};

use super::core::Jc1;

const ROW: usize = 16;
const INDENT: &str = "    ";

/// Writes `label:` followed by the indented table and cursor lines.
pub(crate) fn write_state(f: &mut Formatter<'_>, label: impl Display, jc1: &Jc1) -> Result {
    writeln!(f, "{label}:")?;

    for row in jc1.state.chunks(ROW) {
        f.write_str(INDENT)?;

        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{byte:02x}")?;
        }

        f.write_str("\n")?;
    }

    writeln!(f, "{INDENT}p: {:02x}", jc1.p)?;
    write!(f, "{INDENT}q: {:02x}", jc1.q)
}

impl Display for Jc1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_state(f, "jc1", self)
    }
}
