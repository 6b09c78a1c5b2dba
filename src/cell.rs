//! Parsing of pre-replicated matrix cell records.
//!
//! One record describes a single entry of A or B together with the number
//! of keyed copies the pass-1 mapper must emit for it (J copies for an
//! A-cell, I copies for a B-cell). The upstream replicator produces these
//! lines; this crate only consumes them.

use crate::error::{Error, Result};

/// Which source matrix a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixTag {
    A,
    B,
}

/// One pre-replicated input record describing a single matrix entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Number of keyed copies the mapper emits for this cell.
    pub num_repeat: u32,
    /// Row index, kept as opaque text.
    pub row: String,
    /// Column index, kept as opaque text.
    pub col: String,
    pub value: f64,
    pub matrix: MatrixTag,
}

impl Cell {
    /// Parses one `numRepeat,r,c,val,matrixTag` line.
    ///
    /// At least five comma-separated fields are required; extra fields are
    /// ignored. Trailing whitespace is tolerated. A tag of `1` marks an
    /// A-cell; any other integer marks a B-cell.
    pub fn parse(line: &str) -> Result<Cell> {
        let malformed = |reason: String| Error::MalformedRecord {
            line: line.to_string(),
            reason,
        };

        let fields: Vec<&str> = line.trim_end().split(',').collect();
        if fields.len() < 5 {
            return Err(malformed(format!(
                "expected 5 fields, got {}",
                fields.len()
            )));
        }

        let num_repeat: u32 = fields[0].parse().map_err(|_| {
            malformed(format!(
                "numRepeat {:?} is not a non-negative integer",
                fields[0]
            ))
        })?;

        let value: f64 = fields[3]
            .parse()
            .map_err(|_| malformed(format!("value {:?} is not a number", fields[3])))?;
        if !value.is_finite() {
            return Err(malformed(format!("value {:?} is not finite", fields[3])));
        }

        let tag: i64 = fields[4]
            .parse()
            .map_err(|_| malformed(format!("matrix tag {:?} is not an integer", fields[4])))?;

        Ok(Cell {
            num_repeat,
            row: fields[1].to_string(),
            col: fields[2].to_string(),
            value,
            matrix: if tag == 1 { MatrixTag::A } else { MatrixTag::B },
        })
    }
}
