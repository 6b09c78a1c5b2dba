//! Composite textual keys for the two passes.
//!
//! Keys stay serialized text end to end: the runner sorts and groups on the
//! key string, so no custom comparator is needed.

use crate::cell::{Cell, MatrixTag};
use crate::error::{Error, Result};

/// Expands a cell into its `num_repeat` keyed emissions, t = 0..num_repeat.
///
/// An A-cell (i,k) is broadcast across output columns j=t with key
/// `"i,k,t"`; a B-cell (k,j) across output rows i=t with key `"t,k,j"`.
/// The A and B cells contributing to C(i,j) at inner index k thus receive
/// the identical key (i,k,j) and meet in one reduce group. The cell's value
/// is carried unchanged in every pair.
pub fn pair_keys(cell: &Cell) -> impl Iterator<Item = (String, f64)> + '_ {
    (0..cell.num_repeat).map(move |t| {
        let key = match cell.matrix {
            MatrixTag::A => format!("{},{},{}", cell.row, cell.col, t),
            MatrixTag::B => format!("{},{},{}", t, cell.row, cell.col),
        };
        (key, cell.value)
    })
}

/// Projects a pair key (i,k,j) down to the output key (i,j).
///
/// The middle k component has served its purpose of grouping the product
/// for one inner-product term and is discarded.
pub fn project(pair_key: &str) -> Result<String> {
    let parts: Vec<&str> = pair_key.split(',').collect();
    if parts.len() != 3 {
        return Err(Error::MalformedIntermediate {
            line: pair_key.to_string(),
            reason: format!(
                "key has {} comma-separated components, expected 3",
                parts.len()
            ),
        });
    }
    Ok(format!("{},{}", parts[0], parts[2]))
}
