//! Two-pass map/reduce matrix multiplication over textual cell records.
//!
//! Pass 1 pairs the pre-replicated A and B cells that share an (i,k,j)
//! position and multiplies them; pass 2 projects the key down to (i,j) and
//! sums the partial products into C(i,j). The passes are chained through an
//! on-disk `key\tvalue` intermediate written by the job driver.

pub mod cell;
pub mod error;
pub mod job;
pub mod key;
pub mod pass1;
pub mod pass2;
pub mod runtime;

pub use error::{Error, Result};
