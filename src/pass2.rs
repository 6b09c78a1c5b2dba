//! Pass 2: project (i,k,j) down to (i,j) and sum the partial products.

use crate::error::{Error, Result};
use crate::key::project;
use crate::runtime::{Mapper, Reducer};

/// Reparses a pass-1 output line and drops the inner index from its key.
pub struct Pass2Mapper;

impl Mapper for Pass2Mapper {
    fn map(&self, line: &str, out: &mut Vec<(String, f64)>) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let malformed = |reason: String| Error::MalformedIntermediate {
            line: line.to_string(),
            reason,
        };

        let (pair_key, value_text) = line
            .split_once('\t')
            .ok_or_else(|| malformed("missing tab separator".to_string()))?;
        let value: f64 = value_text
            .trim_end()
            .parse()
            .map_err(|_| malformed(format!("value {:?} is not a number", value_text)))?;

        out.push((project(pair_key)?, value));
        Ok(())
    }
}

/// Sums all partial products for one output cell, accumulator seeded at
/// 0.0. Plain summation in delivery order.
pub struct SumReducer;

impl Reducer for SumReducer {
    fn reduce(&self, _key: &str, values: &[f64]) -> f64 {
        values.iter().fold(0.0, |acc, v| acc + v)
    }
}
