//! Pass 1: pair the A and B cells sharing an (i,k,j) position and multiply.

use crate::cell::Cell;
use crate::error::Result;
use crate::key::pair_keys;
use crate::runtime::{Mapper, Reducer};

/// Parses replicated cell records and emits one keyed copy per repeat.
///
/// Empty lines mark the end of a record chunk and yield no emissions.
pub struct Pass1Mapper;

impl Mapper for Pass1Mapper {
    fn map(&self, line: &str, out: &mut Vec<(String, f64)>) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let cell = Cell::parse(line)?;
        out.extend(pair_keys(&cell));
        Ok(())
    }
}

/// Multiplies all values delivered under one pair key, accumulator seeded
/// at 1.0. With well-formed input that is exactly one A value and one B
/// value, so the result is A(i,k)·B(k,j), never a higher power.
pub struct ProductReducer;

impl Reducer for ProductReducer {
    fn reduce(&self, _key: &str, values: &[f64]) -> f64 {
        values.iter().fold(1.0, |acc, v| acc * v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapper_expands_a_cell() {
        let mut out = Vec::new();
        Pass1Mapper.map("2,0,1,3.0,1", &mut out).unwrap();
        assert_eq!(
            out,
            vec![("0,1,0".to_string(), 3.0), ("0,1,1".to_string(), 3.0)]
        );
    }

    #[test]
    fn mapper_expands_b_cell() {
        let mut out = Vec::new();
        Pass1Mapper.map("2,1,0,4.0,2", &mut out).unwrap();
        assert_eq!(
            out,
            vec![("0,1,0".to_string(), 4.0), ("1,1,0".to_string(), 4.0)]
        );
    }

    #[test]
    fn mapper_skips_empty_lines() {
        let mut out = Vec::new();
        Pass1Mapper.map("", &mut out).unwrap();
        Pass1Mapper.map("   ", &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn mapper_rejects_malformed_record() {
        let mut out = Vec::new();
        assert!(Pass1Mapper.map("3,0,0,abc,1", &mut out).is_err());
    }

    #[test]
    fn product_of_the_pair() {
        assert_eq!(ProductReducer.reduce("0,1,0", &[3.0, 4.0]), 12.0);
    }

    #[test]
    fn product_with_zero_factor_is_zero() {
        assert_eq!(ProductReducer.reduce("0,0,0", &[0.0, 7.0]), 0.0);
    }

    #[test]
    fn product_order_does_not_matter() {
        assert_eq!(
            ProductReducer.reduce("k", &[3.0, 4.0]),
            ProductReducer.reduce("k", &[4.0, 3.0])
        );
    }
}
