//! Minimal single-process map/shuffle/reduce runner.
//!
//! Provides the standard contract the passes are written against: every
//! value emitted under a key is delivered to exactly one reduce call, keys
//! are grouped in sorted order, and an optional combiner pre-aggregates map
//! output per split. Distribution concerns (scheduling, retries,
//! partitioning across processes) are deliberately absent.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Map side of the contract: one input line in, zero or more keyed doubles
/// out. A mapper may emit nothing for a line it skips.
pub trait Mapper {
    fn map(&self, line: &str, out: &mut Vec<(String, f64)>) -> Result<()>;
}

/// Reduce side of the contract: folds all values delivered under one key.
/// Values arrive in an unspecified order.
pub trait Reducer {
    fn reduce(&self, key: &str, values: &[f64]) -> f64;
}

/// Lists the splits of an input directory in name order.
///
/// Each regular file is one split. Files named with a leading `_` or `.`
/// are runtime markers (`_SUCCESS` and the like) and are skipped, so a
/// committed job output directory can be read back directly as input.
pub fn input_splits(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(Error::InputNotFound {
            path: input_dir.to_path_buf(),
        });
    }
    let mut splits = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('_') || name.starts_with('.') {
            continue;
        }
        splits.push(path);
    }
    splits.sort();
    Ok(splits)
}

/// Runs map, shuffle and reduce over the splits, returning the reduced
/// pairs in key order.
pub fn run(
    mapper: &dyn Mapper,
    reducer: &dyn Reducer,
    combiner: Option<&dyn Reducer>,
    splits: &[PathBuf],
) -> Result<Vec<(String, f64)>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for split in splits {
        debug!(split = %split.display(), "mapping split");
        let mut emitted = Vec::new();
        let reader = BufReader::new(File::open(split)?);
        for line in reader.lines() {
            mapper.map(&line?, &mut emitted)?;
        }
        debug!(split = %split.display(), pairs = emitted.len(), "split mapped");

        match combiner {
            // Map-side pre-aggregation; sound only while the reduction is
            // associative and commutative.
            Some(combiner) => {
                let mut local: BTreeMap<String, Vec<f64>> = BTreeMap::new();
                for (key, value) in emitted {
                    local.entry(key).or_default().push(value);
                }
                for (key, values) in local {
                    let combined = combiner.reduce(&key, &values);
                    groups.entry(key).or_default().push(combined);
                }
            }
            None => {
                for (key, value) in emitted {
                    groups.entry(key).or_default().push(value);
                }
            }
        }
    }

    info!(keys = groups.len(), "shuffle complete");

    Ok(groups
        .into_iter()
        .map(|(key, values)| {
            let reduced = reducer.reduce(&key, &values);
            (key, reduced)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    struct EchoMapper;

    impl Mapper for EchoMapper {
        fn map(&self, line: &str, out: &mut Vec<(String, f64)>) -> Result<()> {
            if line.is_empty() {
                return Ok(());
            }
            let (key, value) = line.split_once(' ').unwrap();
            out.push((key.to_string(), value.parse().unwrap()));
            Ok(())
        }
    }

    struct SumAll;

    impl Reducer for SumAll {
        fn reduce(&self, _key: &str, values: &[f64]) -> f64 {
            values.iter().sum()
        }
    }

    fn write_split(dir: &Path, name: &str, lines: &[&str]) {
        let mut file = File::create(dir.join(name)).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
    }

    #[test]
    fn splits_skip_markers_and_sort_by_name() {
        let dir = TempDir::new().unwrap();
        write_split(dir.path(), "part-r-00001", &[]);
        write_split(dir.path(), "part-r-00000", &[]);
        write_split(dir.path(), "_SUCCESS", &[]);
        write_split(dir.path(), ".hidden", &[]);

        let splits = input_splits(dir.path()).unwrap();
        let names: Vec<_> = splits
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["part-r-00000", "part-r-00001"]);
    }

    #[test]
    fn missing_input_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = input_splits(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }

    #[test]
    fn groups_values_across_splits() {
        let dir = TempDir::new().unwrap();
        write_split(dir.path(), "a.txt", &["x 1", "y 2"]);
        write_split(dir.path(), "b.txt", &["x 3"]);

        let splits = input_splits(dir.path()).unwrap();
        let reduced = run(&EchoMapper, &SumAll, None, &splits).unwrap();
        assert_eq!(reduced, vec![("x".to_string(), 4.0), ("y".to_string(), 2.0)]);
    }

    #[test]
    fn combiner_matches_reducer_only_output() {
        let dir = TempDir::new().unwrap();
        write_split(dir.path(), "a.txt", &["x 1", "x 2", "y 5"]);
        write_split(dir.path(), "b.txt", &["x 3", "y 7"]);

        let splits = input_splits(dir.path()).unwrap();
        let with = run(&EchoMapper, &SumAll, Some(&SumAll), &splits).unwrap();
        let without = run(&EchoMapper, &SumAll, None, &splits).unwrap();
        assert_eq!(with, without);
    }
}
