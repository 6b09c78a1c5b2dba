//! Job driver: wires a mapper/reducer pair against the local runner and
//! commits the reduced output as `key\tvalue` text.
//!
//! Both passes are configured identically except for their mapper, reducer
//! and paths; the combiner equals the reducer in both.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::pass1::{Pass1Mapper, ProductReducer};
use crate::pass2::{Pass2Mapper, SumReducer};
use crate::runtime::{self, Mapper, Reducer};

/// Name of the single reduce output file.
pub const PART_FILE: &str = "part-r-00000";
/// Marker committed after a successful run; readers treat its presence as
/// the commit signal for the pass barrier.
pub const SUCCESS_MARKER: &str = "_SUCCESS";

pub struct Job<'a> {
    pub name: &'a str,
    pub mapper: &'a dyn Mapper,
    pub reducer: &'a dyn Reducer,
    /// `None` disables map-side pre-aggregation.
    pub combiner: Option<&'a dyn Reducer>,
}

/// The multiplication pass over replicated cell records.
pub fn pass1() -> Job<'static> {
    Job {
        name: "pass1",
        mapper: &Pass1Mapper,
        reducer: &ProductReducer,
        combiner: Some(&ProductReducer),
    }
}

/// The summation pass over pass-1 output.
pub fn pass2() -> Job<'static> {
    Job {
        name: "pass2",
        mapper: &Pass2Mapper,
        reducer: &SumReducer,
        combiner: Some(&SumReducer),
    }
}

impl Job<'_> {
    /// Runs the job from `input_dir` into a fresh `output_dir`.
    ///
    /// The output directory must not exist yet and its parent must; reruns
    /// never overwrite a committed result. Nothing is written until the
    /// reduce completes, so a failed job leaves no output directory behind.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<()> {
        info!(
            job = self.name,
            input = %input_dir.display(),
            output = %output_dir.display(),
            "starting job"
        );

        if output_dir.exists() {
            return Err(Error::OutputDirExists {
                path: output_dir.to_path_buf(),
            });
        }
        match output_dir.parent() {
            Some(parent) if parent.as_os_str().is_empty() || parent.exists() => {}
            _ => {
                return Err(Error::OutputParentMissing {
                    path: output_dir.to_path_buf(),
                })
            }
        }

        let splits = runtime::input_splits(input_dir)?;
        info!(job = self.name, splits = splits.len(), "input scanned");

        let reduced = runtime::run(self.mapper, self.reducer, self.combiner, &splits)?;

        fs::create_dir(output_dir)?;
        let mut writer = BufWriter::new(File::create(output_dir.join(PART_FILE))?);
        for (key, value) in &reduced {
            writeln!(writer, "{}\t{}", key, fmt_double(*value))?;
        }
        writer.flush()?;
        File::create(output_dir.join(SUCCESS_MARKER))?;

        info!(job = self.name, pairs = reduced.len(), "job committed");
        Ok(())
    }
}

/// Round-trippable double text. Keeps the trailing `.0` on integral values
/// so the product 1 is written as `1.0`, the format pass 2 reparses.
pub fn fmt_double(value: f64) -> String {
    format!("{:?}", value)
}
