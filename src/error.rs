use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("malformed intermediate line {line:?}: {reason}")]
    MalformedIntermediate { line: String, reason: String },

    #[error("input path {} is not a directory", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("output directory {} already exists", .path.display())]
    OutputDirExists { path: PathBuf },

    #[error("parent of output directory {} does not exist", .path.display())]
    OutputParentMissing { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
