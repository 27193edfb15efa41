//! Error types for generation runs.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a generation run. None of these are
/// recovered; a run either produces a complete header or fails.
#[derive(Debug, Error)]
pub enum GenError {
    /// The scan directory does not exist or is not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A source file or include target could not be found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },
}
