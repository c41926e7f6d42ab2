//! Error taxonomy for descriptor resolution and linter execution.
//!
//! Lint *failures* (cfn-lint ran and found problems) are not errors; they are
//! per-target results rolled into the exit code. Everything here aborts the
//! run when it surfaces.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The descriptor file is not parseable as the expected shape, or a
    /// resource entry is structurally invalid (missing `Template`,
    /// non-scalar parameter value).
    #[error("malformed descriptor {}: {detail}", path.display())]
    MalformedDescriptor { path: PathBuf, detail: String },

    /// The descriptor file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Canonicalizing the descriptor's directory failed.
    #[error("failed to resolve {}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external linter executable could not be started at all.
    #[error("failed to launch {bin}; is it installed and on PATH?")]
    LinterLaunch {
        bin: &'static str,
        #[source]
        source: io::Error,
    },
}
