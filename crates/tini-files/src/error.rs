//! Error types for batch loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort loading a batch.
///
/// Every variant means the whole batch is unusable: no file of a failed
/// batch is handed to the parser.
#[derive(Debug)]
pub enum LoadError {
    /// A file could not be opened.
    Open {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A file's size could not be determined.
    Metadata {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A file could not be read completely.
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A file is larger than this platform can address.
    TooLarge {
        /// The file that failed.
        path: PathBuf,
        /// Size reported by the file system.
        size: u64,
    },
    /// The shared buffer for the batch could not be allocated.
    OutOfMemory {
        /// Total size of the batch in bytes.
        requested: usize,
    },
}

impl LoadError {
    /// The file the error refers to, if it is about a single file.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Open { path, .. }
            | Self::Metadata { path, .. }
            | Self::Read { path, .. }
            | Self::TooLarge { path, .. } => Some(path),
            Self::OutOfMemory { .. } => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::Metadata { path, source } => {
                write!(f, "cannot determine size of {}: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::TooLarge { path, size } => {
                write!(f, "{} is too large to load ({size} bytes)", path.display())
            }
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: cannot allocate {requested} bytes for the batch")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Metadata { source, .. } | Self::Read { source, .. } => {
                Some(source)
            }
            Self::TooLarge { .. } | Self::OutOfMemory { .. } => None,
        }
    }
}
