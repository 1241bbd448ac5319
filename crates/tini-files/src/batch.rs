//! Opening and reading a batch of files into one shared buffer.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tini_core::FileUnit;
use tracing::{debug, info};

use crate::error::LoadError;

/// A file that has been opened and sized but not yet read.
#[derive(Debug)]
struct OpenedFile {
    path: PathBuf,
    handle: File,
    size: usize,
}

/// A set of opened files waiting to be read as one batch.
///
/// Handles stay open until [`read_all`](FileSet::read_all) consumes the set
/// or the set is dropped.
#[derive(Debug, Default)]
pub struct FileSet {
    files: Vec<OpenedFile>,
    total_size: usize,
}

impl FileSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` read-only and record its current size.
    ///
    /// On failure the set is unchanged; the caller decides whether to
    /// abandon the batch (dropping the set closes every handle).
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref().to_path_buf();
        let handle = File::open(&path).map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;
        let metadata = handle.metadata().map_err(|source| LoadError::Metadata {
            path: path.clone(),
            source,
        })?;
        let reported = metadata.len();
        let size = usize::try_from(reported).map_err(|_| LoadError::TooLarge {
            path: path.clone(),
            size: reported,
        })?;
        let total_size = self
            .total_size
            .checked_add(size)
            .ok_or_else(|| LoadError::TooLarge {
                path: path.clone(),
                size: reported,
            })?;

        debug!(path = %path.display(), size, "opened");
        self.files.push(OpenedFile { path, handle, size });
        self.total_size = total_size;
        Ok(())
    }

    /// Number of opened files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file has been opened.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sum of the probed sizes of all opened files, in bytes.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Read every file completely into one shared buffer.
    ///
    /// Each file gets exactly the size probed by [`open`](FileSet::open).
    /// All handles are closed when this returns, whether it succeeds or
    /// not.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::OutOfMemory`] if the buffer cannot be reserved
    /// and [`LoadError::Read`] if any file cannot be read in full.
    pub fn read_all(self) -> Result<LoadedBatch, LoadError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(self.total_size)
            .map_err(|_| LoadError::OutOfMemory {
                requested: self.total_size,
            })?;
        buffer.resize(self.total_size, 0);

        let mut entries = Vec::with_capacity(self.files.len());
        let mut offset = 0;
        for mut file in self.files {
            let region = &mut buffer[offset..offset + file.size];
            file.handle
                .read_exact(region)
                .map_err(|source| LoadError::Read {
                    path: file.path.clone(),
                    source,
                })?;
            offset += file.size;
            entries.push(LoadedFile {
                name: file.path.display().to_string(),
                size: file.size,
            });
        }

        info!(files = entries.len(), bytes = buffer.len(), "batch loaded");
        Ok(LoadedBatch { buffer, entries })
    }
}

/// Open every path and read them all, as a single all-or-nothing step.
pub fn load_all<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<LoadedBatch, LoadError> {
    let mut set = FileSet::new();
    for path in paths {
        set.open(path)?;
    }
    set.read_all()
}

#[derive(Clone, Debug)]
struct LoadedFile {
    name: String,
    size: usize,
}

/// The contents of a fully loaded batch, laid out back to back.
#[derive(Debug)]
pub struct LoadedBatch {
    buffer: Vec<u8>,
    entries: Vec<LoadedFile>,
}

impl LoadedBatch {
    /// Number of files in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch holds no files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes held, across all files.
    pub fn total_size(&self) -> usize {
        self.buffer.len()
    }

    /// File names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Raw contents of file `index`, as loaded or as left by a parse.
    pub fn contents(&self, index: usize) -> Option<&[u8]> {
        let start: usize = self.entries.get(..index)?.iter().map(|e| e.size).sum();
        let size = self.entries.get(index)?.size;
        self.buffer.get(start..start + size)
    }

    /// One [`FileUnit`] per file, each over its own region of the buffer.
    ///
    /// Parsing rewrites the regions in place; the units borrow the batch
    /// mutably for as long as they live.
    pub fn units(&mut self) -> Vec<FileUnit<'_>> {
        let mut rest: &mut [u8] = &mut self.buffer;
        let mut units = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let (text, tail) = std::mem::take(&mut rest).split_at_mut(entry.size);
            units.push(FileUnit::text(entry.name.clone(), text));
            rest = tail;
        }
        units
    }
}
