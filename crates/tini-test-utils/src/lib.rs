//! Test fixtures and batch helpers for Tini development.
//!
//! Provides canned INI documents ([`fixtures`]), an owned in-memory batch
//! that hands out [`FileUnit`]s ([`TextBatch`]), and on-disk batches in a
//! temporary directory ([`TempBatch`]) for loader and CLI tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tini_core::FileUnit;

/// Named in-memory file contents that outlive the units borrowing them.
///
/// Parsing mutates buffers, so build a fresh batch (or call
/// [`reset`](TextBatch::reset)) for every parse.
#[derive(Clone, Debug, Default)]
pub struct TextBatch {
    originals: Vec<(String, Vec<u8>)>,
    buffers: Vec<Vec<u8>>,
}

impl TextBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from `(name, contents)` pairs.
    pub fn from_files<N, C>(files: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: AsRef<[u8]>,
    {
        let mut batch = Self::new();
        for (name, contents) in files {
            batch.push(name, contents);
        }
        batch
    }

    pub fn push(&mut self, name: impl Into<String>, contents: impl AsRef<[u8]>) -> &mut Self {
        let contents = contents.as_ref().to_vec();
        self.buffers.push(contents.clone());
        self.originals.push((name.into(), contents));
        self
    }

    /// One unit per file, borrowing this batch's buffers.
    pub fn units(&mut self) -> Vec<FileUnit<'_>> {
        self.originals
            .iter()
            .zip(self.buffers.iter_mut())
            .map(|((name, _), buf)| FileUnit::text(name.clone(), buf.as_mut_slice()))
            .collect()
    }

    /// Restore every buffer to its original, unparsed contents.
    pub fn reset(&mut self) {
        for ((_, original), buf) in self.originals.iter().zip(self.buffers.iter_mut()) {
            buf.clone_from(original);
        }
    }
}

/// Files written to a temporary directory, removed on drop.
pub struct TempBatch {
    dir: TempDir,
    paths: Vec<PathBuf>,
}

impl TempBatch {
    /// Write each `(file name, contents)` pair into a fresh directory.
    pub fn write<N, C>(files: impl IntoIterator<Item = (N, C)>) -> io::Result<Self>
    where
        N: AsRef<Path>,
        C: AsRef<[u8]>,
    {
        let dir = tempfile::tempdir()?;
        let mut paths = Vec::new();
        for (name, contents) in files {
            let path = dir.path().join(name);
            fs::write(&path, contents)?;
            paths.push(path);
        }
        Ok(Self { dir, paths })
    }

    /// Paths in the order they were written.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// A path inside the directory that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("does-not-exist.ini")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
