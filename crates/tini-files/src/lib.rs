//! All-or-nothing batch loading of INI files.
//!
//! Loading happens in two phases, both of which must succeed for every
//! file before any contents are handed out:
//!
//! 1. [`FileSet::open`] opens each file and probes its size;
//! 2. [`FileSet::read_all`] reserves one shared buffer for the whole batch,
//!    reads every file into its region, and closes all handles.
//!
//! Any failure drops every open handle and the shared buffer. On success,
//! [`LoadedBatch::units`] hands out one [`FileUnit`](tini_core::FileUnit)
//! per file over disjoint regions of the buffer, ready to be parsed in
//! place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod error;

pub use batch::{load_all, FileSet, LoadedBatch};
pub use error::LoadError;
