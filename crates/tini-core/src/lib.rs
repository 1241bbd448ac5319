//! Core types shared by the Tini loader and parser.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! batch unit handed from file loading to parsing ([`FileUnit`] and its
//! tagged [`FileContents`] state) and the identifiers used to address
//! parse results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod file;
pub mod id;

pub use file::{FileContents, FileUnit};
pub use id::ChunkId;
