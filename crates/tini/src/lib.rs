//! Tini: a teeny INI parser.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tini sub-crates. For most users, adding `tini` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tini::prelude::*;
//!
//! let mut a = b"[x]\n".to_vec();
//! let mut b = b"a=1\n[y]\nb=2\n".to_vec();
//! let mut units = vec![FileUnit::text("a.ini", &mut a), FileUnit::text("b.ini", &mut b)];
//!
//! let mut pool = Pool::new(&ArenaConfig::default()).unwrap();
//! let results = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();
//!
//! // Lookups scan files in input order and return the first match.
//! let (chunk, section) = results.find_section_all("y").unwrap();
//! assert_eq!(chunk, ChunkId(1));
//! assert_eq!(section.get("b"), Some("2"));
//!
//! // Pairs before the first header live in the file's unnamed section.
//! let b = results.chunk(ChunkId(1)).unwrap();
//! assert_eq!(b.section_names(), [None, Some("y")]);
//! ```
//!
//! Files on disk are loaded as one all-or-nothing batch:
//!
//! ```rust,no_run
//! use tini::prelude::*;
//!
//! let mut batch = tini::files::load_all(["app.ini", "local.ini"])?;
//! let mut units = batch.units();
//! let mut pool = Pool::new(&ArenaConfig::default())?;
//! let results = parse_multi(&mut pool, &mut units, &ParseConfig::default())?;
//! println!("{} sections", results.section_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tini-core` | File units and chunk ids |
//! | [`arena`] | `tini-arena` | Chunked bump arena and its configuration |
//! | [`parse`] | `tini-parse` | Line splitting, headers, documents, batches, lookup |
//! | [`files`] | `tini-files` | All-or-nothing batch loading from disk |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Batch units and identifiers (`tini-core`).
pub use tini_core as types;

/// Chunked bump arena (`tini-arena`).
///
/// Parse results live in a [`parse::Pool`] built from three
/// [`arena::Arena`]s; most users only touch [`arena::ArenaConfig`].
pub use tini_arena as arena;

/// Parsing and lookup (`tini-parse`).
///
/// The building blocks ([`parse::LineSplitter`], [`parse::recognize_header`],
/// [`parse::DocumentBuilder`]) are public for callers that parse one
/// buffer at a time.
pub use tini_parse as parse;

/// Loading files from disk (`tini-files`).
pub use tini_files as files;

/// Common imports for typical Tini usage.
///
/// ```rust
/// use tini::prelude::*;
/// ```
pub mod prelude {
    // Batch units
    pub use tini_core::{ChunkId, FileContents, FileUnit};

    // Arena configuration
    pub use tini_arena::{ArenaConfig, ArenaError};

    // Parsing and results
    pub use tini_parse::{
        parse_multi, ChunkView, FinalLine, ParseConfig, ParseError, Pool, ResultSet, Section,
    };

    // Loading
    pub use tini_files::{FileSet, LoadError, LoadedBatch};
}
