//! In-place INI parsing into arena-backed section graphs.
//!
//! # Pipeline
//!
//! ```text
//! FileUnit (mutable text)
//!   └── LineSplitter ── terminators overwritten with 0, runs collapsed
//!         ├── recognize_header ── `[name]` opens a new section
//!         └── classify_body ───── blank / comment / key=value
//!               └── DocumentBuilder ── nodes allocated in the Pool
//!                     └── FileChunk (one per unit) ── ResultSet
//! ```
//!
//! # Example
//!
//! ```
//! use tini_arena::ArenaConfig;
//! use tini_core::FileUnit;
//! use tini_parse::{parse_multi, ParseConfig, Pool};
//!
//! let mut text = b"name = demo\n[server]\nport = 8080\n".to_vec();
//! let mut units = vec![FileUnit::text("demo.ini", &mut text)];
//!
//! let mut pool = Pool::new(&ArenaConfig::default()).unwrap();
//! let set = parse_multi(&mut pool, &mut units, &ParseConfig::default()).unwrap();
//!
//! let (chunk, server) = set.find_section_all("server").unwrap();
//! assert_eq!(chunk.index(), 0);
//! assert_eq!(server.get("port"), Some("8080"));
//! ```
//!
//! Header syntax errors are not errors: a line that is not a well-formed
//! header is body text of the current section. The only failure is running
//! out of pool memory, which aborts the parse.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod chunk;
pub mod config;
pub mod document;
pub mod error;
pub mod header;
pub mod lines;
pub mod lookup;
pub mod pair;
pub mod pool;
mod scan;
pub mod view;

pub use batch::{parse_multi, ResultSet};
pub use chunk::FileChunk;
pub use config::{FinalLine, ParseConfig};
pub use document::{parse_document, DocumentBuilder};
pub use error::ParseError;
pub use header::recognize_header;
pub use lines::LineSplitter;
pub use pair::{classify_body, BodyLine};
pub use pool::{PairRef, Pool, PoolStats, SectionRef, StrRef};
pub use view::{ChunkView, KeyValue, Keys, Section};
