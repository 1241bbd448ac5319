//! Chunked bump allocation for Tini parse results.
//!
//! Every object the parser produces (section nodes, key/value nodes and the
//! bytes of their names) lives in an [`Arena`] owned by the caller. Nothing
//! is freed individually: dropping the arena releases every chunk at once,
//! which is also how an aborted parse is cleaned up.
//!
//! # Architecture
//!
//! ```text
//! Arena<T>
//! ├── Chunk<T> (standard, `chunk_capacity` bytes worth of T)
//! ├── Chunk<T> (standard, appended when no chunk has room)
//! └── Chunk<T> (oversized, exactly one request long)
//! ```
//!
//! Allocations are addressed by [`ArenaSpan`] handles and resolved back to
//! slices through the arena that issued them.
//!
//! # Allocation policy
//!
//! First fit in creation order, then a fresh chunk. Requests larger than the
//! standard capacity get a dedicated chunk sized to the request.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod chunk;
pub mod config;
pub mod error;
pub mod span;

pub use arena::Arena;
pub use chunk::Chunk;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use span::ArenaSpan;
