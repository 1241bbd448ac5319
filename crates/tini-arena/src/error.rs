//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Both variants are fatal to the allocation that raised them. Callers
/// abandon the whole arena; partially built structures are never repaired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The system allocator could not provide a new chunk.
    OutOfMemory {
        /// Size of the chunk that could not be reserved, in bytes.
        requested: usize,
    },
    /// The configured chunk limit would be exceeded.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Number of chunks already held by the arena.
        chunks: usize,
        /// Configured maximum number of chunks.
        max_chunks: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: could not reserve a {requested} byte chunk")
            }
            Self::CapacityExceeded {
                requested,
                chunks,
                max_chunks,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes with {chunks} of {max_chunks} chunks in use"
                )
            }
        }
    }
}

impl Error for ArenaError {}
