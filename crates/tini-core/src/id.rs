//! Strongly-typed identifiers.

use std::fmt;

/// Position of a file chunk within a result set.
///
/// `ChunkId(n)` is the chunk parsed from the n-th file unit of the batch,
/// so chunk ids follow input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(pub u32);

impl ChunkId {
    /// The id as a slice index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChunkId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
