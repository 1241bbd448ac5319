//! Allocation handles.
//!
//! An [`ArenaSpan`] records where an allocation lives: which chunk, at
//! which element offset, and how many elements long. It carries no borrow,
//! so handles can be stored inside other arena objects (linked lists of
//! nodes, for instance) and resolved later through the owning arena.

use std::fmt;

/// Location of one allocation within an [`Arena`](crate::Arena).
///
/// The default span is empty and resolves to an empty slice in any arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct ArenaSpan {
    pub(crate) chunk: usize,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl ArenaSpan {
    pub(crate) fn new(chunk: usize, offset: usize, len: usize) -> Self {
        Self { chunk, offset, len }
    }

    /// Index of the chunk holding this allocation.
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// Element offset of the allocation within its chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether two spans share at least one element.
    pub fn overlaps(&self, other: &ArenaSpan) -> bool {
        self.chunk == other.chunk
            && !self.is_empty()
            && !other.is_empty()
            && self.offset < other.offset + other.len
            && other.offset < self.offset + self.len
    }
}

impl fmt::Display for ArenaSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArenaSpan(chunk={}, off={}, len={})",
            self.chunk, self.offset, self.len
        )
    }
}
