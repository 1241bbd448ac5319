//! The chunked bump arena.
//!
//! [`Arena`] owns an ordered list of [`Chunk`]s. Allocations never move and
//! are never freed individually; the arena releases everything when it is
//! dropped or explicitly [destroyed](Arena::destroy).

use tracing::trace;

use crate::chunk::Chunk;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::span::ArenaSpan;

/// A growable list of [`Chunk`]s with first-fit bump allocation.
///
/// Requests no larger than the standard chunk capacity are served by the
/// first chunk (in creation order) with enough room left, or by a fresh
/// standard chunk. Larger requests get a dedicated chunk of exactly the
/// requested size. An allocation never spans two chunks.
pub struct Arena<T> {
    chunks: Vec<Chunk<T>>,
    /// Standard chunk capacity in elements.
    chunk_capacity: usize,
    max_chunks: Option<usize>,
}

impl<T: Default> Arena<T> {
    /// Create an arena holding one empty standard chunk.
    pub fn new(config: &ArenaConfig) -> Result<Self, ArenaError> {
        let chunk_capacity = config.elements_per_chunk::<T>();
        let first = Chunk::try_new(chunk_capacity)?;
        Ok(Self {
            chunks: vec![first],
            chunk_capacity,
            max_chunks: config.max_chunks,
        })
    }

    /// Allocate `len` default-initialised elements.
    ///
    /// The returned span stays valid for the lifetime of the arena.
    pub fn alloc(&mut self, len: usize) -> Result<ArenaSpan, ArenaError> {
        if len > self.chunk_capacity {
            return self.alloc_in_new_chunk(len, len);
        }

        for (index, chunk) in self.chunks.iter_mut().enumerate() {
            if let Some(offset) = chunk.alloc(len) {
                return Ok(ArenaSpan::new(index, offset, len));
            }
        }

        self.alloc_in_new_chunk(self.chunk_capacity, len)
    }

    /// Allocate a single element holding `value`.
    pub fn alloc_value(&mut self, value: T) -> Result<ArenaSpan, ArenaError> {
        let span = self.alloc(1)?;
        self.get_mut(span)[0] = value;
        Ok(span)
    }

    /// Allocate a copy of `values`.
    pub fn alloc_slice(&mut self, values: &[T]) -> Result<ArenaSpan, ArenaError>
    where
        T: Clone,
    {
        let span = self.alloc(values.len())?;
        self.get_mut(span).clone_from_slice(values);
        Ok(span)
    }

    fn alloc_in_new_chunk(&mut self, capacity: usize, len: usize) -> Result<ArenaSpan, ArenaError> {
        if let Some(max_chunks) = self.max_chunks {
            if self.chunks.len() >= max_chunks {
                return Err(ArenaError::CapacityExceeded {
                    requested: len.saturating_mul(std::mem::size_of::<T>()),
                    chunks: self.chunks.len(),
                    max_chunks,
                });
            }
        }

        let mut chunk = Chunk::try_new(capacity)?;
        // A fresh chunk is at least `len` elements long.
        let offset = chunk.alloc(len).unwrap_or(0);
        self.chunks.push(chunk);

        let index = self.chunks.len() - 1;
        trace!(
            chunk = index,
            capacity,
            oversized = capacity != self.chunk_capacity,
            "arena grew"
        );
        Ok(ArenaSpan::new(index, offset, len))
    }
}

impl<T> Arena<T> {
    /// Resolve a span to a shared slice.
    ///
    /// # Panics
    ///
    /// Panics if `span` was not issued by this arena.
    pub fn get(&self, span: ArenaSpan) -> &[T] {
        self.chunks[span.chunk].slice(span.offset, span.len)
    }

    /// Resolve a span to a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `span` was not issued by this arena.
    pub fn get_mut(&mut self, span: ArenaSpan) -> &mut [T] {
        self.chunks[span.chunk].slice_mut(span.offset, span.len)
    }

    /// Release every chunk.
    ///
    /// Equivalent to dropping the arena; spelled out for call sites that
    /// want the end of the arena's lifetime to be visible.
    pub fn destroy(self) {
        trace!(chunks = self.chunks.len(), "arena destroyed");
        drop(self);
    }

    /// Number of chunks currently held, oversized ones included.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Standard chunk capacity in elements.
    pub fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// The chunks in creation order.
    pub fn chunks(&self) -> &[Chunk<T>] {
        &self.chunks
    }

    /// Total elements handed out across all chunks.
    pub fn total_used(&self) -> usize {
        self.chunks.iter().map(Chunk::used).sum()
    }

    /// Total reserved memory across all chunks in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.chunks.iter().map(Chunk::memory_bytes).sum()
    }
}
