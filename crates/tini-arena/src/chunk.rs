//! Fixed-capacity bump chunks.
//!
//! A [`Chunk`] reserves its full capacity up front and then hands out
//! contiguous runs of elements by advancing a cursor. The backing `Vec`
//! never reallocates, so the chunk's memory footprint is fixed at creation.

use crate::error::ArenaError;

/// A single fixed-capacity buffer with bump allocation.
///
/// The cursor is the length of the backing vector: elements are
/// default-initialised as they are handed out, never before.
pub struct Chunk<T> {
    /// Backing storage. `data.len()` is the bump cursor.
    data: Vec<T>,
    /// Capacity in elements, as requested at creation.
    capacity: usize,
}

impl<T: Default> Chunk<T> {
    /// Reserve a chunk of `capacity` elements.
    ///
    /// Returns [`ArenaError::OutOfMemory`] if the system allocator refuses
    /// the reservation.
    pub fn try_new(capacity: usize) -> Result<Self, ArenaError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArenaError::OutOfMemory {
                requested: capacity.saturating_mul(std::mem::size_of::<T>()),
            })?;
        Ok(Self { data, capacity })
    }

    /// Bump-allocate `len` elements from this chunk.
    ///
    /// Returns the element offset of the new region, or `None` if the chunk
    /// does not have `len` elements left.
    pub fn alloc(&mut self, len: usize) -> Option<usize> {
        if len > self.remaining() {
            return None;
        }
        let offset = self.data.len();
        // Within the reservation made in `try_new`; never reallocates.
        self.data.resize_with(offset + len, T::default);
        Some(offset)
    }
}

impl<T> Chunk<T> {
    /// Shared slice at the given offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the allocated region.
    pub fn slice(&self, offset: usize, len: usize) -> &[T] {
        &self.data[offset..offset + len]
    }

    /// Mutable slice at the given offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the allocated region.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [T] {
        &mut self.data[offset..offset + len]
    }

    /// Number of elements handed out so far.
    pub fn used(&self) -> usize {
        self.data.len()
    }

    /// Total capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Elements still available.
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Reserved memory in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }
}
