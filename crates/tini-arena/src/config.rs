//! Arena configuration parameters.

/// Configuration for the arena allocator.
///
/// Capacities are expressed in bytes so that every typed arena of a parse
/// (strings, sections, key/value nodes) is sized from the same setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Capacity of each standard chunk in bytes.
    ///
    /// Default: 4096. Requests larger than one chunk are served from a
    /// dedicated oversized chunk instead.
    pub chunk_capacity: usize,

    /// Upper bound on the number of chunks (standard and oversized).
    ///
    /// Default: `None` (bounded only by the system allocator).
    pub max_chunks: Option<usize>,
}

impl ArenaConfig {
    /// Default chunk capacity in bytes.
    pub const DEFAULT_CHUNK_CAPACITY: usize = 4096;

    /// Create a config with the given chunk capacity and no chunk limit.
    pub fn new(chunk_capacity: usize) -> Self {
        Self {
            chunk_capacity,
            max_chunks: None,
        }
    }

    /// Limit the arena to at most `max_chunks` chunks.
    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = Some(max_chunks);
        self
    }

    /// Number of `T` elements that fit in one standard chunk.
    ///
    /// Never zero: a chunk always holds at least one element, even when
    /// `T` is larger than the configured byte capacity.
    pub fn elements_per_chunk<T>(&self) -> usize {
        let elem = std::mem::size_of::<T>().max(1);
        (self.chunk_capacity / elem).max(1)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_CAPACITY)
    }
}
