//! Read-only views over pool-backed parse results.
//!
//! Views pair a handle with the [`Pool`] it lives in, so callers get plain
//! `&str` data without touching handles. Matching by name or key compares
//! the stored bytes; the `&str` accessors are for display.

use std::fmt;
use std::iter::FusedIterator;

use tini_core::ChunkId;

use crate::chunk::FileChunk;
use crate::lookup;
use crate::pool::{PairRef, Pool, SectionNode, SectionRef, StrRef};

/// A section and its ordered key/value list.
#[derive(Clone, Copy)]
pub struct Section<'p> {
    pool: &'p Pool,
    id: SectionRef,
}

impl<'p> Section<'p> {
    pub(crate) fn new(pool: &'p Pool, id: SectionRef) -> Self {
        Self { pool, id }
    }

    fn node(&self) -> &'p SectionNode {
        self.pool.section(self.id)
    }

    /// Handle of this section within its pool.
    pub fn id(&self) -> SectionRef {
        self.id
    }

    /// Section name; `None` for the unnamed default section.
    ///
    /// Names that are not UTF-8 come back with U+FFFD replacement.
    pub fn name(&self) -> Option<&'p str> {
        self.node().name.map(|name| self.pool.str(name))
    }

    /// Section name exactly as it appeared in the header.
    pub fn name_bytes(&self) -> Option<&'p [u8]> {
        self.node().name.map(|name| self.pool.bytes(name))
    }

    /// Number of pairs, in O(1).
    pub fn key_count(&self) -> usize {
        self.node().key_count
    }

    /// Whether the section has no pairs.
    pub fn is_empty(&self) -> bool {
        self.key_count() == 0
    }

    /// Pairs in file order.
    pub fn keys(&self) -> Keys<'p> {
        let node = self.node();
        Keys {
            pool: self.pool,
            next: node.first,
            remaining: node.key_count,
        }
    }

    /// Value of the first pair whose key equals `key` byte for byte.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&'p str> {
        let key = key.as_ref();
        self.keys().find(|kv| kv.key_bytes() == key).map(|kv| kv.value())
    }

    /// Values of every pair whose key equals `key`, in file order.
    pub fn get_all<K: AsRef<[u8]>>(&self, key: K) -> impl Iterator<Item = &'p str> {
        self.keys()
            .filter(move |kv| kv.key_bytes() == key.as_ref())
            .map(|kv| kv.value())
    }
}

impl PartialEq for Section<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.pool, other.pool) && self.id == other.id
    }
}

impl Eq for Section<'_> {}

impl fmt::Debug for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name())
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// One key/value pair.
#[derive(Clone, Copy)]
pub struct KeyValue<'p> {
    pool: &'p Pool,
    key: StrRef,
    value: StrRef,
}

impl<'p> KeyValue<'p> {
    /// The key, trimmed.
    pub fn key(&self) -> &'p str {
        self.pool.str(self.key)
    }

    /// The key exactly as it appeared in the file.
    pub fn key_bytes(&self) -> &'p [u8] {
        self.pool.bytes(self.key)
    }

    /// The value, trimmed; empty when the line had no `=`.
    pub fn value(&self) -> &'p str {
        self.pool.str(self.value)
    }

    /// The value exactly as it appeared in the file.
    pub fn value_bytes(&self) -> &'p [u8] {
        self.pool.bytes(self.value)
    }
}

impl PartialEq for KeyValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key_bytes() == other.key_bytes() && self.value_bytes() == other.value_bytes()
    }
}

impl Eq for KeyValue<'_> {}

impl fmt::Debug for KeyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}={:?}", self.key(), self.value())
    }
}

/// Iterator over a section's pairs, following the node links.
pub struct Keys<'p> {
    pool: &'p Pool,
    next: Option<PairRef>,
    remaining: usize,
}

impl<'p> Iterator for Keys<'p> {
    type Item = KeyValue<'p>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pool.pair(self.next?);
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(KeyValue {
            pool: self.pool,
            key: node.key,
            value: node.value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

/// One file chunk of a result set, resolved against its pool.
#[derive(Clone, Copy)]
pub struct ChunkView<'a> {
    pool: &'a Pool,
    chunk: &'a FileChunk,
    id: ChunkId,
}

impl<'a> ChunkView<'a> {
    pub(crate) fn new(pool: &'a Pool, chunk: &'a FileChunk, id: ChunkId) -> Self {
        Self { pool, chunk, id }
    }

    /// Position of the chunk in its result set.
    pub fn id(&self) -> ChunkId {
        self.id
    }

    /// Name of the file unit the chunk was parsed from.
    pub fn name(&self) -> &'a str {
        self.chunk.name(self.pool)
    }

    /// Number of sections, the unnamed one included.
    pub fn section_count(&self) -> usize {
        self.chunk.section_count()
    }

    /// The `index`-th section in creation order.
    pub fn section(&self, index: usize) -> Option<Section<'a>> {
        let id = *self.chunk.section_refs().get(index)?;
        Some(Section::new(self.pool, id))
    }

    /// Sections in creation order.
    pub fn sections(&self) -> impl ExactSizeIterator<Item = Section<'a>> + 'a {
        let pool = self.pool;
        self.chunk
            .section_refs()
            .iter()
            .map(move |&id| Section::new(pool, id))
    }

    /// Section names in creation order; `None` marks the unnamed section.
    pub fn section_names(&self) -> Vec<Option<&'a str>> {
        self.sections().map(|s| s.name()).collect()
    }

    /// First section in this chunk whose name is byte-equal to `name`.
    pub fn find_section(&self, name: impl AsRef<[u8]>) -> Option<Section<'a>> {
        lookup::find_section(self.pool, self.chunk, name)
    }

    /// The underlying chunk.
    pub fn chunk(&self) -> &'a FileChunk {
        self.chunk
    }
}

impl fmt::Debug for ChunkView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkView")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("sections", &self.section_names())
            .finish()
    }
}
