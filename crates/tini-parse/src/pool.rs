//! Arena-backed storage for everything a parse produces.
//!
//! A [`Pool`] bundles three arenas sized from one [`ArenaConfig`]: string
//! bytes, section nodes and key/value nodes. Names, keys and values are
//! copied into the string arena verbatim, so parse results never borrow the
//! file buffers they came from. Dropping the pool releases everything at
//! once.

use std::borrow::Cow;

use tini_arena::{Arena, ArenaConfig, ArenaError, ArenaSpan};
use tracing::trace;

use crate::view::Section;

/// Handle to a string stored in a [`Pool`].
///
/// `bytes` is the input exactly as interned. `text` is only set when those
/// bytes are not UTF-8 and holds their U+FFFD rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StrRef {
    bytes: ArenaSpan,
    text: Option<ArenaSpan>,
}

/// Handle to a section stored in a [`Pool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectionRef(ArenaSpan);

/// Handle to a key/value node stored in a [`Pool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairRef(ArenaSpan);

/// A section: optional name plus a singly linked list of pairs.
#[derive(Clone, Debug, Default)]
pub(crate) struct SectionNode {
    pub(crate) name: Option<StrRef>,
    pub(crate) key_count: usize,
    pub(crate) first: Option<PairRef>,
    pub(crate) last: Option<PairRef>,
}

/// One key/value pair and the link to the next pair of its section.
#[derive(Clone, Debug, Default)]
pub(crate) struct PairNode {
    pub(crate) key: StrRef,
    pub(crate) value: StrRef,
    pub(crate) next: Option<PairRef>,
}

/// Memory footprint of a [`Pool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolStats {
    /// Chunks held across all three arenas.
    pub chunks: usize,
    /// Bytes reserved across all chunks.
    pub reserved_bytes: usize,
    /// String bytes handed out.
    pub string_bytes: usize,
    /// Sections allocated.
    pub sections: usize,
    /// Key/value pairs allocated.
    pub pairs: usize,
}

/// Parse-scoped storage for sections, pairs and their strings.
pub struct Pool {
    strings: Arena<u8>,
    sections: Arena<SectionNode>,
    pairs: Arena<PairNode>,
}

impl Pool {
    /// Create a pool whose arenas each start with one standard chunk.
    pub fn new(config: &ArenaConfig) -> Result<Self, ArenaError> {
        Ok(Self {
            strings: Arena::new(config)?,
            sections: Arena::new(config)?,
            pairs: Arena::new(config)?,
        })
    }

    /// Copy `bytes` into the string arena unchanged.
    ///
    /// Input that is not UTF-8 also gets a display copy with U+FFFD
    /// replacement, read back through [`str`](Pool::str). Comparisons go
    /// through [`bytes`](Pool::bytes) and see the original.
    pub fn intern(&mut self, bytes: &[u8]) -> Result<StrRef, ArenaError> {
        let raw = self.strings.alloc_slice(bytes)?;
        let text = match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(_) => None,
            Cow::Owned(text) => Some(self.strings.alloc_slice(text.as_bytes())?),
        };
        Ok(StrRef { bytes: raw, text })
    }

    /// Allocate a section with an empty key list.
    pub fn new_section(&mut self, name: Option<&[u8]>) -> Result<SectionRef, ArenaError> {
        let name = name.map(|n| self.intern(n)).transpose()?;
        let node = SectionNode {
            name,
            ..SectionNode::default()
        };
        Ok(SectionRef(self.sections.alloc_value(node)?))
    }

    /// Append a pair at the tail of `section`'s key list.
    pub fn push_pair(
        &mut self,
        section: SectionRef,
        key: &[u8],
        value: &[u8],
    ) -> Result<PairRef, ArenaError> {
        let node = PairNode {
            key: self.intern(key)?,
            value: self.intern(value)?,
            next: None,
        };
        let pair = PairRef(self.pairs.alloc_value(node)?);

        let previous = {
            let section = self.section_mut(section);
            section.key_count += 1;
            let previous = section.last.replace(pair);
            if previous.is_none() {
                section.first = Some(pair);
            }
            previous
        };
        if let Some(previous) = previous {
            self.pair_mut(previous).next = Some(pair);
        }
        Ok(pair)
    }

    /// The bytes of a stored string, exactly as interned.
    pub fn bytes(&self, string: StrRef) -> &[u8] {
        self.strings.get(string.bytes)
    }

    /// A stored string as text, for display.
    pub fn str(&self, string: StrRef) -> &str {
        // Either the original bytes are UTF-8 or `text` holds a lossy copy.
        let span = string.text.unwrap_or(string.bytes);
        std::str::from_utf8(self.strings.get(span)).unwrap_or_default()
    }

    /// View a section handle issued by this pool.
    ///
    /// Reading through the view panics if `section` came from another pool.
    pub fn resolve(&self, section: SectionRef) -> Section<'_> {
        Section::new(self, section)
    }

    pub(crate) fn section(&self, section: SectionRef) -> &SectionNode {
        &self.sections.get(section.0)[0]
    }

    fn section_mut(&mut self, section: SectionRef) -> &mut SectionNode {
        &mut self.sections.get_mut(section.0)[0]
    }

    pub(crate) fn pair(&self, pair: PairRef) -> &PairNode {
        &self.pairs.get(pair.0)[0]
    }

    fn pair_mut(&mut self, pair: PairRef) -> &mut PairNode {
        &mut self.pairs.get_mut(pair.0)[0]
    }

    /// Current memory footprint.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            chunks: self.strings.chunk_count()
                + self.sections.chunk_count()
                + self.pairs.chunk_count(),
            reserved_bytes: self.strings.memory_bytes()
                + self.sections.memory_bytes()
                + self.pairs.memory_bytes(),
            string_bytes: self.strings.total_used(),
            sections: self.sections.total_used(),
            pairs: self.pairs.total_used(),
        }
    }

    /// Release every arena.
    pub fn destroy(self) {
        trace!(stats = ?self.stats(), "pool destroyed");
        self.strings.destroy();
        self.sections.destroy();
        self.pairs.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Pool {
        Pool::new(&ArenaConfig::new(256)).unwrap()
    }

    fn keys(pool: &Pool, section: SectionRef) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut next = pool.section(section).first;
        while let Some(pair) = next {
            let node = pool.pair(pair);
            out.push((pool.str(node.key).to_owned(), pool.str(node.value).to_owned()));
            next = node.next;
        }
        out
    }

    #[test]
    fn interned_strings_read_back() {
        let mut pool = pool();
        let a = pool.intern(b"alpha").unwrap();
        let b = pool.intern(b"").unwrap();
        assert_eq!(pool.str(a), "alpha");
        assert_eq!(pool.str(b), "");
        assert_eq!(pool.bytes(a), b"alpha");
        assert_eq!(pool.str(StrRef::default()), "");
    }

    #[test]
    fn invalid_utf8_keeps_original_bytes() {
        let mut pool = pool();
        let s = pool.intern(b"a\xffb").unwrap();
        assert_eq!(pool.bytes(s), b"a\xffb");
        assert_eq!(pool.str(s), "a\u{fffd}b");
    }

    #[test]
    fn replacement_char_is_distinct_from_invalid_byte() {
        let mut pool = pool();
        let latin1 = pool.intern(b"caf\xe9").unwrap();
        let utf8 = pool.intern("caf\u{fffd}".as_bytes()).unwrap();
        assert_eq!(pool.str(latin1), pool.str(utf8));
        assert_ne!(pool.bytes(latin1), pool.bytes(utf8));
        assert_ne!(latin1, utf8);
    }

    #[test]
    fn valid_utf8_is_stored_once() {
        let mut pool = pool();
        pool.intern("h\u{e9}".as_bytes()).unwrap();
        assert_eq!(pool.stats().string_bytes, 3);
        pool.intern(b"h\xe9").unwrap();
        // Two raw bytes plus the three-byte replacement and `h`.
        assert_eq!(pool.stats().string_bytes, 3 + 2 + 4);
    }

    #[test]
    fn new_section_starts_empty() {
        let mut pool = pool();
        let unnamed = pool.new_section(None).unwrap();
        let named = pool.new_section(Some(b"net")).unwrap();
        assert!(pool.section(unnamed).name.is_none());
        let name = pool.section(named).name.unwrap();
        assert_eq!(pool.str(name), "net");
        assert_eq!(pool.section(named).key_count, 0);
        assert!(pool.section(named).first.is_none());
    }

    #[test]
    fn pairs_append_in_order() {
        let mut pool = pool();
        let s = pool.new_section(Some(b"s")).unwrap();
        pool.push_pair(s, b"a", b"1").unwrap();
        pool.push_pair(s, b"b", b"2").unwrap();
        pool.push_pair(s, b"a", b"3").unwrap();
        assert_eq!(pool.section(s).key_count, 3);
        assert_eq!(
            keys(&pool, s),
            vec![
                ("a".into(), "1".into()),
                ("b".into(), "2".into()),
                ("a".into(), "3".into()),
            ]
        );
    }

    #[test]
    fn interleaved_sections_keep_separate_lists() {
        let mut pool = pool();
        let x = pool.new_section(Some(b"x")).unwrap();
        let y = pool.new_section(Some(b"y")).unwrap();
        pool.push_pair(x, b"k", b"x1").unwrap();
        pool.push_pair(y, b"k", b"y1").unwrap();
        pool.push_pair(x, b"k", b"x2").unwrap();
        assert_eq!(keys(&pool, x).len(), 2);
        assert_eq!(keys(&pool, y), vec![("k".into(), "y1".into())]);
    }

    #[test]
    fn growth_is_visible_in_stats() {
        let mut pool = Pool::new(&ArenaConfig::new(16)).unwrap();
        let before = pool.stats();
        assert_eq!(before.chunks, 3);
        let s = pool.new_section(None).unwrap();
        for _ in 0..8 {
            pool.push_pair(s, b"key", b"value").unwrap();
        }
        let after = pool.stats();
        assert!(after.chunks > before.chunks);
        assert_eq!(after.pairs, 8);
        assert_eq!(after.sections, 1);
        assert_eq!(after.string_bytes, 8 * 8);
    }

    #[test]
    fn chunk_limit_surfaces_as_error() {
        let config = ArenaConfig::new(8).with_max_chunks(1);
        let mut pool = Pool::new(&config).unwrap();
        pool.intern(b"12345678").unwrap();
        assert!(matches!(
            pool.intern(b"9"),
            Err(ArenaError::CapacityExceeded { .. })
        ));
    }
}
