//! First-match section lookup.
//!
//! Lookups scan linearly in creation order and compare the stored name
//! bytes with the query (no case folding, no trimming, no UTF-8 decoding). The unnamed section has no
//! name and never matches. A miss is `None`; lookups only read the pool.

use tini_core::ChunkId;

use crate::chunk::FileChunk;
use crate::pool::Pool;
use crate::view::Section;

/// First section of `chunk` named exactly `name`.
pub fn find_section<'p>(
    pool: &'p Pool,
    chunk: &FileChunk,
    name: impl AsRef<[u8]>,
) -> Option<Section<'p>> {
    let name = name.as_ref();
    chunk
        .section_refs()
        .iter()
        .map(|&id| Section::new(pool, id))
        .find(|section| section.name_bytes() == Some(name))
}

/// First section named exactly `name` across `chunks`, with the id of the
/// chunk that holds it.
pub fn find_section_all<'p>(
    pool: &'p Pool,
    chunks: &[FileChunk],
    name: impl AsRef<[u8]>,
) -> Option<(ChunkId, Section<'p>)> {
    let name = name.as_ref();
    chunks
        .iter()
        .zip(0u32..)
        .find_map(|(chunk, index)| {
            find_section(pool, chunk, name).map(|section| (ChunkId(index), section))
        })
}
