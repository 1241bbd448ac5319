//! Parsing a batch of file units into one result set.

use tini_core::{ChunkId, FileContents, FileUnit};
use tracing::{info, warn};

use crate::chunk::FileChunk;
use crate::config::ParseConfig;
use crate::document::parse_document;
use crate::error::ParseError;
use crate::lookup;
use crate::pool::Pool;
use crate::view::{ChunkView, Section};

/// Parse every unit of a batch, in order, into `pool`.
///
/// Each unit yields exactly one chunk, so chunk `n` always belongs to unit
/// `n`. Units with no text (unopened, already parsed, or zero bytes long)
/// yield an empty chunk rather than an error. Units holding text are left
/// in the `Parsed` state.
///
/// Allocation failure aborts the whole batch. The pool then holds partial
/// results that nothing refers to; drop it.
pub fn parse_multi<'p>(
    pool: &'p mut Pool,
    units: &mut [FileUnit<'_>],
    config: &ParseConfig,
) -> Result<ResultSet<'p>, ParseError> {
    if u32::try_from(units.len()).is_err() {
        return Err(ParseError::TooManyUnits { count: units.len() });
    }

    let mut chunks = Vec::with_capacity(units.len());
    for unit in units.iter_mut() {
        let chunk = match unit.take_contents() {
            FileContents::Text(text) if !text.is_empty() => {
                parse_document(pool, unit.name(), text, config)?
            }
            FileContents::Text(_) => FileChunk::new(pool.intern(unit.name().as_bytes())?),
            other => {
                warn!(
                    file = unit.name(),
                    state = other.state_name(),
                    "file unit has no text; producing an empty chunk"
                );
                FileChunk::new(pool.intern(unit.name().as_bytes())?)
            }
        };
        chunks.push(chunk);
    }

    let pool: &'p Pool = pool;
    let set = ResultSet { pool, chunks };
    info!(
        files = set.len(),
        sections = set.section_count(),
        "parsed batch"
    );
    Ok(set)
}

/// Ordered file chunks of one batch, resolved against their pool.
///
/// The result set borrows the pool immutably, so the pool cannot be
/// mutated or dropped while results are in use.
pub struct ResultSet<'p> {
    pool: &'p Pool,
    chunks: Vec<FileChunk>,
}

impl<'p> ResultSet<'p> {
    /// Number of chunks (equal to the number of units in the batch).
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total sections across all chunks.
    pub fn section_count(&self) -> usize {
        self.chunks.iter().map(FileChunk::section_count).sum()
    }

    /// The chunk parsed from unit `id`.
    pub fn chunk(&self, id: ChunkId) -> Option<ChunkView<'_>> {
        let chunk = self.chunks.get(id.index())?;
        Some(ChunkView::new(self.pool, chunk, id))
    }

    /// Chunks in input order.
    pub fn chunks(&self) -> impl ExactSizeIterator<Item = ChunkView<'_>> + '_ {
        let pool = self.pool;
        // `parse_multi` rejects batches whose indices do not fit a `ChunkId`.
        self.chunks
            .iter()
            .enumerate()
            .map(move |(index, chunk)| ChunkView::new(pool, chunk, ChunkId(index as u32)))
    }

    /// First section named exactly `name` in any chunk, scanning chunks in
    /// input order, with the id of the chunk that holds it.
    ///
    /// `name` is compared with the stored header bytes, so a `&str` and a
    /// raw `&[u8]` query both work.
    pub fn find_section_all(&self, name: impl AsRef<[u8]>) -> Option<(ChunkId, Section<'p>)> {
        lookup::find_section_all(self.pool, &self.chunks, name)
    }

    /// First section named exactly `name` within chunk `id`.
    pub fn find_section(&self, id: ChunkId, name: impl AsRef<[u8]>) -> Option<Section<'p>> {
        let chunk = self.chunks.get(id.index())?;
        lookup::find_section(self.pool, chunk, name)
    }

    /// The pool holding every section of this result set.
    pub fn pool(&self) -> &'p Pool {
        self.pool
    }
}
