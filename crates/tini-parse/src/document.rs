//! Building the section graph of one file.
//!
//! [`DocumentBuilder`] consumes lines one at a time. It starts with the
//! unnamed default section as the current section; each header line opens
//! a new section (same-named sections are never merged) and every pair
//! line is appended to whichever section is current.

use tracing::{debug, trace};

use crate::chunk::FileChunk;
use crate::config::{FinalLine, ParseConfig};
use crate::error::ParseError;
use crate::header::recognize_header;
use crate::lines::LineSplitter;
use crate::pair::{classify_body, BodyLine};
use crate::pool::{Pool, SectionRef};

/// Line-by-line builder for one [`FileChunk`].
pub struct DocumentBuilder<'p> {
    pool: &'p mut Pool,
    chunk: FileChunk,
    current: SectionRef,
    pairs: usize,
}

impl<'p> DocumentBuilder<'p> {
    /// Start a chunk named `name`, holding only the unnamed section.
    pub fn new(pool: &'p mut Pool, name: &str) -> Result<Self, ParseError> {
        let mut chunk = FileChunk::new(pool.intern(name.as_bytes())?);
        let current = pool.new_section(None)?;
        chunk.push(current);
        Ok(Self {
            pool,
            chunk,
            current,
            pairs: 0,
        })
    }

    /// Feed one line (without its terminator).
    pub fn line(&mut self, line: &mut [u8]) -> Result<(), ParseError> {
        if let Some(name) = recognize_header(line) {
            let section = self.pool.new_section(Some(name))?;
            self.chunk.push(section);
            self.current = section;
            return Ok(());
        }

        match classify_body(line) {
            BodyLine::Blank | BodyLine::Comment(_) => {}
            BodyLine::Pair { key, value } => {
                self.pool.push_pair(self.current, key, value)?;
                self.pairs += 1;
            }
        }
        Ok(())
    }

    /// The section pairs are currently appended to.
    pub fn current_section(&self) -> SectionRef {
        self.current
    }

    /// Number of pairs appended so far.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// Finish the chunk.
    pub fn finish(self) -> FileChunk {
        self.chunk
    }
}

/// Parse one file buffer in place into a [`FileChunk`].
///
/// The buffer is overwritten: line terminators and the byte after each
/// section name become `0`. Everything the chunk refers to is copied into
/// `pool`, so the buffer may be dropped afterwards.
pub fn parse_document(
    pool: &mut Pool,
    name: &str,
    text: &mut [u8],
    config: &ParseConfig,
) -> Result<FileChunk, ParseError> {
    let mut builder = DocumentBuilder::new(pool, name)?;
    let mut lines = LineSplitter::new(text);

    while let Some(line) = lines.next_line() {
        trace!(
            file = name,
            offset = lines.line_offset(),
            line = %String::from_utf8_lossy(line),
            "parsing line"
        );
        builder.line(line)?;
    }

    let tail = lines.into_remainder();
    if !tail.is_empty() {
        match config.final_line {
            FinalLine::Keep => builder.line(tail)?,
            FinalLine::Discard => {
                trace!(file = name, bytes = tail.len(), "discarding unterminated tail");
            }
        }
    }

    let pairs = builder.pair_count();
    let chunk = builder.finish();
    debug!(
        file = name,
        sections = chunk.section_count(),
        pairs,
        "parsed file"
    );
    Ok(chunk)
}
