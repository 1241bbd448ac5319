//! Splitting a mutable buffer into terminated lines.
//!
//! [`LineSplitter`] walks a buffer once. Every CR or LF that ends a line is
//! overwritten with `0` in place, and runs of terminators between lines are
//! skipped, so `\n`, `\r\n`, `\r` and blank lines all separate lines the
//! same way and never produce empty lines.
//!
//! Content after the last terminator is not yielded as a line. It stays
//! available through [`LineSplitter::into_remainder`] for callers that
//! treat end-of-buffer as a line end.

use crate::scan::is_terminator;

/// Single-pass, non-restartable iterator over the lines of a buffer.
pub struct LineSplitter<'buf> {
    /// Unscanned part of the buffer.
    rest: &'buf mut [u8],
    /// Offset of `rest` within the original buffer.
    pos: usize,
    /// Offset of the most recently yielded line.
    line_start: usize,
}

impl<'buf> LineSplitter<'buf> {
    /// Start splitting `buffer` from its first byte.
    pub fn new(buffer: &'buf mut [u8]) -> Self {
        Self {
            rest: buffer,
            pos: 0,
            line_start: 0,
        }
    }

    /// Yield the next terminated line, or `None` once no terminator is left.
    ///
    /// The returned slice excludes the terminator, which has been
    /// overwritten with `0` in the buffer.
    pub fn next_line(&mut self) -> Option<&'buf mut [u8]> {
        let buf = std::mem::take(&mut self.rest);

        let skip = buf.iter().position(|&b| !is_terminator(b)).unwrap_or(buf.len());
        let (_, buf) = buf.split_at_mut(skip);
        self.pos += skip;

        match buf.iter().position(|&b| is_terminator(b)) {
            Some(end) => {
                let (line, tail) = buf.split_at_mut(end);
                let (terminator, rest) = tail.split_at_mut(1);
                terminator[0] = 0;

                self.line_start = self.pos;
                self.pos += end + 1;
                self.rest = rest;
                Some(line)
            }
            None => {
                self.rest = buf;
                None
            }
        }
    }

    /// Byte offset, within the original buffer, of the last yielded line.
    pub fn line_offset(&self) -> usize {
        self.line_start
    }

    /// Byte offset of the unscanned part of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unterminated content left after the last line.
    ///
    /// Only meaningful once [`next_line`](Self::next_line) has returned
    /// `None`; before that it still contains unsplit lines.
    pub fn into_remainder(self) -> &'buf mut [u8] {
        self.rest
    }
}

impl<'buf> Iterator for LineSplitter<'buf> {
    type Item = &'buf mut [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
