//! File units: the batch element passed from loading to parsing.
//!
//! A unit moves through three states, tracked by [`FileContents`]:
//!
//! ```text
//! Unopened ──(loader)──> Text(&mut [u8]) ──(parser)──> Parsed
//! ```
//!
//! The parser takes the text out of the unit, so a buffer is parsed at most
//! once. The `'buf` lifetime ties the unit to the buffer it borrows, which
//! keeps that buffer alive and unshared for the whole parse.

use std::fmt;

/// Contents of a file unit at a given stage of the batch.
pub enum FileContents<'buf> {
    /// No contents were loaded for this unit.
    Unopened,
    /// Loaded text, which the parser may overwrite in place.
    Text(&'buf mut [u8]),
    /// The text has been consumed by a parse.
    Parsed,
}

impl FileContents<'_> {
    /// Short name of the state, for diagnostics.
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Unopened => "unopened",
            Self::Text(_) => "text",
            Self::Parsed => "parsed",
        }
    }
}

impl fmt::Debug for FileContents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(buf) => write!(f, "Text({} bytes)", buf.len()),
            other => f.write_str(other.state_name()),
        }
    }
}

/// One input file of a batch.
#[derive(Debug)]
pub struct FileUnit<'buf> {
    name: String,
    size: usize,
    contents: FileContents<'buf>,
}

impl<'buf> FileUnit<'buf> {
    /// A unit over loaded text. `size` is the length of `text`.
    pub fn text(name: impl Into<String>, text: &'buf mut [u8]) -> Self {
        Self {
            name: name.into(),
            size: text.len(),
            contents: FileContents::Text(text),
        }
    }

    /// A unit with no usable contents.
    pub fn unopened(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            contents: FileContents::Unopened,
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the loaded contents in bytes (zero when unopened).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current state of the contents.
    pub fn contents(&self) -> &FileContents<'buf> {
        &self.contents
    }

    /// Take the contents out for parsing, leaving the unit `Parsed`.
    ///
    /// An `Unopened` unit stays `Unopened`.
    pub fn take_contents(&mut self) -> FileContents<'buf> {
        match self.contents {
            FileContents::Unopened => FileContents::Unopened,
            _ => std::mem::replace(&mut self.contents, FileContents::Parsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_unit_records_size() {
        let mut buf = *b"[a]\n";
        let unit = FileUnit::text("a.ini", &mut buf);
        assert_eq!(unit.name(), "a.ini");
        assert_eq!(unit.size(), 4);
        assert_eq!(unit.contents().state_name(), "text");
    }

    #[test]
    fn take_contents_leaves_parsed() {
        let mut buf = *b"[a]\n";
        let mut unit = FileUnit::text("a.ini", &mut buf);
        assert!(matches!(unit.take_contents(), FileContents::Text(_)));
        assert!(matches!(unit.contents(), FileContents::Parsed));
        assert!(matches!(unit.take_contents(), FileContents::Parsed));
    }

    #[test]
    fn unopened_stays_unopened() {
        let mut unit = FileUnit::unopened("missing.ini");
        assert_eq!(unit.size(), 0);
        assert!(matches!(unit.take_contents(), FileContents::Unopened));
        assert!(matches!(unit.contents(), FileContents::Unopened));
    }

    #[test]
    fn debug_hides_buffer_bytes() {
        let mut buf = *b"key=secret\n";
        let unit = FileUnit::text("s.ini", &mut buf);
        assert_eq!(format!("{:?}", unit.contents()), "Text(11 bytes)");
    }
}
