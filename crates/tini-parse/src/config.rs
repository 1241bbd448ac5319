//! Parser configuration.

/// What to do with content after the last line terminator of a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FinalLine {
    /// Treat the end of the buffer as a line end.
    #[default]
    Keep,
    /// Drop the unterminated tail, as the line splitter alone does.
    Discard,
}

/// Configuration for the document builder and batch parser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Handling of unterminated trailing content.
    pub final_line: FinalLine,
}

impl ParseConfig {
    /// Config with the given final-line policy.
    pub fn with_final_line(final_line: FinalLine) -> Self {
        Self { final_line }
    }
}
