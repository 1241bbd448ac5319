//! Parse error types.

use std::error::Error;
use std::fmt;

use tini_arena::ArenaError;

/// Errors that abort a parse.
///
/// Malformed lines are never errors; they are classified as body text.
/// Only resource exhaustion stops a parse, and the caller's only recovery
/// is to drop the [`Pool`](crate::Pool) holding the partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The pool could not allocate a node or string.
    Arena(ArenaError),
    /// The batch holds more file units than a [`ChunkId`](tini_core::ChunkId)
    /// can address.
    TooManyUnits {
        /// Number of units passed to the batch parser.
        count: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "allocation failed: {e}"),
            Self::TooManyUnits { count } => {
                write!(f, "too many file units in one batch: {count}")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            Self::TooManyUnits { .. } => None,
        }
    }
}

impl From<ArenaError> for ParseError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl ParseError {
    /// Whether the error came from memory exhaustion (system or configured).
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::Arena(_))
    }
}
