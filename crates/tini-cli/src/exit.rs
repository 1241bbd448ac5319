//! Process exit codes and the errors that select them.

use std::fmt;

use tini_arena::ArenaError;
use tini_files::LoadError;
use tini_parse::ParseError;

pub(crate) const OUT_OF_MEMORY: u8 = 1;
pub(crate) const FILE_ERROR: u8 = 2;
pub(crate) const LOOKUP_MISS: u8 = 3;
/// `EX_USAGE` from sysexits.h.
pub(crate) const USAGE: u8 = 64;

/// One or more requested sections were found in no file.
#[derive(Debug)]
pub(crate) struct MissingSections(pub(crate) Vec<String>);

impl fmt::Display for MissingSections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.0.iter().map(|name| format!("[{name}]")).collect();
        write!(f, "section not found: {}", quoted.join(", "))
    }
}

impl std::error::Error for MissingSections {}

/// Exit code for an error returned from `run`.
pub(crate) fn code_for(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<LoadError>() {
        return match e {
            LoadError::OutOfMemory { .. } => OUT_OF_MEMORY,
            _ => FILE_ERROR,
        };
    }
    if let Some(e) = err.downcast_ref::<ParseError>() {
        return if e.is_out_of_memory() {
            OUT_OF_MEMORY
        } else {
            USAGE
        };
    }
    if err.downcast_ref::<ArenaError>().is_some() {
        return OUT_OF_MEMORY;
    }
    if err.downcast_ref::<MissingSections>().is_some() {
        return LOOKUP_MISS;
    }
    // Writing the report failed (closed pipe and the like).
    FILE_ERROR
}
