//! Plain-text rendering of parse results.

use std::io::{self, Write};

use indexmap::IndexSet;
use tini_parse::{ResultSet, Section};

/// Write every chunk of `results`, in input order.
pub(crate) fn write_all(out: &mut impl Write, results: &ResultSet<'_>) -> io::Result<()> {
    for chunk in results.chunks() {
        writeln!(out, "# {}", chunk.name())?;
        for section in chunk.sections() {
            write_section(out, section)?;
        }
    }
    Ok(())
}

/// Write the first section matching each name and return the names that
/// matched nothing.
pub(crate) fn write_lookups(
    out: &mut impl Write,
    results: &ResultSet<'_>,
    names: &IndexSet<&str>,
) -> io::Result<Vec<String>> {
    let mut missing = Vec::new();
    for &name in names {
        match results.find_section_all(name) {
            Some((id, section)) => {
                if let Some(chunk) = results.chunk(id) {
                    writeln!(out, "# {}", chunk.name())?;
                }
                write_section(out, section)?;
            }
            None => missing.push(name.to_string()),
        }
    }
    Ok(missing)
}

fn write_section(out: &mut impl Write, section: Section<'_>) -> io::Result<()> {
    if let Some(name) = section.name() {
        writeln!(out, "[{name}]")?;
    }
    for pair in section.keys() {
        writeln!(out, "{} = {}", pair.key(), pair.value())?;
    }
    Ok(())
}
