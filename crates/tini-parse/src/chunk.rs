//! The parsed result of one file.

use smallvec::SmallVec;

use crate::pool::{Pool, SectionRef, StrRef};

/// Sections parsed from one file unit, in creation order.
///
/// The first section of a non-empty file is always the unnamed default
/// section. A chunk for an unloaded or empty unit has no sections at all.
#[derive(Clone, Debug)]
pub struct FileChunk {
    name: StrRef,
    sections: SmallVec<[SectionRef; 8]>,
}

impl FileChunk {
    pub(crate) fn new(name: StrRef) -> Self {
        Self {
            name,
            sections: SmallVec::new(),
        }
    }

    /// Publish a fully initialised section.
    pub(crate) fn push(&mut self, section: SectionRef) {
        self.sections.push(section);
    }

    /// Name of the file unit this chunk was parsed from.
    pub fn name<'p>(&self, pool: &'p Pool) -> &'p str {
        pool.str(self.name)
    }

    /// Number of sections, the unnamed one included.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether the chunk holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section handles in creation order.
    pub fn section_refs(&self) -> &[SectionRef] {
        &self.sections
    }
}
