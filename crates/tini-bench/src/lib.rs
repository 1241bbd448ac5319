//! Benchmark profiles for the Tini parser.
//!
//! Provides deterministic synthetic INI documents:
//!
//! - [`reference_document`]: 100 sections of 10 pairs (~20 KiB)
//! - [`stress_document`]: 2 000 sections of 25 pairs (~1 MiB)
//! - [`DocumentProfile::generate`]: any shape, seeded

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write;

/// Shape of a generated document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentProfile {
    /// Named sections after the leading unnamed one.
    pub sections: usize,
    /// Pairs per section, the unnamed one included.
    pub keys_per_section: usize,
    /// Seed for terminator, padding, and comment placement.
    pub seed: u64,
}

impl DocumentProfile {
    /// Generate the document.
    ///
    /// Line terminators rotate between LF, CRLF, and CR, and some lines
    /// carry padding, comments, or a blank line after them, all chosen by
    /// the seed. The same profile always yields the same text.
    pub fn generate(&self) -> String {
        let mut rng = self.seed;
        let mut out = String::new();

        for key in 0..self.keys_per_section {
            push_pair(&mut out, &mut rng, key);
        }
        for section in 0..self.sections {
            let roll = next(&mut rng);
            if roll % 4 == 0 {
                let _ = write!(out, "  [ section_{section} ]  ; header comment");
            } else {
                let _ = write!(out, "[section_{section}]");
            }
            push_terminator(&mut out, roll);
            for key in 0..self.keys_per_section {
                push_pair(&mut out, &mut rng, key);
            }
        }
        out
    }
}

fn next(rng: &mut u64) -> u64 {
    *rng = rng
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *rng >> 33
}

fn push_pair(out: &mut String, rng: &mut u64, key: usize) {
    let roll = next(rng);
    match roll % 8 {
        0 => out.push_str("; a comment line"),
        1 => {
            let _ = write!(out, "\tkey_{key}   =   padded value {roll}  ");
        }
        _ => {
            let _ = write!(out, "key_{key}=value_{roll}");
        }
    }
    push_terminator(out, roll);
    if roll % 16 == 3 {
        push_terminator(out, roll >> 4);
    }
}

fn push_terminator(out: &mut String, roll: u64) {
    out.push_str(match (roll >> 8) % 3 {
        0 => "\n",
        1 => "\r\n",
        _ => "\r",
    });
}

/// 100 sections of 10 pairs.
pub fn reference_document(seed: u64) -> String {
    DocumentProfile {
        sections: 100,
        keys_per_section: 10,
        seed,
    }
    .generate()
}

/// 2 000 sections of 25 pairs.
pub fn stress_document(seed: u64) -> String {
    DocumentProfile {
        sections: 2_000,
        keys_per_section: 25,
        seed,
    }
    .generate()
}
