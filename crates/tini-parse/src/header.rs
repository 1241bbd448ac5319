//! Section header recognition.
//!
//! A header is `ws* '[' ws* name ws* ']' ws* comment?`. Recognition runs in
//! three stages over one line:
//!
//! 1. leading scan: blanks, then `[`;
//! 2. name scan: up to `]`, remembering where the name starts and where its
//!    trailing blanks begin; a `;` or `#` before `]` rejects the line;
//! 3. trailer scan: after `]` only blanks, optionally followed by a comment.
//!
//! A line that fails any stage is simply not a header. There is no error.

use crate::scan::{is_blank, is_comment_start, until_nul};

/// Byte positions of a recognized name within its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NameBounds {
    start: usize,
    end: usize,
    close: usize,
}

/// Classify `line` as a section header.
///
/// Returns the trimmed name on success. The byte just past the name (the
/// first trailing blank, or the `]`) is overwritten with `0`, so the line
/// holds a terminated copy of the name in place. `[]` is a header whose name
/// is empty. Returns `None` for every other line, leaving it untouched.
pub fn recognize_header(line: &mut [u8]) -> Option<&[u8]> {
    let len = until_nul(line);
    let open = leading_bracket(&line[..len])?;
    let name = scan_name(&line[..len], open + 1)?;
    if !trailer_is_blank(&line[name.close + 1..len]) {
        return None;
    }

    line[name.end] = 0;
    Some(&line[name.start..name.end])
}

/// Stage 1: position of the opening `[` after leading blanks.
fn leading_bracket(line: &[u8]) -> Option<usize> {
    let pos = line.iter().position(|&b| !is_blank(b))?;
    (line[pos] == b'[').then_some(pos)
}

/// Stage 2: bounds of the name between `from` and the closing `]`.
fn scan_name(line: &[u8], from: usize) -> Option<NameBounds> {
    let mut start = from;
    let mut has_name = false;
    // Start of the current run of blanks following name text.
    let mut trailing: Option<usize> = None;

    for (pos, &b) in line.iter().enumerate().skip(from) {
        match b {
            b']' => {
                return Some(NameBounds {
                    start,
                    end: trailing.unwrap_or(pos),
                    close: pos,
                });
            }
            b if is_comment_start(b) => return None,
            b if is_blank(b) => {
                if !has_name {
                    start = pos + 1;
                } else if trailing.is_none() {
                    trailing = Some(pos);
                }
            }
            _ => {
                has_name = true;
                trailing = None;
            }
        }
    }
    None
}

/// Stage 3: everything after `]` is blanks and an optional comment.
fn trailer_is_blank(trailer: &[u8]) -> bool {
    for &b in trailer {
        if is_comment_start(b) {
            return true;
        }
        if !is_blank(b) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(input: &str) -> Option<String> {
        let mut buf = input.as_bytes().to_vec();
        recognize_header(&mut buf).map(|name| String::from_utf8_lossy(name).into_owned())
    }

    #[test]
    fn plain_header() {
        assert_eq!(header("[core]").as_deref(), Some("core"));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(header("[  foo  ]  ; comment").as_deref(), Some("foo"));
        assert_eq!(header("\t [\tfoo\t]\t").as_deref(), Some("foo"));
    }

    #[test]
    fn interior_blanks_are_kept() {
        assert_eq!(header("[ foo bar ]").as_deref(), Some("foo bar"));
        assert_eq!(header("[a  b]").as_deref(), Some("a  b"));
    }

    #[test]
    fn empty_name_is_a_header() {
        assert_eq!(header("[]").as_deref(), Some(""));
        assert_eq!(header("[   ]").as_deref(), Some(""));
    }

    #[test]
    fn trailing_comments_are_allowed() {
        assert_eq!(header("[a]#note").as_deref(), Some("a"));
        assert_eq!(header("[a] ; x ] y").as_deref(), Some("a"));
    }

    #[test]
    fn non_headers_are_rejected() {
        for line in [
            "foo = bar",
            "; comment",
            "# comment",
            "[unclosed",
            "[bad;name]",
            "[bad#name]",
            "[a] trailing",
            "x[a]",
            "",
            "   ",
        ] {
            assert_eq!(header(line), None, "{line:?}");
        }
    }

    #[test]
    fn names_are_opaque() {
        assert_eq!(header("[section.sub]").as_deref(), Some("section.sub"));
        assert_eq!(header("[\"quoted\"]").as_deref(), Some("\"quoted\""));
        assert_eq!(header("[a[b]").as_deref(), Some("a[b"));
    }

    #[test]
    fn name_end_is_terminated_in_place() {
        let mut buf = b"[ foo  ] ;c".to_vec();
        assert!(recognize_header(&mut buf).is_some());
        assert_eq!(buf, b"[ foo\0 ] ;c");

        let mut buf = b"[foo]".to_vec();
        assert!(recognize_header(&mut buf).is_some());
        assert_eq!(buf, b"[foo\0");
    }

    #[test]
    fn rejected_lines_are_untouched() {
        let mut buf = b"[a] b".to_vec();
        assert!(recognize_header(&mut buf).is_none());
        assert_eq!(buf, b"[a] b");
    }

    #[test]
    fn nul_ends_the_line() {
        assert_eq!(header("[a]\0garbage").as_deref(), Some("a"));
        assert_eq!(header("[a\0]"), None);
    }
}
