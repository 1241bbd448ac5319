//! Classification of lines that are not section headers.

use crate::scan::{is_blank, is_comment_start, trim_blanks, until_nul};

/// What a non-header line contributes to its section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyLine<'a> {
    /// Only spaces and tabs.
    Blank,
    /// A `;` or `#` comment; holds the text after the marker.
    Comment(&'a [u8]),
    /// A `key = value` line.
    ///
    /// Split at the first `=`, both sides trimmed of blanks. A line without
    /// `=` is a key with an empty value. Values are taken verbatim: a `;` or
    /// `#` inside a value is part of the value.
    Pair {
        /// Trimmed text before the first `=`.
        key: &'a [u8],
        /// Trimmed text after the first `=`.
        value: &'a [u8],
    },
}

/// Classify a line that [`recognize_header`](crate::recognize_header)
/// rejected.
pub fn classify_body(line: &[u8]) -> BodyLine<'_> {
    let line = &line[..until_nul(line)];
    let Some(first) = line.iter().position(|&b| !is_blank(b)) else {
        return BodyLine::Blank;
    };
    if is_comment_start(line[first]) {
        return BodyLine::Comment(&line[first + 1..]);
    }

    let line = &line[first..];
    match line.iter().position(|&b| b == b'=') {
        Some(eq) => BodyLine::Pair {
            key: trim_blanks(&line[..eq]),
            value: trim_blanks(&line[eq + 1..]),
        },
        None => BodyLine::Pair {
            key: trim_blanks(line),
            value: b"",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(key: &'a str, value: &'a str) -> BodyLine<'a> {
        BodyLine::Pair {
            key: key.as_bytes(),
            value: value.as_bytes(),
        }
    }

    #[test]
    fn splits_at_first_equals() {
        assert_eq!(classify_body(b"a=1"), pair("a", "1"));
        assert_eq!(classify_body(b"  path = a=b=c  "), pair("path", "a=b=c"));
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify_body(b""), BodyLine::Blank);
        assert_eq!(classify_body(b" \t "), BodyLine::Blank);
    }

    #[test]
    fn comments() {
        assert_eq!(classify_body(b"; note"), BodyLine::Comment(b" note"));
        assert_eq!(classify_body(b"  #x=1"), BodyLine::Comment(b"x=1"));
    }

    #[test]
    fn key_without_value() {
        assert_eq!(classify_body(b"  flag  "), pair("flag", ""));
        assert_eq!(classify_body(b"flag ="), pair("flag", ""));
    }

    #[test]
    fn empty_key_is_kept() {
        assert_eq!(classify_body(b"= orphan"), pair("", "orphan"));
    }

    #[test]
    fn values_keep_comment_markers() {
        assert_eq!(classify_body(b"url = http://x/#top ; y"), pair("url", "http://x/#top ; y"));
    }

    #[test]
    fn broken_headers_become_keys() {
        assert_eq!(classify_body(b"[unclosed"), pair("[unclosed", ""));
    }

    #[test]
    fn nul_ends_the_line() {
        assert_eq!(classify_body(b"a=1\0=2"), pair("a", "1"));
        assert_eq!(classify_body(b"\0a=1"), BodyLine::Blank);
    }
}
