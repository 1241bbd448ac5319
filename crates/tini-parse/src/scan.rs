//! Byte classes shared by the line scanners.

/// CR or LF.
pub(crate) fn is_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Space or tab. Other whitespace is ordinary text.
pub(crate) fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// `;` or `#`.
pub(crate) fn is_comment_start(b: u8) -> bool {
    b == b';' || b == b'#'
}

/// The line up to (excluding) its first NUL byte.
///
/// A NUL ends a line the same way the terminator written by the splitter
/// does, so text after an embedded NUL is never interpreted.
pub(crate) fn until_nul(line: &[u8]) -> usize {
    line.iter().position(|&b| b == 0).unwrap_or(line.len())
}

/// Strip leading and trailing spaces and tabs.
pub(crate) fn trim_blanks(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_blank(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| !is_blank(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}
