//! Canned INI documents.

/// File A of the two-file batch scenario.
pub const SCENARIO_A: &str = "[x]\n";

/// File B of the two-file batch scenario.
pub const SCENARIO_B: &str = "a=1\n[y]\nb=2\n";

/// All three terminator styles, the last line ending in a lone CR.
pub const MIXED_TERMINATORS: &str = "[a]\n[b]\r\n[c]\r";

/// Blank-line runs and an unterminated final header.
pub const BLANK_RUNS: &str = "[a]\n\n[b]\n[c]";

/// Two sections sharing a name.
pub const DUPLICATE_SECTIONS: &str = "[dup]\nwhich = first\n[dup]\nwhich = second\n";

/// Lines that look like headers but are not.
pub const NEAR_HEADERS: &str = "foo = bar\n; comment\n[unclosed\n[bad;name]\n";

/// A realistic document touching every line kind.
pub const SERVICE: &str = "\
; service configuration
name = tini-demo
debug

[server]
host = 127.0.0.1
port = 8080   ; not a comment, part of the value
  # indented comment

[  paths  ]  # trailing comment
root = /srv/tini
root = /srv/override
[]
empty_name = yes
";

/// Section names in [`SERVICE`], unnamed section first.
pub const SERVICE_SECTIONS: &[Option<&str>] = &[None, Some("server"), Some("paths"), Some("")];
