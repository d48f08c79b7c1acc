//! Lexical comment removal.
//!
//! Three passes in a fixed order:
//!
//! 1. Line comments: everything from `//` to end-of-line, per line
//! 2. Block comments: every minimal `/* ... */` span, across line breaks
//! 3. Blank lines: any line whose trimmed form is empty
//!
//! The order is observable: `/* x // y */` loses its tail to the line pass
//! first, leaving an unterminated `/* x` that the block pass cannot close.
//!
//! This is a regex transform, not a lexer. Comment markers inside string and
//! character literals are stripped like any other occurrence.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

// Cached patterns for the two comment shapes.
static RE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)//.*$").expect("valid regex"));
static RE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

/// Remove `//` comments: on every line, delete from the first `//` to the
/// end of that line, inclusive.
pub fn strip_line_comments(input: &str) -> Cow<'_, str> {
    RE_LINE.replace_all(input, "")
}

/// Remove `/* ... */` comments: delete every minimal span from a `/*` to the
/// next `*/`, across line breaks.
///
/// Nesting is not supported; the first `*/` closes the span. An unterminated
/// `/*` is left in place.
pub fn strip_block_comments(input: &str) -> Cow<'_, str> {
    RE_BLOCK.replace_all(input, "")
}

/// Drop every line whose trimmed form is empty and rejoin the rest with a
/// single `\n`.
///
/// Runs of blank lines collapse to nothing, line endings normalize to `\n`,
/// and a trailing newline is not restored.
pub fn drop_blank_lines(input: &str) -> String {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply the full transformation: line comments, then block comments, then
/// the blank-line filter.
///
/// The result is stable under a second application.
pub fn strip_comments(input: &str) -> String {
    let without_line = strip_line_comments(input);
    let without_block = strip_block_comments(&without_line);
    drop_blank_lines(&without_block)
}
