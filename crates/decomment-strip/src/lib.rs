//! Lexical comment stripping for decomment.
//!
//! This crate implements the text transformation: remove `//` line comments,
//! remove minimal `/* ... */` block comments, then drop blank lines. It
//! operates on strings only; reading and rewriting files is the walker's job.
//!
//! # Example
//!
//! ```rust
//! use decomment_strip::strip_comments;
//!
//! let input = "/*\nheader\n*/\nfn main() {} // entry";
//! assert_eq!(strip_comments(input), "fn main() {} ");
//! ```
//!
//! # Limitations
//!
//! The transform is purely lexical. `//` and `/*` inside string or character
//! literals are treated as comment markers, every blank line is dropped (not
//! just ones the comment passes created), line endings are normalized to
//! `\n`, and a trailing newline is not restored. Making the pass
//! literal-aware would require a real tokenizer.

mod comments;

pub use comments::{drop_blank_lines, strip_block_comments, strip_comments, strip_line_comments};
