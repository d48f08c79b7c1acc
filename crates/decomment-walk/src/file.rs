//! Per-file read, transform, and write-back pipeline.

use std::fs;
use std::path::Path;

use decomment_core::StripWarning;
use decomment_strip::strip_comments;

/// Outcome of processing one matched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was rewritten (or would be, under dry-run).
    Modified {
        /// Bytes removed by the transformation.
        bytes_removed: u64,
    },
    /// The content was already clean and the file was left untouched.
    Unchanged,
}

/// Strip one file in place.
///
/// The whole file is read into memory with line endings normalized to `\n`,
/// transformed, and written back only when the result differs from the
/// normalized text. A file whose only deviation from its stripped form is
/// `\r\n` line endings is left untouched. Under `dry_run` nothing is
/// written, but the outcome still reports what a real run would do.
/// Failures never panic; they come back as a [`StripWarning`] so the caller
/// can record them and move on to the next file.
pub fn strip_file(path: &Path, dry_run: bool) -> Result<FileOutcome, StripWarning> {
    // The gate below compares texts, not encodings, so the read happens in
    // LF space the way a universal-newline text read would.
    let original = match fs::read_to_string(path) {
        Ok(content) => normalize_newlines(content),
        Err(err) => return Err(StripWarning::read_failed(path, &err)),
    };

    let stripped = strip_comments(&original);
    if stripped == original {
        return Ok(FileOutcome::Unchanged);
    }

    if !dry_run {
        if let Err(err) = fs::write(path, &stripped) {
            return Err(StripWarning::write_failed(path, &err));
        }
    }

    let bytes_removed = original.len().saturating_sub(stripped.len()) as u64;
    Ok(FileOutcome::Modified { bytes_removed })
}

/// Normalize `\r\n` and bare `\r` line endings to `\n`.
fn normalize_newlines(input: String) -> String {
    if input.contains('\r') {
        input.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        input
    }
}
