//! Sequential jwalk-based directory walker.

use std::time::Instant;

use jwalk::{Parallelism, WalkDir};

use decomment_core::{RunStats, StripConfig, StripError, StripReport, StripWarning};

use crate::file::{strip_file, FileOutcome};

/// Walks a directory tree and strips comments from matching files in place.
///
/// Traversal is sequential: each candidate is fully read, transformed, and
/// written back before the next one is considered, so no two files are ever
/// in flight at once.
pub struct StripWalker;

impl StripWalker {
    /// Create a new walker.
    pub fn new() -> Self {
        Self
    }

    /// Walk the configured root and process every matching file.
    ///
    /// Returns an error only when the root itself is unusable; everything
    /// that goes wrong below the root is collected into the report's
    /// warnings and the walk keeps going.
    pub fn run(&self, config: &StripConfig) -> Result<StripReport, StripError> {
        let start = Instant::now();
        let root_path = config.root.canonicalize().map_err(|e| StripError::io(&config.root, e))?;

        // Verify root is a directory
        if !root_path.is_dir() {
            return Err(StripError::NotADirectory { path: root_path });
        }

        let mut stats = RunStats::new();
        let mut modified = Vec::new();
        let mut warnings = Vec::new();

        // Hidden entries stay visible so dot-directories can still be matched
        // (or excluded) by name.
        let walker = WalkDir::new(&root_path)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    tracing::warn!("walk error at {}: {}", path.display(), err);
                    warnings.push(StripWarning::walk_failed(path, err.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            stats.record_seen();

            let file_name = entry.file_name().to_string_lossy();
            if !config.matches_extension(&file_name) {
                continue;
            }

            let path = entry.path();
            if config.is_excluded(&path) {
                tracing::debug!("excluded: {}", path.display());
                continue;
            }
            stats.record_matched();

            match strip_file(&path, config.dry_run) {
                Ok(FileOutcome::Modified { bytes_removed }) => {
                    tracing::debug!("stripped {} ({} bytes removed)", path.display(), bytes_removed);
                    stats.record_modified(bytes_removed);
                    modified.push(path);
                }
                Ok(FileOutcome::Unchanged) => {
                    tracing::debug!("already clean: {}", path.display());
                    stats.record_unchanged();
                }
                Err(warning) => {
                    tracing::warn!("{} at {}", warning.message, warning.path.display());
                    stats.record_failed();
                    warnings.push(warning);
                }
            }
        }

        Ok(StripReport::new(
            root_path,
            config.clone(),
            stats,
            modified,
            warnings,
            start.elapsed(),
        ))
    }
}

impl Default for StripWalker {
    fn default() -> Self {
        Self::new()
    }
}
