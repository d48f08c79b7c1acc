//! Run report and summary statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::config::StripConfig;
use crate::error::StripWarning;

/// Counters accumulated across one strip run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Regular files the walk encountered.
    pub files_seen: u64,
    /// Files that matched the extension filter and were not excluded.
    pub files_matched: u64,
    /// Files rewritten (or that would be rewritten, under dry-run).
    pub files_modified: u64,
    /// Matched files whose content was already clean.
    pub files_unchanged: u64,
    /// Matched files that failed to read, decode, or write.
    pub files_failed: u64,
    /// Total bytes removed across modified files.
    pub bytes_removed: u64,
}

impl RunStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a regular file encountered by the walk.
    pub fn record_seen(&mut self) {
        self.files_seen += 1;
    }

    /// Record a file that passed the extension and exclusion filters.
    pub fn record_matched(&mut self) {
        self.files_matched += 1;
    }

    /// Record a rewritten file.
    pub fn record_modified(&mut self, bytes_removed: u64) {
        self.files_modified += 1;
        self.bytes_removed += bytes_removed;
    }

    /// Record a file left untouched.
    pub fn record_unchanged(&mut self) {
        self.files_unchanged += 1;
    }

    /// Record a file that could not be processed.
    pub fn record_failed(&mut self) {
        self.files_failed += 1;
    }
}

/// Complete result of one strip run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripReport {
    /// Canonicalized root that was walked.
    pub root_path: PathBuf,

    /// Configuration the run used.
    pub config: StripConfig,

    /// Summary counters.
    pub stats: RunStats,

    /// Paths that were rewritten, in walk order.
    pub modified: Vec<PathBuf>,

    /// Warnings recorded during the run, in walk order.
    pub warnings: Vec<StripWarning>,

    /// When the run finished.
    pub completed_at: SystemTime,

    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl StripReport {
    /// Create a new report.
    pub fn new(
        root_path: PathBuf,
        config: StripConfig,
        stats: RunStats,
        modified: Vec<PathBuf>,
        warnings: Vec<StripWarning>,
        duration: Duration,
    ) -> Self {
        Self {
            root_path,
            config,
            stats,
            modified,
            warnings,
            completed_at: SystemTime::now(),
            duration,
        }
    }

    /// Number of files rewritten.
    pub fn modified_count(&self) -> u64 {
        self.stats.files_modified
    }

    /// Check if any warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if this was a dry run.
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
