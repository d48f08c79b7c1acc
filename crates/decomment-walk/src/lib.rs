//! Sequential filesystem walk and in-place rewriting for decomment.
//!
//! This crate drives the whole strip run: it walks a root directory with
//! jwalk, filters candidates by file-name suffix and excluded path
//! components, and pipes each match through the per-file strip pipeline.
//! The result is a [`StripReport`] describing what was rewritten and what
//! went wrong along the way.
//!
//! # Example
//!
//! ```no_run
//! use decomment_walk::{StripConfig, StripWalker};
//!
//! # fn main() -> Result<(), decomment_walk::StripError> {
//! let config = StripConfig::new("/path/to/project");
//! let report = StripWalker::new().run(&config)?;
//! println!("rewrote {} files", report.modified_count());
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod walker;

pub use file::{strip_file, FileOutcome};
pub use walker::StripWalker;

// Re-export core types
pub use decomment_core::{RunStats, StripConfig, StripError, StripReport, StripWarning, WarningKind};
