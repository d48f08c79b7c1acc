//! Core types for decomment.
//!
//! This crate provides the configuration, error, and report types shared by
//! the decomment walker and CLI.

mod config;
mod error;
mod report;

pub use config::{StripConfig, StripConfigBuilder};
pub use error::{StripError, StripWarning, WarningKind};
pub use report::{RunStats, StripReport};
