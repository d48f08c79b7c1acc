//! Strip run configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a strip run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StripConfig {
    /// Root directory to walk.
    pub root: PathBuf,

    /// File-name suffixes to process, dotted (e.g. ".rs", ".ts").
    #[builder(default = "default_extensions()")]
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path-component names that exclude a file anywhere in its path.
    #[builder(default = "default_exclude_dirs()")]
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Report files that would change without rewriting anything.
    #[builder(default = "false")]
    #[serde(default)]
    pub dry_run: bool,
}

fn default_extensions() -> Vec<String> {
    vec![".rs".to_string(), ".ts".to_string()]
}

fn default_exclude_dirs() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "target".to_string(),
        ".git".to_string(),
    ]
}

impl StripConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl StripConfig {
    /// Create a new strip config builder.
    pub fn builder() -> StripConfigBuilder {
        StripConfigBuilder::default()
    }

    /// Create a config for a root with the default extension and exclusion sets.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            dry_run: false,
        }
    }

    /// Check if a file name ends with one of the configured suffixes.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// Check if any component of a path is an excluded name.
    ///
    /// The whole path is inspected, directory names and file name alike, so a
    /// root that itself sits under an excluded name matches everything.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.exclude_dirs.iter().any(|dir| dir.as_str() == name)
        })
    }
}
