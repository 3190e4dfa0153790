//! Path, file name and extension exclusion
//!
//! Every check here is a pure predicate over the validated configuration and
//! runs before any I/O is performed on a candidate path.

use crate::config::{ScanConfig, normalize_extension};
use std::path::Path;
use std::sync::Arc;

/// Decision for whether to check or skip a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Hand the file to the content matcher
    Process,
    /// Skip this file with a reason
    Skip(&'static str),
}

/// Exclusion rules for directories and files
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    config: Arc<ScanConfig>,
}

impl IgnoreFilter {
    pub fn new(config: Arc<ScanConfig>) -> Self {
        Self { config }
    }

    /// True if any configured substring occurs in the path (plain substring,
    /// not a glob)
    pub fn is_path_ignored(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.config
            .ignored_paths
            .iter()
            .any(|needle| path.contains(needle.as_str()))
    }

    /// True if the file name is exactly one of the ignored names
    pub fn is_file_ignored(&self, name: &str) -> bool {
        self.config.ignored_files.contains(name)
    }

    /// True if the extension, once dot-prefixed, is excluded
    pub fn is_extension_excluded(&self, extension: &str) -> bool {
        self.config
            .excluded_extensions
            .contains(&normalize_extension(extension))
    }

    /// Decide whether a file with this name qualifies for a content check
    pub fn qualify_file(&self, name: &str) -> FilterDecision {
        let Some(extension) = dotted_extension(name) else {
            return FilterDecision::Skip("no extension");
        };

        if extension != self.config.extension {
            return FilterDecision::Skip("extension mismatch");
        }
        if self.is_extension_excluded(extension) {
            return FilterDecision::Skip("excluded extension");
        }
        if self.is_file_ignored(name) {
            return FilterDecision::Skip("ignored file name");
        }

        FilterDecision::Process
    }
}

/// Suffix of a file name from its last `.`, dot included.
///
/// Unlike [`Path::extension`], a leading dot counts: `.env` yields `.env`.
pub fn dotted_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|index| &name[index..])
}
