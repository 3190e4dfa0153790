use anyhow::{Context, Result};
use regex::bytes::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use super::DupeConfig;
use crate::parallel::ParallelConfig;

/// Validated, immutable configuration shared by every scan component
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root of the walk, as given (not canonicalized)
    pub root: PathBuf,
    /// Dot-prefixed target extension, e.g. `.txt`
    pub extension: String,
    pub content_regex: Regex,
    pub max_file_size_bytes: u64,
    pub max_files_to_process: usize,
    /// Dot-prefixed excluded extensions
    pub excluded_extensions: HashSet<String>,
    pub ignored_files: HashSet<String>,
    /// Substrings; never empty
    pub ignored_paths: Vec<String>,
    pub parallel: ParallelConfig,
}

impl DupeConfig {
    /// Validate raw settings and build the scan configuration.
    ///
    /// Fails before any walking happens when the extension is empty or `.`,
    /// the regex does not compile, or the root directory cannot be listed.
    pub fn validate(&self) -> Result<ScanConfig> {
        let extension = self.check_file_extension.trim();
        if extension.is_empty() || extension == "." {
            anyhow::bail!("invalid file extension: {:?}", self.check_file_extension);
        }

        if !(1..=100).contains(&self.thread_percentage) {
            anyhow::bail!(
                "thread_percentage must be between 1 and 100, got {}",
                self.thread_percentage
            );
        }

        let content_regex = Regex::new(&self.content_regex)
            .with_context(|| format!("error compiling content regex {:?}", self.content_regex))?;

        let root = PathBuf::from(&self.directory_scope);
        fs::read_dir(&root)
            .with_context(|| format!("error opening directory {}", root.display()))?;

        Ok(ScanConfig {
            root,
            extension: normalize_extension(extension),
            content_regex,
            max_file_size_bytes: self.max_file_size_bytes,
            max_files_to_process: self.max_files_to_process,
            excluded_extensions: non_empty(&self.excluded_extensions)
                .map(normalize_extension)
                .collect(),
            ignored_files: non_empty(&self.ignore_files).map(str::to_string).collect(),
            ignored_paths: non_empty(&self.ignore_paths_containing)
                .map(str::to_string)
                .collect(),
            parallel: ParallelConfig {
                max_threads: self.max_threads,
                thread_percentage: self.thread_percentage,
            },
        })
    }
}

/// Prefix an extension with `.` unless it already has one
pub fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

/// Trimmed entries of a comma-list setting, blanks dropped
fn non_empty(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
