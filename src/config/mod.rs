//! Configuration management for dupe-check
//!
//! Raw settings ([`DupeConfig`]) are layered from built-in defaults, an
//! optional config file, `DUPE_CHECK_*` environment variables and finally the
//! command line (which also reads the GitHub Actions `INPUT_*` variables).
//! [`DupeConfig::validate`] turns them into the immutable [`ScanConfig`] the
//! scanner runs with.

use serde::{Deserialize, Deserializer, Serialize};

mod core;
mod scan;

#[cfg(test)]
mod tests;

pub use scan::{ScanConfig, normalize_extension};

/// Raw, unvalidated configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DupeConfig {
    /// Root directory of the scan
    pub directory_scope: String,

    /// Extension of the files to check (with or without the leading dot)
    pub check_file_extension: String,

    /// Regex applied to file contents; its last capture group is the key
    pub content_regex: String,

    /// Files larger than this are skipped and reported
    pub max_file_size_bytes: u64,

    /// Advisory cap on the number of distinct keys before file checks stop
    pub max_files_to_process: usize,

    /// Extensions that are never checked.
    ///
    /// List settings accept a sequence or a comma-separated string, so
    /// `DUPE_CHECK_IGNORE_FILES=a.env,b.env` works like `--ignore-files`.
    #[serde(deserialize_with = "comma_list")]
    pub excluded_extensions: Vec<String>,

    /// File names that are never checked
    #[serde(deserialize_with = "comma_list")]
    pub ignore_files: Vec<String>,

    /// Directories whose path contains any of these substrings are skipped
    #[serde(deserialize_with = "comma_list")]
    pub ignore_paths_containing: Vec<String>,

    /// Default log level when neither RUST_LOG nor -v is given
    pub log_level: String,

    /// Worker threads for the walk (0 = derive from CPU cores)
    pub max_threads: usize,

    /// Percentage of CPU cores to use when max_threads is 0
    pub thread_percentage: u8,

    /// Exit with a failure status when duplicates are found
    pub fail_on_duplicates: bool,
}

impl Default for DupeConfig {
    fn default() -> Self {
        Self {
            directory_scope: ".".to_string(),
            check_file_extension: String::new(),
            content_regex: String::new(),
            max_file_size_bytes: 200_000,
            max_files_to_process: 500,
            excluded_extensions: Vec::new(),
            ignore_files: Vec::new(),
            ignore_paths_containing: Vec::new(),
            log_level: "info".to_string(),
            max_threads: 0,
            thread_percentage: 75,
            fail_on_duplicates: false,
        }
    }
}

/// A list given either as a sequence or as one comma-separated string
fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum List {
        Items(Vec<String>),
        Joined(String),
    }

    Ok(match List::deserialize(deserializer)? {
        List::Items(items) => items,
        List::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    })
}
