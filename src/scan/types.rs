use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// A content match in a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMatch {
    /// Byte offset of the match start in the raw file content
    pub offset: usize,
    /// Absolute path of the file
    pub path: PathBuf,
    /// Full match followed by every capture group, in pattern order.
    /// Groups that did not participate are empty strings.
    pub groups: Vec<String>,
}

impl FileMatch {
    /// The duplicate-detection key: the last capture group, or the whole
    /// match when the regex has no groups
    pub fn key(&self) -> &str {
        self.groups.last().map(String::as_str).unwrap_or_default()
    }

    /// The complete matched text
    pub fn matched_text(&self) -> &str {
        self.groups.first().map(String::as_str).unwrap_or_default()
    }
}

/// Key → every match recorded for it
pub type MatchIndex = BTreeMap<String, Vec<FileMatch>>;

/// Key → number of matches it had when the latest duplicate was detected
pub type DuplicateCounts = BTreeMap<String, usize>;

/// Final snapshot of a completed scan
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Files the content matcher was invoked on (size-skipped files included)
    pub files_checked: usize,
    pub matches: MatchIndex,
    pub duplicates: DuplicateCounts,
    /// Files skipped for exceeding the size threshold
    pub large_files: Vec<PathBuf>,
    pub duration: Duration,
}

impl ScanResult {
    /// Number of distinct duplicated keys
    pub fn duplicated_key_count(&self) -> usize {
        self.duplicates.len()
    }

    /// Sum of the per-key duplicate counts
    pub fn duplicate_occurrences(&self) -> usize {
        self.duplicates.values().sum()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Matches of every duplicated key, in key order
    pub fn duplicate_matches(&self) -> impl Iterator<Item = (&str, &[FileMatch])> {
        self.duplicates.keys().map(|key| {
            let matches = self.matches.get(key).map(Vec::as_slice).unwrap_or_default();
            (key.as_str(), matches)
        })
    }
}
