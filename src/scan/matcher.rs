use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use super::types::FileMatch;
use crate::config::ScanConfig;

/// Outcome of checking one qualifying file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Size (bytes) exceeded the threshold; content was not read
    TooLarge(u64),
    NoMatch,
    Matched(FileMatch),
}

/// ContentMatcher - loads a single file and applies the content regex
///
/// Performs file I/O only. The caller decides what to do with the outcome,
/// so no shared state is touched here.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    config: Arc<ScanConfig>,
}

impl ContentMatcher {
    pub fn new(config: Arc<ScanConfig>) -> Self {
        Self { config }
    }

    /// Check a file: size threshold first, then a full read and one regex
    /// search over the raw bytes.
    ///
    /// # Errors
    /// Opening, stat-ing or reading the file. These are fatal to the scan.
    pub fn check(&self, path: &Path) -> Result<CheckOutcome> {
        let mut file = File::open(path)
            .with_context(|| format!("Error opening file: {}", path.display()))?;

        let size = file
            .metadata()
            .with_context(|| format!("Error getting file info: {}", path.display()))?
            .len();

        if size > self.config.max_file_size_bytes {
            return Ok(CheckOutcome::TooLarge(size));
        }

        let mut content = Vec::with_capacity(size as usize);
        file.read_to_end(&mut content)
            .with_context(|| format!("Error reading file: {}", path.display()))?;

        Ok(match self.extract(path, &content) {
            Some(file_match) => CheckOutcome::Matched(file_match),
            None => CheckOutcome::NoMatch,
        })
    }

    /// Apply the content regex to already-loaded content.
    ///
    /// Only the first match counts. Captures are decoded lossily so that
    /// non-UTF-8 files still produce usable keys.
    pub fn extract(&self, path: &Path, content: &[u8]) -> Option<FileMatch> {
        let captures = self.config.content_regex.captures(content)?;
        let whole = captures.get(0)?;

        let groups = captures
            .iter()
            .map(|group| {
                group
                    .map(|g| String::from_utf8_lossy(g.as_bytes()).into_owned())
                    .unwrap_or_default()
            })
            .collect();

        Some(FileMatch {
            offset: whole.start(),
            path: path.to_path_buf(),
            groups,
        })
    }
}
