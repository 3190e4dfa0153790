//! Main Scanner implementation

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

use super::state::ScanState;
use super::types::ScanResult;
use super::walker::TreeWalker;
use crate::config::ScanConfig;

/// Main scanner orchestrator
pub struct Scanner {
    config: Arc<ScanConfig>,
    walker: TreeWalker,
}

impl Scanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let config = Arc::new(config);
        let walker = TreeWalker::new(config.clone());
        Self { config, walker }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run one complete scan.
    ///
    /// All state is created fresh per call; the result is a snapshot taken
    /// after every worker has finished.
    pub fn scan(&self) -> Result<ScanResult> {
        let start = Instant::now();
        tracing::info!(
            "Scanning {} for *{} files ({} workers)",
            self.config.root.display(),
            self.config.extension,
            self.walker.threads()
        );
        tracing::debug!("Content regex is {}", self.config.content_regex.as_str());

        let state = ScanState::new();
        self.walker.walk(&state)?;

        let result = state.into_result(start.elapsed());
        tracing::info!(
            "Checked {} files in {:?}: {} keys, {} duplicated, {} large files skipped",
            result.files_checked,
            result.duration,
            result.matches.len(),
            result.duplicated_key_count(),
            result.large_files.len()
        );
        Ok(result)
    }
}
