use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder, WalkState};
use std::path::Path;
use std::sync::Arc;

use super::filters::{FilterDecision, IgnoreFilter};
use super::matcher::{CheckOutcome, ContentMatcher};
use super::state::ScanState;
use crate::config::ScanConfig;

/// TreeWalker - recursive traversal on a bounded worker pool
///
/// Directories are work items pulled from a shared queue by a fixed number
/// of workers (the `ignore` crate's parallel walker). Qualifying files are
/// checked inline by the worker that lists them, so sibling subtrees and
/// files proceed concurrently.
///
/// ```text
/// root ─▶ [queue] ─▶ worker 1 ─┬─ subdir ─▶ [queue]
///                  ─▶ worker 2 ├─ file ─▶ ContentMatcher ─▶ DuplicateAggregator
///                  ─▶ worker N └─ ignored path ─▶ skip subtree
/// ```
///
/// The walk returns only after every worker has drained the queue. The first
/// I/O error stops all workers and is returned; no partial result survives.
pub struct TreeWalker {
    config: Arc<ScanConfig>,
    filter: IgnoreFilter,
    matcher: ContentMatcher,
    threads: usize,
}

impl TreeWalker {
    pub fn new(config: Arc<ScanConfig>) -> Self {
        let threads = config.parallel.calculate_optimal_workers();
        Self {
            filter: IgnoreFilter::new(config.clone()),
            matcher: ContentMatcher::new(config.clone()),
            config,
            threads,
        }
    }

    /// Number of worker threads this walker runs with
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Walk the configured root, feeding matches into `state`
    pub fn walk(&self, state: &ScanState) -> Result<()> {
        let root = &self.config.root;
        if self.filter.is_path_ignored(root) {
            tracing::debug!("Root {} is in the ignore list. Skipping", root.display());
            return Ok(());
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false) // no gitignore/hidden rules, only ours
            .follow_links(false)
            .threads(self.threads);

        tracing::debug!("Walking {} with {} workers", root.display(), self.threads);

        builder
            .build_parallel()
            .run(|| Box::new(|entry| self.visit(entry, state)));

        match state.take_fatal() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn visit(&self, entry: Result<DirEntry, ignore::Error>, state: &ScanState) -> WalkState {
        if state.is_aborted() {
            return WalkState::Quit;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                state.abort(anyhow::Error::new(error).context("Error reading directory"));
                return WalkState::Quit;
            }
        };

        let path = entry.path();
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            if self.filter.is_path_ignored(path) {
                tracing::debug!("Path {} is in the ignore list. Skipping", path.display());
                return WalkState::Skip;
            }
            return WalkState::Continue;
        }

        match self.visit_file(path, state) {
            Ok(()) => WalkState::Continue,
            Err(error) => {
                state.abort(error);
                WalkState::Quit
            }
        }
    }

    fn visit_file(&self, path: &Path, state: &ScanState) -> Result<()> {
        let Some(name) = path.file_name().map(|name| name.to_string_lossy()) else {
            return Ok(());
        };

        if let FilterDecision::Skip(reason) = self.filter.qualify_file(&name) {
            tracing::trace!("File {} skipped: {}", path.display(), reason);
            return Ok(());
        }

        // Advisory: other workers may be mid-check, so the key count can
        // still overshoot by up to threads - 1.
        let keys = state.aggregator.distinct_keys();
        if keys >= self.config.max_files_to_process {
            if state.mark_cap_reached() {
                tracing::warn!(
                    "Reached {} distinct matches (max_files_to_process = {}); skipping remaining files",
                    keys,
                    self.config.max_files_to_process
                );
            }
            return Ok(());
        }

        state.increment_files_checked();
        let path = std::path::absolute(path)
            .with_context(|| format!("Error resolving path: {}", path.display()))?;

        match self.matcher.check(&path)? {
            CheckOutcome::TooLarge(size) => {
                tracing::debug!("File {} is too large ({} bytes). Skipping", path.display(), size);
                state.push_large_file(path);
            }
            CheckOutcome::NoMatch => {
                tracing::trace!("No match in {}", path.display());
            }
            CheckOutcome::Matched(file_match) => {
                let key = file_match.key().to_string();
                if let Some(count) = state.aggregator.record(key.clone(), file_match) {
                    tracing::debug!("Duplicate {:?} found in {} ({} matches)", key, path.display(), count);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DupeConfig;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn walker(dir: &TempDir) -> TreeWalker {
        let config = DupeConfig {
            directory_scope: dir.path().to_string_lossy().to_string(),
            check_file_extension: "txt".to_string(),
            content_regex: r"k=(\w+)".to_string(),
            ..DupeConfig::default()
        };
        TreeWalker::new(Arc::new(config.validate().unwrap()))
    }

    #[test]
    fn test_listing_error_aborts_walk() {
        let dir = TempDir::new().unwrap();
        let walker = walker(&dir);
        let state = ScanState::new();

        let error = ignore::Error::WithPath {
            path: PathBuf::from("./locked"),
            err: Box::new(ignore::Error::Io(io::Error::from(io::ErrorKind::PermissionDenied))),
        };
        assert_eq!(walker.visit(Err(error), &state), WalkState::Quit);
        assert!(state.is_aborted());

        // Later entries are not processed once aborted
        fs::write(dir.path().join("a.txt"), "k=v").unwrap();
        let entry = WalkBuilder::new(dir.path().join("a.txt")).build().next().unwrap();
        assert_eq!(walker.visit(entry, &state), WalkState::Quit);
        assert_eq!(state.files_checked(), 0);

        let fatal = state.take_fatal().unwrap();
        assert!(format!("{fatal:#}").contains("Error reading directory"));
    }

    #[test]
    fn test_ignored_directory_skips_subtree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        let config = DupeConfig {
            directory_scope: dir.path().to_string_lossy().to_string(),
            check_file_extension: "txt".to_string(),
            content_regex: "x".to_string(),
            ignore_paths_containing: vec!["vendor".to_string()],
            ..DupeConfig::default()
        };
        let walker = TreeWalker::new(Arc::new(config.validate().unwrap()));
        let state = ScanState::new();

        let entry = WalkBuilder::new(dir.path().join("vendor")).build().next().unwrap();
        assert_eq!(walker.visit(entry, &state), WalkState::Skip);
        assert!(!state.is_aborted());
    }
}
