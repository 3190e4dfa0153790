use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::aggregator::DuplicateAggregator;
use super::types::ScanResult;

/// Mutable state shared by every walk worker for the duration of one scan
#[derive(Debug, Default)]
pub struct ScanState {
    pub aggregator: DuplicateAggregator,
    files_checked: AtomicUsize,
    large_files: Mutex<Vec<PathBuf>>,
    fatal: Mutex<Option<anyhow::Error>>,
    aborted: AtomicBool,
    cap_reached: AtomicBool,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_files_checked(&self) {
        self.files_checked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked.load(Ordering::Relaxed)
    }

    pub fn push_large_file(&self, path: PathBuf) {
        self.large_files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path);
    }

    /// Record a fatal error. Only the first one is kept.
    pub fn abort(&self, error: anyhow::Error) {
        let mut fatal = self.fatal.lock().unwrap_or_else(PoisonError::into_inner);
        if fatal.is_none() {
            *fatal = Some(error);
        }
        self.aborted.store(true, Ordering::Release);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    /// Returns true only for the first caller, so the cap is logged once
    pub fn mark_cap_reached(&self) -> bool {
        !self.cap_reached.swap(true, Ordering::Relaxed)
    }

    pub fn take_fatal(&self) -> Option<anyhow::Error> {
        self.fatal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Freeze the shared state into the final result
    pub fn into_result(self, duration: Duration) -> ScanResult {
        let files_checked = self.files_checked.into_inner();
        let large_files = self
            .large_files
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        let (matches, duplicates) = self.aggregator.into_parts();

        ScanResult {
            files_checked,
            matches,
            duplicates,
            large_files,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fatal_error_wins() {
        let state = ScanState::new();
        assert!(!state.is_aborted());

        state.abort(anyhow::anyhow!("first"));
        state.abort(anyhow::anyhow!("second"));

        assert!(state.is_aborted());
        assert_eq!(state.take_fatal().unwrap().to_string(), "first");
        assert!(state.take_fatal().is_none());
    }

    #[test]
    fn test_cap_reached_reported_once() {
        let state = ScanState::new();
        assert!(state.mark_cap_reached());
        assert!(!state.mark_cap_reached());
    }

    #[test]
    fn test_into_result_carries_counters() {
        let state = ScanState::new();
        state.increment_files_checked();
        state.increment_files_checked();
        state.push_large_file(PathBuf::from("/big.txt"));

        let result = state.into_result(Duration::from_millis(5));
        assert_eq!(result.files_checked, 2);
        assert_eq!(result.large_files, vec![PathBuf::from("/big.txt")]);
        assert_eq!(result.duration, Duration::from_millis(5));
        assert!(result.matches.is_empty());
    }
}
