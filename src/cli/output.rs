//! Styled status output
//!
//! Status lines go to stderr so stdout carries only the report itself.

use console::style;

use crate::scan::ScanResult;

/// Status-line printer; `quiet` silences everything except errors
#[derive(Debug, Clone, Copy)]
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        self.status(style("✔").green(), message);
    }

    /// Always shown, quiet or not
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    pub fn warning(&self, message: &str) {
        self.status(style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        self.status(style("ℹ").blue(), message);
    }

    /// One-line verdict for a finished scan
    pub fn scan_outcome(&self, result: &ScanResult) {
        if result.has_duplicates() {
            self.warning(&format!(
                "Found {} duplicated keys ({} occurrences) in {} checked files",
                style(result.duplicated_key_count()).bold(),
                result.duplicate_occurrences(),
                result.files_checked
            ));
        } else {
            self.success(&format!("No duplicates in {} checked files", result.files_checked));
        }

        if !result.large_files.is_empty() {
            self.info(&format!(
                "{} files were over the size limit and not checked",
                result.large_files.len()
            ));
        }
    }

    fn status(&self, symbol: console::StyledObject<&str>, message: &str) {
        if !self.quiet {
            eprintln!("{symbol} {message}");
        }
    }
}
