//! Concurrent tree-walk-and-match engine
//!
//! Walks a directory tree on a bounded worker pool, applies the content
//! regex to every qualifying file and groups the extracted keys so that keys
//! seen in more than one file are reported as duplicates.
//!
//! ```rust,no_run
//! use dupe_check::config::DupeConfig;
//! use dupe_check::scan::Scanner;
//!
//! let config = DupeConfig {
//!     check_file_extension: ".env".to_string(),
//!     content_regex: r"API_KEY=(\w+)".to_string(),
//!     ..DupeConfig::default()
//! };
//! let scanner = Scanner::new(config.validate()?);
//! let result = scanner.scan()?;
//!
//! for (key, matches) in result.duplicate_matches() {
//!     println!("{key} appears in {} files", matches.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod aggregator;
mod filters;
mod matcher;
mod scanner;
mod state;
mod types;
mod walker;

// Public API exports
pub use aggregator::DuplicateAggregator;
pub use filters::{FilterDecision, IgnoreFilter, dotted_extension};
pub use matcher::{CheckOutcome, ContentMatcher};
pub use scanner::Scanner;
pub use state::ScanState;
pub use types::{DuplicateCounts, FileMatch, MatchIndex, ScanResult};
pub use walker::TreeWalker;
