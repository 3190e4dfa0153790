//! # dupe-check - find strings that should exist only once
//!
//! dupe-check walks a directory tree, applies a content regex to every file
//! with a given extension and flags keys (the regex's last capture group)
//! that turn up in more than one file. It is built for CI: catching a
//! credential pasted into several config files, or an identifier that must
//! stay unique across a codebase.
//!
//! ## Quick Start
//!
//! ```bash
//! # Flag API keys shared between .env files
//! dupe-check --extension .env --content-regex 'API_KEY=(\w+)' --ignore-paths node_modules
//!
//! # Same, configured through GitHub Actions inputs
//! INPUT_CHECK_FILE_EXTENSION=.env INPUT_CONTENT_REGEX='API_KEY=(\w+)' dupe-check
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use dupe_check::{DupeConfig, Scanner};
//!
//! let config = DupeConfig::load::<()>(None, None)?;
//! let result = Scanner::new(config.validate()?).scan()?;
//! println!("{} duplicated keys", result.duplicated_key_count());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod parallel;
pub mod report;
pub mod scan;

pub use cli::{Cli, Output};
pub use config::{DupeConfig, ScanConfig};
pub use scan::{FileMatch, ScanResult, Scanner};

/// Result type alias for dupe-check operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
