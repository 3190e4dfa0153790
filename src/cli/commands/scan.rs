use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

use crate::cli::Output;
use crate::config::DupeConfig;
use crate::report::{self, actions};
use crate::scan::Scanner;

/// Scan settings. Unset flags fall through to the config file and defaults.
#[derive(Args, Debug, Default, Serialize)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(short = 'd', long = "directory-scope", env = "INPUT_DIRECTORY_SCOPE", value_name = "DIR", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_scope: Option<String>,

    /// Extension of the files to check, e.g. `.env` or `env`
    #[arg(short = 'e', long = "extension", env = "INPUT_CHECK_FILE_EXTENSION", value_name = "EXT", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_file_extension: Option<String>,

    /// Regex applied to file contents; the last capture group is the key
    #[arg(short = 'r', long = "content-regex", env = "INPUT_CONTENT_REGEX", value_name = "REGEX", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_regex: Option<String>,

    /// Skip files larger than this many bytes
    #[arg(long = "max-file-size", env = "INPUT_MAX_FILE_SIZE_BYTES", value_name = "BYTES", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size_bytes: Option<u64>,

    /// Stop checking files once this many distinct keys were found (advisory)
    #[arg(long = "max-files", env = "INPUT_MAX_FILES_TO_PROCESS", value_name = "N", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files_to_process: Option<usize>,

    /// Extensions never checked (comma separated)
    #[arg(long = "exclude-ext", env = "INPUT_EXCLUDED_EXTENSIONS", value_delimiter = ',', global = true)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_extensions: Vec<String>,

    /// File names never checked (comma separated)
    #[arg(long = "ignore-files", env = "INPUT_IGNORE_FILES", value_delimiter = ',', global = true)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_files: Vec<String>,

    /// Skip directories whose path contains any of these (comma separated)
    #[arg(long = "ignore-paths", env = "INPUT_IGNORE_PATHS_CONTAINING", value_delimiter = ',', global = true)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_paths_containing: Vec<String>,

    /// Log level used when RUST_LOG and -v are absent
    #[arg(long = "log-level", env = "INPUT_LOG_LEVEL", value_name = "LEVEL", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Worker threads (0 = derive from CPU cores)
    #[arg(long = "threads", env = "INPUT_MAX_THREADS", value_name = "N", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_threads: Option<usize>,

    /// Exit with status 1 when duplicates are found
    #[arg(
        long = "fail-on-duplicates",
        env = "INPUT_FAIL_ON_DUPLICATES",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        global = true
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_duplicates: Option<bool>,

    /// Report format printed to stdout
    #[arg(long, value_enum, default_value = "text", global = true)]
    #[serde(skip)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// JSON report
    Json,
}

pub async fn execute(config: DupeConfig, format: OutputFormat, output: &Output) -> Result<()> {
    let fail_on_duplicates = config.fail_on_duplicates;
    let scanner = Arc::new(Scanner::new(config.validate()?));

    // The walk blocks on its own worker threads
    let worker = Arc::clone(&scanner);
    let result = tokio::task::spawn_blocking(move || worker.scan())
        .await
        .context("Scan task failed")??;

    let text = report::render_text(&result, scanner.config());
    match format {
        OutputFormat::Text => print!("{text}"),
        OutputFormat::Json => println!("{}", report::render_json(&result, scanner.config())?),
    }

    if actions::is_github_actions() {
        let publisher = actions::ActionsPublisher::from_env();
        // Keep stdout a single JSON document; the runner reads commands on stderr too
        let published = match format {
            OutputFormat::Text => publisher.publish(&text, result.has_duplicates(), &mut std::io::stdout()),
            OutputFormat::Json => publisher.publish(&text, result.has_duplicates(), &mut std::io::stderr()),
        };
        published.context("Failed to publish report to GitHub Actions")?;
        output.info("Report published to GitHub Actions");
    }

    output.scan_outcome(&result);
    if result.has_duplicates() && fail_on_duplicates {
        output.error("Duplicates found, failing the check");
        // exit skips destructors; make sure the report is out first
        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }

    Ok(())
}
