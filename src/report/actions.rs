//! Publishing a report to GitHub Actions
//!
//! Actions exposes file-based commands through environment variables: the
//! step summary, step outputs and environment for later steps are all files
//! that accept appended content. Annotations are workflow commands written
//! to stdout.

use anyhow::{Context, Result};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// True when running inside a GitHub Actions job
pub fn is_github_actions() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}

/// Destinations for the report inside an Actions job
#[derive(Debug, Clone, Default)]
pub struct ActionsPublisher {
    pub step_summary: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub env: Option<PathBuf>,
}

impl ActionsPublisher {
    /// Resolve the command files from the job environment
    pub fn from_env() -> Self {
        let path = |name: &str| env::var_os(name).map(PathBuf::from);
        Self {
            step_summary: path("GITHUB_STEP_SUMMARY"),
            output: path("GITHUB_OUTPUT"),
            env: path("GITHUB_ENV"),
        }
    }

    /// Publish the rendered report.
    ///
    /// The report goes to the step summary, to output and env `result`, and
    /// as a JSON string to output and env `result_escaped`. An error
    /// annotation is written to `annotations` when duplicates were found.
    pub fn publish(
        &self,
        report: &str,
        has_duplicates: bool,
        annotations: &mut impl Write,
    ) -> Result<()> {
        if let Some(path) = &self.step_summary {
            append(path, &format!("{report}\n"))?;
        }

        let escaped = serde_json::to_string(report)?;
        self.set_output("result", report)?;
        self.set_env("result", report)?;
        self.set_output("result_escaped", &escaped)?;
        self.set_env("result_escaped", &escaped)?;

        if has_duplicates {
            writeln!(annotations, "::error::{}", escape_data(report))
                .context("Failed to write error annotation")?;
        }

        Ok(())
    }

    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output {
            Some(path) => append(path, &key_value_block(name, value)),
            None => Ok(()),
        }
    }

    pub fn set_env(&self, name: &str, value: &str) -> Result<()> {
        match &self.env {
            Some(path) => append(path, &key_value_block(name, value)),
            None => Ok(()),
        }
    }
}

/// `name<<DELIM\nvalue\nDELIM\n`, with a random delimiter so multi-line
/// values cannot terminate the block early
fn key_value_block(name: &str, value: &str) -> String {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Escape data for a workflow command
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}
