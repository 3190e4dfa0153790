//! Command-line interface for dupe-check
//!
//! Every scan setting is a global flag that also reads the matching GitHub
//! Actions input variable (`INPUT_*`), so the same binary works as an Action
//! entrypoint with no arguments at all.

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use crate::config::DupeConfig;
use commands::{config::ConfigArgs, scan::ScanArgs};

/// Flag duplicated regex captures across the files of a directory tree
#[derive(Parser, Debug)]
#[command(name = "dupe-check", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logs and status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the directory for duplicated keys (default)
    Scan,
    /// Configuration management
    Config(ConfigArgs),
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// Actions sets an empty `INPUT_*` variable for every declared input the
    /// workflow leaves out; those count as unset instead of failing to parse.
    pub fn parse_args() -> Self {
        Self::parse_args_from(std::env::args_os())
    }

    pub fn parse_args_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let blank: Vec<String> = command
            .get_arguments()
            .filter(|arg| {
                arg.get_env()
                    .and_then(std::env::var_os)
                    .is_some_and(|value| value.is_empty())
            })
            .map(|arg| arg.get_id().to_string())
            .collect();
        for id in blank {
            command = command.mut_arg(id, |arg| arg.env(None::<&str>));
        }

        let mut matches = command.get_matches_from(args);
        Self::from_arg_matches_mut(&mut matches).unwrap_or_else(|error| error.exit())
    }

    pub async fn run(self) -> Result<()> {
        let config = DupeConfig::load(self.config.as_deref(), Some(&self.scan))?;
        setup_logging(self.verbose, self.quiet, &config.log_level);

        let output = Output::new(self.quiet);
        match self.command {
            None | Some(Commands::Scan) => {
                commands::scan::execute(config, self.scan.format, &output).await
            }
            Some(Commands::Config(args)) => commands::config::execute(args, &config),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool, log_level: &str) {
    if quiet {
        return;
    }

    // Keep the walker's dependencies quiet below trace
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::try_new(format!(
                "{log_level},ignore=warn,globset=warn"
            ))
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn")),
            1 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // try_init: a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
