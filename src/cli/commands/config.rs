use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::DupeConfig;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the merged configuration (defaults, file, environment, flags)
    Show {
        /// Output syntax
        #[arg(value_enum, value_name = "SYNTAX", default_value = "toml")]
        syntax: ConfigFormat,
    },
    /// Validate the merged configuration without scanning
    Validate,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

pub fn execute(args: ConfigArgs, config: &DupeConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Show { syntax } => {
            println!("{}", render(config, syntax)?);
        }
        ConfigCommands::Validate => {
            let scan = config.validate()?;
            println!(
                "Configuration is valid: scanning {} for *{} files",
                scan.root.display(),
                scan.extension
            );
        }
    }
    Ok(())
}

fn render(config: &DupeConfig, format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
    })
}
