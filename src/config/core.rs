use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use serde::Serialize;
use std::path::Path;

use super::DupeConfig;

/// Config files picked up from the working directory when no --config is given
const DEFAULT_CONFIG_FILES: [&str; 4] = [
    "dupe-check.toml",
    "dupe-check.json",
    "dupe-check.yaml",
    "dupe-check.yml",
];

/// Prefix for environment overrides (DUPE_CHECK_MAX_FILE_SIZE_BYTES, ...)
const ENV_PREFIX: &str = "DUPE_CHECK_";

impl DupeConfig {
    /// Load configuration with the standard layering.
    ///
    /// Priority, lowest first: defaults, config file, `DUPE_CHECK_*`
    /// environment variables, then `overrides` (the parsed command line).
    /// Fields the overrides leave out keep the lower layers' values, so
    /// overrides should skip unset fields when serializing.
    pub fn load<T: Serialize>(custom_config: Option<&Path>, overrides: Option<&T>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(DupeConfig::default()));

        if let Some(path) = custom_config {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = merge_file(figment, path);
        } else {
            for name in DEFAULT_CONFIG_FILES {
                figment = merge_file(figment, Path::new(name));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        if let Some(overrides) = overrides {
            figment = figment.merge(Serialized::defaults(overrides));
        }

        let config: DupeConfig = figment
            .extract()
            .context("Failed to load configuration")?;

        tracing::trace!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Merge a config file, choosing the provider by extension.
/// Missing files are skipped by the providers themselves.
fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}
