//! Command handlers

use std::path::Path;

use anyhow::{Context as _, Result};

use assetpack::config::Config;
use assetpack::presentation::factory::{self, ConcretePackageCompressor};

pub mod compress;
pub mod info;
pub mod register;
pub mod reset;

/// Loaded configuration and the compressor built from it
pub struct Context {
    pub compressor: ConcretePackageCompressor,
    pub json: bool,
}

impl Context {
    pub fn load(config_path: &Path, json: bool) -> Result<Self> {
        let (config, warnings) = Config::load_with_warnings(config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;

        for warning in &warnings {
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            match &warning.suggestion {
                Some(suggestion) => tracing::warn!(
                    "unknown config key '{}' in {} (did you mean '{}'?)",
                    warning.key,
                    location,
                    suggestion
                ),
                None => tracing::warn!("unknown config key '{}' in {}", warning.key, location),
            }
        }

        let config = config.with_env_overrides(config_path);
        config.validate(config_path)?;

        Ok(Self {
            compressor: factory::create_compressor(&config),
            json,
        })
    }
}

/// Print `value` as pretty JSON on stdout
pub fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
