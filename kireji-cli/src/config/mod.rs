//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use kireji_core::{HaikuForm, TokenizerKind, ValidatorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Validation configuration
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Line rules
    #[serde(default)]
    pub form: HaikuForm,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ValidationConfig {
    /// Default tokenizer
    #[serde(default)]
    pub tokenizer: TokenizerKind,

    /// CMU-format dictionary file (bundled lexicon when unset)
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        config
            .validator_config()
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    /// Load the file if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Core validator settings
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            tokenizer: self.validation.tokenizer,
            form: self.form,
        }
    }
}
