//! Validator configuration
//!
//! ```toml
//! tokenizer = "whitespace"
//!
//! [form]
//! lines = [
//!     { target = 5, policy = "exact" },
//!     { target = 7, policy = "containment" },
//!     { target = 5, policy = "exact" },
//! ]
//! ```

use crate::error::{KirejiError, Result};
use crate::policy::HaikuForm;
use crate::tokenizer::TokenizerKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound on a line target; anything larger is a typo
const MAX_LINE_TARGET: u32 = 64;

/// Settings a validator is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Tokenization strategy
    pub tokenizer: TokenizerKind,
    /// Line rules
    pub form: HaikuForm,
}

impl ValidatorConfig {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ValidatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.form.lines.iter().enumerate() {
            if rule.target > MAX_LINE_TARGET {
                return Err(KirejiError::Configuration(format!(
                    "line {} target {} exceeds {}",
                    index + 1,
                    rule.target,
                    MAX_LINE_TARGET
                )));
            }
        }
        Ok(())
    }
}
