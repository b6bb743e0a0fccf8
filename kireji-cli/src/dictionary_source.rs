//! Dictionary source management for CLI

use crate::error::CliError;
use anyhow::Result;
use kireji_core::{CmuDictionary, PronunciationLookup};
use std::path::PathBuf;
use std::sync::Arc;

/// Source of pronunciation data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Lexicon embedded in kireji-core
    Bundled,
    /// CMU-format file on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Pick the command-line path over the configured one
    pub fn resolve(flag: Option<PathBuf>, configured: Option<PathBuf>) -> Self {
        match flag.or(configured) {
            Some(path) => DictionarySource::File(path),
            None => DictionarySource::Bundled,
        }
    }

    /// Get the display name for the dictionary source
    pub fn display_name(&self) -> String {
        match self {
            DictionarySource::Bundled => "Built-in: CMU sample lexicon".to_string(),
            DictionarySource::File(path) => format!("File: {}", path.display()),
        }
    }

    /// Load the dictionary once for sharing across validations
    pub fn load(&self) -> Result<Arc<dyn PronunciationLookup>> {
        log::info!("Loading dictionary ({})", self.display_name());
        match self {
            DictionarySource::Bundled => Ok(Arc::new(CmuDictionary::bundled())),
            DictionarySource::File(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                let dictionary = CmuDictionary::from_file(path)
                    .map_err(|e| CliError::DictionaryError(e.to_string()))?;
                log::debug!("Loaded {} words", dictionary.len());
                Ok(Arc::new(dictionary))
            }
        }
    }
}
