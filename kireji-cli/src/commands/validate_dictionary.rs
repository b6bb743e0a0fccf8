//! Validate-dictionary command implementation

use anyhow::Result;
use clap::Args;
use kireji_core::CmuDictionary;
use std::path::PathBuf;

/// Arguments for the validate-dictionary command
#[derive(Debug, Args)]
pub struct ValidateDictionaryArgs {
    /// Path to the CMU-format dictionary to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateDictionaryArgs {
    /// Execute the validate-dictionary command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        match CmuDictionary::from_file(&self.dictionary) {
            Ok(dictionary) => {
                println!("✓ Dictionary is valid!");
                println!("  Words: {}", dictionary.len());
                println!("  Pronunciations: {}", dictionary.pronunciation_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
