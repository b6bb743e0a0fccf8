//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One candidate haiku and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// `path:line` or `text #n`
    pub source: String,
    /// Raw submission text
    pub text: String,
}

impl Submission {
    /// Submission given on the command line
    pub fn inline(index: usize, text: impl Into<String>) -> Self {
        Self {
            source: format!("text #{}", index + 1),
            text: text.into(),
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file of submissions, one per non-blank line
    pub fn read_submissions(path: &Path) -> Result<Vec<Submission>> {
        let content = Self::read_text(path)?;

        Ok(content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| Submission {
                source: format!("{}:{}", path.display(), idx + 1),
                text: line.to_string(),
            })
            .collect())
    }
}
