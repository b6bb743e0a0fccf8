//! Output formatting module

use crate::input::Submission;
use anyhow::Result;
use kireji_core::{HaikuVerdict, WordSyllables};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the verdict for a single submission
    fn format_verdict(&mut self, submission: &Submission, verdict: &HaikuVerdict) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// `word(n)`, `word(lo-hi)` or `word(?)` for a dictionary miss
pub(crate) fn describe_word(word: &WordSyllables) -> String {
    match word.range {
        Some(range) => format!("{}({})", word.token, range),
        None => format!("{}(?)", word.token),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
