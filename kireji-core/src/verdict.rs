//! Validation outcome

use crate::policy::{LinePolicy, LineRule};
use crate::syllables::WordSyllables;
use crate::types::SyllableRange;
use serde::Serialize;
use thiserror::Error;

/// Message shown to a user whose submission is not a haiku
pub const NON_HAIKU_MESSAGE: &str = "Non-haiku detected! Are there 3 'lines' separated by commas, \
the first being 5 syllables, the second being 7, and the third being 5. \
The words must also be real...";

/// The submission does not have the shape of three comma-separated lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum StructureError {
    /// Comma count other than two
    #[error("expected 2 commas, found {found}")]
    WrongCommaCount {
        /// Commas present after normalization
        found: usize,
    },

    /// Splitting did not produce three lines
    #[error("expected 3 lines, found {found}")]
    WrongLineCount {
        /// Segments produced by the split
        found: usize,
    },
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Not three comma-separated lines
    #[error("malformed structure: {0}")]
    MalformedStructure(StructureError),

    /// A line's syllable range fails its rule
    #[error("line {line} has {range} syllables, needs {target} ({policy})")]
    SyllableMismatch {
        /// 1-based line number
        line: usize,
        /// Computed range for the line
        range: SyllableRange,
        /// Required count
        target: u32,
        /// Policy that was applied
        policy: LinePolicy,
    },
}

/// Measurement of one line against its rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// Line text as split from the submission
    pub text: String,
    /// Tokens left after punctuation filtering
    pub words: Vec<WordSyllables>,
    /// Total syllable range of the line
    pub range: SyllableRange,
    /// Rule the line was checked against
    pub rule: LineRule,
    /// Whether the rule accepted the range
    pub accepted: bool,
}

impl LineReport {
    /// Tokens the dictionary did not know
    pub fn unknown_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(|w| w.range.is_none())
            .map(|w| w.token.as_str())
    }
}

/// Result of validating a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum HaikuVerdict {
    /// All three lines pass their rules
    Accepted {
        /// Reports in line order
        lines: Vec<LineReport>,
    },
    /// The submission is not a haiku
    Rejected {
        /// First failure found
        reason: Rejection,
        /// Reports for the lines that were measured, in line order
        lines: Vec<LineReport>,
    },
}

impl HaikuVerdict {
    /// Whether the submission was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, HaikuVerdict::Accepted { .. })
    }

    /// Rejection reason, if any
    pub fn reason(&self) -> Option<&Rejection> {
        match self {
            HaikuVerdict::Accepted { .. } => None,
            HaikuVerdict::Rejected { reason, .. } => Some(reason),
        }
    }

    /// Line reports produced before the verdict was reached
    pub fn lines(&self) -> &[LineReport] {
        match self {
            HaikuVerdict::Accepted { lines } | HaikuVerdict::Rejected { lines, .. } => lines,
        }
    }

    /// User-facing message for a rejection
    pub fn user_message(&self) -> Option<&'static str> {
        (!self.is_accepted()).then_some(NON_HAIKU_MESSAGE)
    }
}

impl From<StructureError> for HaikuVerdict {
    fn from(err: StructureError) -> Self {
        HaikuVerdict::Rejected {
            reason: Rejection::MalformedStructure(err),
            lines: Vec::new(),
        }
    }
}
