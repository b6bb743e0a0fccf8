//! Syllable range calculation
//!
//! A word's range spans the smallest and largest syllable counts among its
//! pronunciations; a line's range is the component-wise sum over its words.

use crate::dictionary::PronunciationLookup;
use crate::types::SyllableRange;
use serde::Serialize;

/// Syllable range of a single token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSyllables {
    /// The token as it appeared in the line
    pub token: String,
    /// Range across pronunciations, `None` when the dictionary misses
    pub range: Option<SyllableRange>,
}

impl WordSyllables {
    /// Contribution of this token to the line total
    pub fn contribution(&self) -> SyllableRange {
        self.range.unwrap_or_else(unknown_word_range)
    }
}

/// Contribution of a word the dictionary does not know
///
/// Unknown words are invisible to counting rather than rejecting the line.
#[inline]
pub fn unknown_word_range() -> SyllableRange {
    SyllableRange::ZERO
}

/// Range of one token, `None` if the dictionary has no entry for it
pub fn word_range<L>(token: &str, lookup: &L) -> Option<SyllableRange>
where
    L: PronunciationLookup + ?Sized,
{
    let word = token.to_lowercase();
    let range = SyllableRange::from_counts(
        lookup
            .variants(&word)
            .iter()
            .map(|pronunciation| pronunciation.syllable_count()),
    );

    match range {
        Some(range) => tracing::debug!(word = %word, low = range.low(), high = range.high(), "syllables"),
        None => tracing::debug!(word = %word, "not in dictionary, counted as zero"),
    }

    range
}

/// Per-token breakdown of a line
pub fn analyze_tokens<L>(tokens: &[&str], lookup: &L) -> Vec<WordSyllables>
where
    L: PronunciationLookup + ?Sized,
{
    tokens
        .iter()
        .map(|token| WordSyllables {
            token: (*token).to_string(),
            range: word_range(token, lookup),
        })
        .collect()
}

/// Total range of a token sequence
pub fn line_range<L>(tokens: &[&str], lookup: &L) -> SyllableRange
where
    L: PronunciationLookup + ?Sized,
{
    tokens
        .iter()
        .map(|token| word_range(token, lookup).unwrap_or_else(unknown_word_range))
        .sum()
}
