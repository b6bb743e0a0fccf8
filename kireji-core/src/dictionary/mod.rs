//! Pronunciation lookup
//!
//! The validator consults a [`PronunciationLookup`] for every word token.
//! Implementations are immutable once built and are shared across threads
//! behind an `Arc`.

mod cmu;

pub use cmu::CmuDictionary;

use serde::Serialize;

/// One phonetic transcription of a word (ARPABET phonemes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pronunciation {
    phonemes: Vec<String>,
}

impl Pronunciation {
    /// Create a pronunciation from a phoneme sequence
    pub fn new<I, S>(phonemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phonemes: phonemes.into_iter().map(Into::into).collect(),
        }
    }

    /// Phonemes in order
    pub fn phonemes(&self) -> &[String] {
        &self.phonemes
    }

    /// Number of phonemes carrying a stress marker
    ///
    /// Stressed vowels end in a digit (`AH0`, `EY1`, `IY2`); every one of
    /// them is a syllable nucleus.
    pub fn syllable_count(&self) -> u32 {
        self.phonemes
            .iter()
            .filter(|phoneme| phoneme.ends_with(|c: char| c.is_ascii_digit()))
            .count() as u32
    }
}

/// Read-only word-to-pronunciation mapping
pub trait PronunciationLookup: Send + Sync {
    /// All known pronunciations of `word`, empty when the word is unknown
    ///
    /// Lookup is case-insensitive.
    fn variants(&self, word: &str) -> &[Pronunciation];

    /// Whether the dictionary knows `word` at all
    fn contains(&self, word: &str) -> bool {
        !self.variants(word).is_empty()
    }
}

impl<T: PronunciationLookup + ?Sized> PronunciationLookup for &T {
    fn variants(&self, word: &str) -> &[Pronunciation] {
        (**self).variants(word)
    }
}
