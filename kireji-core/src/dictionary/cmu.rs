use super::{Pronunciation, PronunciationLookup};
use crate::error::{KirejiError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Subset of the CMU Pronouncing Dictionary shipped with the crate
const BUNDLED_LEXICON: &str = include_str!("../../data/cmudict-sample.dict");

static BUNDLED: OnceLock<CmuDictionary> = OnceLock::new();

/// Dictionary in the CMU Pronouncing Dictionary text format
///
/// ```text
/// ;;; comment
/// WATER  W AO1 T ER0
/// WATER(2)  W AA1 T ER0
/// ```
///
/// Numbered entries are alternate pronunciations of the same word. Keys are
/// stored lowercased; variant order follows the source.
#[derive(Debug, Clone, Default)]
pub struct CmuDictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl CmuDictionary {
    /// Parse dictionary text
    pub fn from_cmu_str(data: &str) -> Result<Self> {
        let mut entries: HashMap<String, Vec<Pronunciation>> = HashMap::new();

        for (idx, line) in data.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(";;;") {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            // Non-empty after trim, so there is always a first column
            let raw_word = parts.next().unwrap_or_default();
            let word = trim_variant(raw_word).to_lowercase();
            if word.is_empty() {
                return Err(KirejiError::Dictionary {
                    line: idx + 1,
                    reason: format!("empty headword in {raw_word:?}"),
                });
            }

            let phonemes: Vec<&str> = parts.collect();
            if phonemes.is_empty() {
                return Err(KirejiError::Dictionary {
                    line: idx + 1,
                    reason: format!("missing phonemes for {raw_word}"),
                });
            }

            entries
                .entry(word)
                .or_default()
                .push(Pronunciation::new(phonemes));
        }

        if entries.is_empty() {
            return Err(KirejiError::EmptyDictionary);
        }

        tracing::debug!(words = entries.len(), "loaded pronunciation dictionary");
        Ok(Self { entries })
    }

    /// Load a dictionary file such as `cmudict-0.7b` or `cmudict.dict`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        // cmudict-0.7b is Latin-1; a handful of entries are not valid UTF-8
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        tracing::info!(path = %path.display(), "reading pronunciation dictionary");
        Self::from_cmu_str(&text)
    }

    /// Process-wide instance built from the bundled lexicon
    pub fn bundled() -> &'static CmuDictionary {
        BUNDLED.get_or_init(|| {
            CmuDictionary::from_cmu_str(BUNDLED_LEXICON)
                .expect("Failed to load bundled pronunciation lexicon")
        })
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of pronunciations across all words
    pub fn pronunciation_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl PronunciationLookup for CmuDictionary {
    fn variants(&self, word: &str) -> &[Pronunciation] {
        let key = word.to_lowercase();
        self.entries.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// `WORD(2)` -> `WORD`
fn trim_variant(raw_word: &str) -> &str {
    match raw_word.split_once('(') {
        Some((base, rest)) if rest.ends_with(')') => base,
        _ => raw_word,
    }
}
