//! Haiku validation over pronunciation-dictionary syllable ranges
//!
//! A submission is a single string whose three "lines" are separated by
//! commas. Each line is tokenized, stripped of punctuation-only tokens and
//! measured against a pronunciation dictionary. Because a word may have
//! several accepted pronunciations, a line does not have one syllable count
//! but a range of achievable counts, and each line position applies its own
//! acceptance policy to that range.
//!
//! # Architecture
//!
//! - **Dictionary**: read-only pronunciation lookup, shared across calls
//! - **Tokenizer / punctuation**: turn a line into countable word tokens
//! - **Syllables**: fold per-word ranges into a line range
//! - **Policy**: per-line acceptance rules (exact vs. containment)
//! - **Validator**: normalization, comma splitting and the final verdict
//!
//! # Example
//!
//! ```rust
//! use kireji_core::{CmuDictionary, HaikuValidator, TokenizerKind};
//! use std::sync::Arc;
//!
//! let validator = HaikuValidator::builder()
//!     .lookup(Arc::new(CmuDictionary::bundled()))
//!     .tokenizer(TokenizerKind::Linguistic)
//!     .build();
//!
//! let verdict = validator.validate("an old silent pond, a little frog jumps into, the sound of water.");
//! assert!(verdict.is_accepted());
//!
//! let verdict = validator.validate("every silent pond, a little frog jumps into, the sound of water.");
//! assert!(!verdict.is_accepted());
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod policy;
pub mod punctuation;
pub mod submission;
pub mod syllables;
pub mod tokenizer;
pub mod types;
pub mod validator;
pub mod verdict;

pub use config::ValidatorConfig;
pub use dictionary::{CmuDictionary, Pronunciation, PronunciationLookup};
pub use error::{KirejiError, Result};
pub use policy::{HaikuForm, LinePolicy, LineRule};
pub use submission::{validate_submission, SubmissionError};
pub use syllables::{line_range, word_range, WordSyllables};
pub use tokenizer::{LinguisticTokenizer, Tokenizer, TokenizerKind, WhitespaceTokenizer};
pub use types::SyllableRange;
pub use validator::{HaikuValidator, HaikuValidatorBuilder};
pub use verdict::{HaikuVerdict, LineReport, Rejection, StructureError, NON_HAIKU_MESSAGE};
