//! Line tokenization strategies
//!
//! Two strategies exist and they disagree on purpose: the whitespace
//! tokenizer leaves punctuation glued to words (`"well,"`), the linguistic
//! tokenizer splits it off (`"well"`, `","`). Glued punctuation makes a word
//! miss the dictionary, so the choice changes verdicts.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Word runs may contain inner apostrophes (`don't`, `o'clock`); everything
/// else that is neither a letter, a digit nor whitespace forms its own run.
const LINGUISTIC_PATTERN: &str = r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]+";

static LINGUISTIC_REGEX: OnceLock<Regex> = OnceLock::new();

/// Splits one line into ordered tokens
pub trait Tokenizer: Send + Sync {
    /// Tokenize `line`; tokens borrow from the input
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

/// Split on runs of whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split_whitespace().collect()
    }
}

/// Keep contractions whole, split punctuation into separate tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct LinguisticTokenizer;

impl LinguisticTokenizer {
    fn regex() -> &'static Regex {
        LINGUISTIC_REGEX
            .get_or_init(|| Regex::new(LINGUISTIC_PATTERN).expect("tokenizer pattern is valid"))
    }
}

impl Tokenizer for LinguisticTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        Self::regex().find_iter(line).map(|m| m.as_str()).collect()
    }
}

/// Selectable tokenization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// [`WhitespaceTokenizer`]
    Whitespace,
    /// [`LinguisticTokenizer`]
    #[default]
    Linguistic,
}

impl TokenizerKind {
    /// All strategies, in display order
    pub const ALL: [TokenizerKind; 2] = [TokenizerKind::Whitespace, TokenizerKind::Linguistic];

    /// Configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerKind::Whitespace => "whitespace",
            TokenizerKind::Linguistic => "linguistic",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            TokenizerKind::Whitespace => "split on whitespace; punctuation stays attached to words",
            TokenizerKind::Linguistic => "split punctuation from words; contractions stay whole",
        }
    }
}

impl Tokenizer for TokenizerKind {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            TokenizerKind::Whitespace => WhitespaceTokenizer.tokenize(line),
            TokenizerKind::Linguistic => LinguisticTokenizer.tokenize(line),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whitespace" => Ok(TokenizerKind::Whitespace),
            "linguistic" => Ok(TokenizerKind::Linguistic),
            other => Err(format!("unknown tokenizer: {other}")),
        }
    }
}
