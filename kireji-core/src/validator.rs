//! Haiku validation orchestration
//!
//! Stages, in order:
//! 1. drop one trailing punctuation character
//! 2. require exactly two commas
//! 3. split into three lines
//! 4. tokenize, filter punctuation, measure and check each line
//!
//! Validation is a pure function of the text and the dictionary. The first
//! failing stage or line decides the rejection.

use crate::config::ValidatorConfig;
use crate::dictionary::{CmuDictionary, PronunciationLookup};
use crate::policy::{HaikuForm, LineRule};
use crate::punctuation::{filter_punctuation, strip_trailing_punctuation};
use crate::syllables::{analyze_tokens, WordSyllables};
use crate::tokenizer::{Tokenizer, TokenizerKind};
use crate::types::SyllableRange;
use crate::verdict::{HaikuVerdict, LineReport, Rejection, StructureError};
use std::fmt;
use std::sync::Arc;

/// Checks submissions against a haiku form
///
/// Cheap to clone; the dictionary is shared.
#[derive(Clone)]
pub struct HaikuValidator {
    lookup: Arc<dyn PronunciationLookup>,
    tokenizer: TokenizerKind,
    form: HaikuForm,
}

impl fmt::Debug for HaikuValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HaikuValidator")
            .field("lookup", &"<dyn PronunciationLookup>")
            .field("tokenizer", &self.tokenizer)
            .field("form", &self.form)
            .finish()
    }
}

impl HaikuValidator {
    /// Validator over `lookup` with the default 5-7-5 form
    pub fn new(lookup: Arc<dyn PronunciationLookup>, tokenizer: TokenizerKind) -> Self {
        Self {
            lookup,
            tokenizer,
            form: HaikuForm::default(),
        }
    }

    /// Create a builder
    pub fn builder() -> HaikuValidatorBuilder {
        HaikuValidatorBuilder::new()
    }

    /// Tokenization strategy in use
    pub fn tokenizer(&self) -> TokenizerKind {
        self.tokenizer
    }

    /// Form in use
    pub fn form(&self) -> &HaikuForm {
        &self.form
    }

    /// Validate a submission
    pub fn validate(&self, text: &str) -> HaikuVerdict {
        let text = strip_trailing_punctuation(text);
        tracing::trace!(text, "punctuation stripped");

        let lines = match split_lines(text) {
            Ok(lines) => lines,
            Err(err) => {
                tracing::debug!(%err, "rejected: malformed structure");
                return err.into();
            }
        };
        tracing::trace!(?lines, "lines split");

        let mut reports = Vec::with_capacity(HaikuForm::LINE_COUNT);
        for (index, (line, rule)) in lines.iter().zip(self.form.lines.iter()).enumerate() {
            let report = self.measure_line(line, *rule);
            let accepted = report.accepted;
            let range = report.range;
            reports.push(report);

            if !accepted {
                let reason = Rejection::SyllableMismatch {
                    line: index + 1,
                    range,
                    target: rule.target,
                    policy: rule.policy,
                };
                tracing::debug!(%reason, "rejected");
                return HaikuVerdict::Rejected {
                    reason,
                    lines: reports,
                };
            }
        }

        HaikuVerdict::Accepted { lines: reports }
    }

    /// Validate and reduce to a boolean
    pub fn is_haiku(&self, text: &str) -> bool {
        self.validate(text).is_accepted()
    }

    /// Validate many independent submissions; output order matches input order
    #[cfg(feature = "parallel")]
    pub fn validate_batch<S>(&self, texts: &[S]) -> Vec<HaikuVerdict>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.validate(text.as_ref()))
            .collect()
    }

    /// Validate many independent submissions; output order matches input order
    #[cfg(not(feature = "parallel"))]
    pub fn validate_batch<S>(&self, texts: &[S]) -> Vec<HaikuVerdict>
    where
        S: AsRef<str> + Sync,
    {
        texts.iter().map(|text| self.validate(text.as_ref())).collect()
    }

    /// Per-word syllable ranges of a single line
    pub fn analyze_line(&self, line: &str) -> Vec<WordSyllables> {
        let tokens = filter_punctuation(self.tokenizer.tokenize(line));
        analyze_tokens(&tokens, self.lookup.as_ref())
    }

    fn measure_line(&self, line: &str, rule: LineRule) -> LineReport {
        let words = self.analyze_line(line);
        let range: SyllableRange = words.iter().map(WordSyllables::contribution).sum();
        let accepted = rule.accepts(range);
        tracing::trace!(line, %range, target = rule.target, accepted, "line validated");

        LineReport {
            text: line.to_string(),
            words,
            range,
            rule,
            accepted,
        }
    }
}

/// Split normalized text into exactly three comma-separated lines
fn split_lines(text: &str) -> Result<Vec<&str>, StructureError> {
    let commas = text.matches(',').count();
    if commas != HaikuForm::SEPARATOR_COUNT {
        return Err(StructureError::WrongCommaCount { found: commas });
    }

    let lines: Vec<&str> = text.split(',').collect();
    // Unreachable while the comma count is enforced above
    if lines.len() != HaikuForm::LINE_COUNT {
        return Err(StructureError::WrongLineCount { found: lines.len() });
    }

    Ok(lines)
}

/// Builder for [`HaikuValidator`]
#[derive(Default)]
pub struct HaikuValidatorBuilder {
    lookup: Option<Arc<dyn PronunciationLookup>>,
    tokenizer: TokenizerKind,
    form: HaikuForm,
}

impl HaikuValidatorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pronunciation dictionary
    pub fn lookup(mut self, lookup: Arc<dyn PronunciationLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Set the tokenization strategy
    pub fn tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the line rules
    pub fn form(mut self, form: HaikuForm) -> Self {
        self.form = form;
        self
    }

    /// Apply tokenizer and form from a configuration
    pub fn config(self, config: &ValidatorConfig) -> Self {
        self.tokenizer(config.tokenizer).form(config.form)
    }

    /// Build the validator, falling back to the bundled dictionary
    pub fn build(self) -> HaikuValidator {
        let lookup: Arc<dyn PronunciationLookup> = match self.lookup {
            Some(lookup) => lookup,
            None => Arc::new(CmuDictionary::bundled()),
        };

        HaikuValidator {
            lookup,
            tokenizer: self.tokenizer,
            form: self.form,
        }
    }
}
