//! Syllables command implementation

use super::TokenizerArg;
use crate::dictionary_source::DictionarySource;
use anyhow::Result;
use clap::Args;
use kireji_core::{HaikuValidator, SyllableRange, WordSyllables};
use std::path::PathBuf;

/// Arguments for the syllables command
#[derive(Debug, Args)]
pub struct SyllablesArgs {
    /// Line of text to measure
    #[arg(value_name = "LINE")]
    pub line: String,

    /// Tokenization strategy
    #[arg(short = 'k', long, value_enum, default_value = "linguistic")]
    pub tokenizer: TokenizerArg,

    /// CMU-format pronunciation dictionary (default: bundled lexicon)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SyllablesArgs {
    /// Execute the syllables command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.verbose, false);

        let lookup = DictionarySource::resolve(self.dictionary.clone(), None).load()?;
        let validator = HaikuValidator::new(lookup, self.tokenizer.into());

        print!("{}", render(&validator.analyze_line(&self.line)));
        Ok(())
    }
}

fn render(words: &[WordSyllables]) -> String {
    let mut out = String::new();
    for word in words {
        let count = match word.range {
            Some(range) => range.to_string(),
            None => "unknown".to_string(),
        };
        out.push_str(&format!("  {:<16} {}\n", word.token, count));
    }

    let total: SyllableRange = words.iter().map(WordSyllables::contribution).sum();
    out.push_str(&format!("Total: {total}\n"));
    out
}
