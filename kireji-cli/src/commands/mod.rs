//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use kireji_core::TokenizerKind;

pub mod check;
pub mod generate_config;
pub mod syllables;
pub mod validate_dictionary;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether submissions are haiku
    Check(check::CheckArgs),

    /// Show per-word syllable ranges for a single line
    Syllables(syllables::SyllablesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a CMU-format pronunciation dictionary
    ValidateDictionary(validate_dictionary::ValidateDictionaryArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::Syllables(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::ValidateDictionary(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available tokenizers
    Tokenizers,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Tokenizers => {
                out.push_str("Available tokenizers:\n");
                for kind in TokenizerKind::ALL {
                    let marker = if kind == TokenizerKind::default() {
                        " (default)"
                    } else {
                        ""
                    };
                    out.push_str(&format!(
                        "  {:<12} {}{}\n",
                        kind.as_str(),
                        kind.description(),
                        marker
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in check::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                        out.push_str(&format!("  {:<12} {}\n", value.get_name(), help));
                    }
                }
            }
        }
        out
    }
}

/// Tokenizer choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenizerArg {
    /// Split on whitespace only
    Whitespace,
    /// Separate words from punctuation
    Linguistic,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(arg: TokenizerArg) -> Self {
        match arg {
            TokenizerArg::Whitespace => TokenizerKind::Whitespace,
            TokenizerArg::Linguistic => TokenizerKind::Linguistic,
        }
    }
}
