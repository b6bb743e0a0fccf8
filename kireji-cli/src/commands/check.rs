//! Check command implementation

use super::TokenizerArg;
use crate::config::CliConfig;
use crate::dictionary_source::DictionarySource;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, Submission};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use kireji_core::{HaikuValidator, HaikuVerdict};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Submission text (repeatable)
    #[arg(short, long, value_name = "TEXT", required_unless_present = "input")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob); one submission per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the configured format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only print the verdict line per submission (text format)
    #[arg(short, long)]
    pub summary: bool,

    /// Tokenization strategy [default: linguistic, or the configured one]
    #[arg(short = 'k', long, value_enum)]
    pub tokenizer: Option<TokenizerArg>,

    /// CMU-format pronunciation dictionary (default: bundled lexicon)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Validate submissions in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Verdict per submission with line details
    Text,
    /// JSON array of verdicts
    Json,
    /// Markdown task list
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{s}'")))
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.verbose, self.quiet);

        log::info!("Starting haiku check");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let validator = self.build_validator(&config)?;
        let submissions = self.collect_submissions()?;
        log::info!(
            "Checking {} submissions ({} tokenizer, {} form)",
            submissions.len(),
            validator.tokenizer(),
            validator.form().pattern()
        );

        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };
        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;

        let verdicts = self.validate_all(&validator, &submissions);

        let mut rejected = 0;
        for (submission, verdict) in submissions.iter().zip(&verdicts) {
            if let Some(reason) = verdict.reason() {
                rejected += 1;
                log::info!("{} rejected: {}", submission.source, reason);
            }
            formatter.format_verdict(submission, verdict)?;
        }
        formatter.finish()?;

        if rejected > 0 {
            return Err(CliError::Rejected {
                rejected,
                total: submissions.len(),
            }
            .into());
        }

        Ok(())
    }

    /// Flags override the config file, which overrides defaults
    fn build_validator(&self, config: &CliConfig) -> Result<HaikuValidator> {
        let tokenizer = self
            .tokenizer
            .map(Into::into)
            .unwrap_or(config.validation.tokenizer);
        let source =
            DictionarySource::resolve(self.dictionary.clone(), config.validation.dictionary.clone());

        Ok(HaikuValidator::builder()
            .config(&config.validator_config())
            .tokenizer(tokenizer)
            .lookup(source.load()?)
            .build())
    }

    fn collect_submissions(&self) -> Result<Vec<Submission>> {
        let mut submissions: Vec<Submission> = self
            .text
            .iter()
            .enumerate()
            .map(|(idx, text)| Submission::inline(idx, text.as_str()))
            .collect();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} files to read", files.len());
            for file in &files {
                submissions.extend(FileReader::read_submissions(file)?);
            }
        }

        if submissions.is_empty() {
            anyhow::bail!("No submissions to check");
        }

        Ok(submissions)
    }

    fn validate_all(
        &self,
        validator: &HaikuValidator,
        submissions: &[Submission],
    ) -> Vec<HaikuVerdict> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_submissions(submissions.len() as u64);

        let verdicts = if self.parallel {
            let texts: Vec<&str> = submissions.iter().map(|s| s.text.as_str()).collect();
            let verdicts = validator.validate_batch(&texts);
            progress.checked("batch", submissions.len() as u64);
            verdicts
        } else {
            submissions
                .iter()
                .map(|submission| {
                    let verdict = validator.validate(&submission.text);
                    progress.checked(&submission.source, 1);
                    verdict
                })
                .collect()
        };

        progress.finish();
        verdicts
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text if self.summary => Box::new(TextFormatter::new(writer).summary_only()),
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }
}
