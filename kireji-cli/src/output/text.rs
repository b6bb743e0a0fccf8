//! Plain text output formatter

use super::{describe_word, OutputFormatter};
use crate::input::Submission;
use anyhow::Result;
use kireji_core::HaikuVerdict;
use std::io::Write;

/// Plain text formatter - one verdict line per submission, with line details
pub struct TextFormatter<W: Write> {
    writer: W,
    detailed: bool,
    accepted: usize,
    total: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            detailed: true,
            accepted: 0,
            total: 0,
        }
    }

    /// Only print the verdict line for each submission
    pub fn summary_only(mut self) -> Self {
        self.detailed = false;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_verdict(&mut self, submission: &Submission, verdict: &HaikuVerdict) -> Result<()> {
        self.total += 1;
        match verdict.reason() {
            None => {
                self.accepted += 1;
                writeln!(self.writer, "ACCEPTED {}: {}", submission.source, submission.text.trim())?;
            }
            Some(reason) => {
                writeln!(self.writer, "REJECTED {}: {}", submission.source, submission.text.trim())?;
                writeln!(self.writer, "  reason: {reason}")?;
            }
        }

        if self.detailed {
            for (idx, line) in verdict.lines().iter().enumerate() {
                let words: Vec<String> = line.words.iter().map(describe_word).collect();
                writeln!(
                    self.writer,
                    "  line {}: {} syllables (needs {}, {}) [{}]",
                    idx + 1,
                    line.range,
                    line.rule.target,
                    line.rule.policy,
                    words.join(" ")
                )?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{} of {} accepted", self.accepted, self.total)?;
        self.writer.flush()?;
        Ok(())
    }
}
