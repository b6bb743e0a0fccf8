//! Markdown output formatter

use super::OutputFormatter;
use crate::input::Submission;
use anyhow::Result;
use kireji_core::HaikuVerdict;
use std::io::Write;

/// Markdown formatter - outputs verdicts as a task list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    accepted: usize,
    total: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            accepted: 0,
            total: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_verdict(&mut self, submission: &Submission, verdict: &HaikuVerdict) -> Result<()> {
        self.total += 1;
        match verdict.reason() {
            None => {
                self.accepted += 1;
                writeln!(self.writer, "- [x] `{}`: {}", submission.source, submission.text.trim())?;
                for line in verdict.lines() {
                    writeln!(self.writer, "  > {}", line.text.trim())?;
                }
            }
            Some(reason) => {
                writeln!(
                    self.writer,
                    "- [ ] `{}`: {} (*{}*)",
                    submission.source,
                    submission.text.trim(),
                    reason
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Accepted: {} of {}*", self.accepted, self.total)?;
        self.writer.flush()?;
        Ok(())
    }
}
