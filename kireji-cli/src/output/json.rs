//! JSON output formatter

use super::OutputFormatter;
use crate::input::Submission;
use anyhow::Result;
use kireji_core::HaikuVerdict;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs verdicts as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<VerdictData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct VerdictData {
    /// Where the submission came from
    pub source: String,
    /// The submission text
    pub text: String,
    /// Whether it is a haiku
    pub accepted: bool,
    /// Message shown to the author on rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// Full verdict with line reports
    pub detail: HaikuVerdict,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_verdict(&mut self, submission: &Submission, verdict: &HaikuVerdict) -> Result<()> {
        self.results.push(VerdictData {
            source: submission.source.clone(),
            text: submission.text.clone(),
            accepted: verdict.is_accepted(),
            message: verdict.user_message(),
            detail: verdict.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
