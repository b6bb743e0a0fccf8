//! Post submission gate
//!
//! A blog post is accepted when it has a title, a body, and the body is a
//! haiku. Checks run in that order and the first failure is reported.

use crate::validator::HaikuValidator;
use crate::verdict::{HaikuVerdict, NON_HAIKU_MESSAGE};
use thiserror::Error;

/// Reason a post submission is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Empty title
    #[error("Title is required.")]
    MissingTitle,

    /// Empty body
    #[error("Body is required.")]
    MissingBody,

    /// Body failed haiku validation
    #[error("{}", NON_HAIKU_MESSAGE)]
    NotAHaiku(HaikuVerdict),
}

/// Check a post's title and body
pub fn validate_submission(
    title: &str,
    body: &str,
    validator: &HaikuValidator,
) -> Result<HaikuVerdict, SubmissionError> {
    if title.is_empty() {
        return Err(SubmissionError::MissingTitle);
    }
    if body.is_empty() {
        return Err(SubmissionError::MissingBody);
    }

    let verdict = validator.validate(body);
    if verdict.is_accepted() {
        Ok(verdict)
    } else {
        Err(SubmissionError::NotAHaiku(verdict))
    }
}
