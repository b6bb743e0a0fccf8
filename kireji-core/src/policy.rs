//! Per-line acceptance policies
//!
//! The default form mixes two policies: the outer lines must collapse to
//! exactly five syllables, the middle line only needs seven to be reachable.
//! The asymmetry is long-standing behavior and is kept as is.

use crate::types::SyllableRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a line's syllable range is compared with its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// `low >= target && high <= target`: every pronunciation must hit the target
    Exact,
    /// `low <= target && high >= target`: some pronunciation must hit the target
    Containment,
}

impl LinePolicy {
    /// Whether `range` satisfies this policy for `target`
    pub fn accepts(&self, range: SyllableRange, target: u32) -> bool {
        match self {
            LinePolicy::Exact => range.low() >= target && range.high() <= target,
            LinePolicy::Containment => range.low() <= target && range.high() >= target,
        }
    }
}

impl fmt::Display for LinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinePolicy::Exact => write!(f, "exact"),
            LinePolicy::Containment => write!(f, "containment"),
        }
    }
}

/// Target and policy for one line position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRule {
    /// Required syllable count
    pub target: u32,
    /// Comparison applied to the computed range
    pub policy: LinePolicy,
}

impl LineRule {
    /// Create a rule
    pub const fn new(target: u32, policy: LinePolicy) -> Self {
        Self { target, policy }
    }

    /// Whether `range` passes this rule
    pub fn accepts(&self, range: SyllableRange) -> bool {
        self.policy.accepts(range, self.target)
    }
}

/// Rules for the three lines of a haiku
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaikuForm {
    /// Rules in line order
    pub lines: [LineRule; 3],
}

impl HaikuForm {
    /// Number of lines in a submission
    pub const LINE_COUNT: usize = 3;

    /// Number of commas separating the lines
    pub const SEPARATOR_COUNT: usize = Self::LINE_COUNT - 1;

    /// Rule for the 0-based line index
    pub fn rule(&self, index: usize) -> Option<&LineRule> {
        self.lines.get(index)
    }

    /// Targets in line order, e.g. `5-7-5`
    pub fn pattern(&self) -> String {
        self.lines
            .iter()
            .map(|rule| rule.target.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl Default for HaikuForm {
    fn default() -> Self {
        Self {
            lines: [
                LineRule::new(5, LinePolicy::Exact),
                LineRule::new(7, LinePolicy::Containment),
                LineRule::new(5, LinePolicy::Exact),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(low: u32, high: u32) -> SyllableRange {
        SyllableRange::new(low, high).unwrap()
    }

    #[test]
    fn test_exact_requires_collapsed_range() {
        assert!(LinePolicy::Exact.accepts(range(5, 5), 5));
        assert!(!LinePolicy::Exact.accepts(range(5, 6), 5));
        assert!(!LinePolicy::Exact.accepts(range(4, 5), 5));
        assert!(!LinePolicy::Exact.accepts(range(4, 4), 5));
    }

    #[test]
    fn test_containment_tolerates_ambiguity() {
        assert!(LinePolicy::Containment.accepts(range(6, 8), 7));
        assert!(LinePolicy::Containment.accepts(range(7, 7), 7));
        assert!(LinePolicy::Containment.accepts(range(6, 7), 7));
        assert!(!LinePolicy::Containment.accepts(range(8, 9), 7));
        assert!(!LinePolicy::Containment.accepts(range(5, 6), 7));
    }

    #[test]
    fn test_zero_range() {
        assert!(LinePolicy::Exact.accepts(SyllableRange::ZERO, 0));
        assert!(!LinePolicy::Exact.accepts(SyllableRange::ZERO, 5));
        assert!(!LinePolicy::Containment.accepts(SyllableRange::ZERO, 7));
    }

    #[test]
    fn test_default_form_is_asymmetric_575() {
        let form = HaikuForm::default();
        assert_eq!(form.pattern(), "5-7-5");
        assert_eq!(form.lines[0].policy, LinePolicy::Exact);
        assert_eq!(form.lines[1].policy, LinePolicy::Containment);
        assert_eq!(form.lines[2].policy, LinePolicy::Exact);
        assert!(form.rule(3).is_none());
    }

    #[test]
    fn test_form_deserializes_from_toml() {
        let form: HaikuForm = toml::from_str(
            r#"
            lines = [
                { target = 5, policy = "containment" },
                { target = 7, policy = "containment" },
                { target = 5, policy = "containment" },
            ]
            "#,
        )
        .unwrap();
        assert!(form.lines.iter().all(|r| r.policy == LinePolicy::Containment));
    }
}
