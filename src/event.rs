//! Structured outcome events for rule and file processing.
//!
//! Console messages are rendered from these events by the CLI; tests and
//! other front ends inspect the events directly instead of parsing text.

use std::fmt;
use std::path::PathBuf;

/// Outcome of one rule against one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule's pattern matched and the buffer was rewritten.
    Applied { occurrences: usize },
    /// The rule's pattern was absent (or its guard suppressed it).
    Skipped,
}

/// One rule application, labeled for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEvent {
    pub rule: String,
    pub outcome: RuleOutcome,
}

impl RuleEvent {
    pub fn applied(&self) -> bool {
        matches!(self.outcome, RuleOutcome::Applied { .. })
    }
}

impl fmt::Display for RuleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            RuleOutcome::Applied { occurrences } if *occurrences == 1 => {
                write!(f, "{}: applied", self.rule)
            }
            RuleOutcome::Applied { occurrences } => {
                write!(f, "{}: applied ({occurrences} occurrences)", self.rule)
            }
            RuleOutcome::Skipped => write!(f, "{}: skipped", self.rule),
        }
    }
}

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "FileReport should be checked for updated/unchanged/missing"]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was (or, in check mode, would be) written back.
    Updated { events: Vec<RuleEvent> },
    /// Every rule was a no-op; the file was not rewritten.
    Unchanged,
    /// The listed path does not exist; skipped without error.
    Missing,
}

impl FileReport {
    /// Rule events for this file, in rule order. Empty unless the file
    /// changed.
    pub fn events(&self) -> &[RuleEvent] {
        match &self.outcome {
            FileOutcome::Updated { events } => events,
            _ => &[],
        }
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            FileOutcome::Updated { .. } => write!(f, "Updated {}", self.path.display()),
            FileOutcome::Unchanged => {
                write!(f, "No changes needed for {}", self.path.display())
            }
            FileOutcome::Missing => write!(f, "File not found: {}", self.path.display()),
        }
    }
}
