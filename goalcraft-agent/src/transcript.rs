//! Labeled stage output.

use serde::{Serialize, Serializer};
use std::fmt;

/// Which stage produced an entry. Step indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Plan,
    Execute(usize),
    Reflection(usize),
    Status,
    FinalAnswer,
}

impl Stage {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Plan => write!(f, "PLAN"),
            Stage::Execute(i) => write!(f, "EXECUTE STEP {}", i),
            Stage::Reflection(i) => write!(f, "REFLECTION {}", i),
            Stage::Status => write!(f, "STATUS"),
            Stage::FinalAnswer => write!(f, "FINAL ANSWER"),
        }
    }
}

/// One stage's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    #[serde(rename = "label", serialize_with = "serialize_stage")]
    pub stage: Stage,
    pub text: String,
}

impl LogEntry {
    pub fn new(stage: Stage, text: impl Into<String>) -> Self {
        Self {
            stage,
            text: text.into(),
        }
    }

    pub fn label(&self) -> String {
        self.stage.label()
    }
}

fn serialize_stage<S: Serializer>(stage: &Stage, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(stage)
}

/// Every entry of a run, in the order it was produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<LogEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::label).collect()
    }

    /// Text of the synthesis stage, once the run has reached it
    pub fn final_answer(&self) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.stage == Stage::FinalAnswer)
            .map(|e| e.text.as_str())
    }

    /// Number of steps that were executed
    pub fn executed_steps(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.stage, Stage::Execute(_)))
            .count()
    }

    pub fn stopped_early(&self) -> bool {
        self.entries.iter().any(|e| e.stage == Stage::Status)
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
