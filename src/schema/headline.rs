/// Headline records — the engine's output types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The category a headline subject is drawn from.
///
/// Categories carry equal weight during selection regardless of pool
/// size, so every kind appears in roughly a third of all headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    Celebrity,
    Fictional,
    Concept,
}

impl SubjectKind {
    /// All kinds, in selection order.
    pub const ALL: [SubjectKind; 3] = [
        SubjectKind::Celebrity,
        SubjectKind::Fictional,
        SubjectKind::Concept,
    ];

    /// Returns the display label for this kind (e.g., "celebrity").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Celebrity => "celebrity",
            Self::Fictional => "fictional",
            Self::Concept => "concept",
        }
    }
}

/// A single generated headline and the components it was drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    pub kind: SubjectKind,
    pub subject: String,
    pub action: String,
    pub place: String,
    /// The fully interpolated headline string.
    pub text: String,
}

/// An immutable history record: when a headline was produced, and what
/// it said. Entries are only ever appended or cleared en masse.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current wall-clock time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            at: Local::now(),
            text: text.into(),
        }
    }

    /// Second-precision timestamp, as shown in the history pane.
    pub fn stamp(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }

    /// The full `[HH:MM:SS] text` line rendered in the history log.
    pub fn display_line(&self) -> String {
        format!("[{}] {}", self.stamp(), self.text)
    }
}
