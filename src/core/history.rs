/// Session history — ordered log of generated headlines.

use crate::schema::headline::HistoryEntry;

/// Append-only log of generated headlines, in generation order.
/// The only mutations are `append` and en-masse `clear`; the user
/// confirmation gate in front of `clear` belongs to the UI layer.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Remove all entries. Does not touch the session counter, which
    /// lives on the generator.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
