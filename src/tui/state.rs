//! Display state owned by the foreground loop.

use crate::schema::headline::Headline;

/// Which confirmation modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Yes/no gate in front of clearing the history log.
    ClearHistory,
    /// Yes/no/cancel gate in front of quitting a non-empty session.
    Exit,
}

/// A pending confirmation prompt shown as a modal over the desk.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub kind: ConfirmKind,
    pub question: String,
}

/// Mutable display state. The foreground loop is its only writer.
#[derive(Debug, Default)]
pub struct DeskState {
    /// The most recently generated headline, if any.
    pub current: Option<Headline>,
    /// Lines scrolled up from the bottom of the history pane.
    /// Zero means the newest entry is visible.
    pub history_scroll: usize,
    pub confirm: Option<ConfirmPrompt>,
    pub should_quit: bool,
}

impl DeskState {
    pub fn scroll_up(&mut self, lines: usize, history_len: usize) {
        let max = history_len.saturating_sub(1);
        self.history_scroll = (self.history_scroll + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.history_scroll = self.history_scroll.saturating_sub(lines);
    }

    /// Snap the history pane back to the newest entry.
    pub fn follow_tail(&mut self) {
        self.history_scroll = 0;
    }
}
