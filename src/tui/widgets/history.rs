//! History pane — scrollable `[HH:MM:SS] headline` lines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::schema::headline::HistoryEntry;

pub struct HistoryWidget<'a> {
    entries: &'a [HistoryEntry],
    /// Lines scrolled up from the bottom; zero follows the tail.
    scroll: usize,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(entries: &'a [HistoryEntry], scroll: usize) -> Self {
        Self { entries, scroll }
    }

    /// The slice of entries visible in a pane showing `visible` lines.
    fn window(&self, visible: usize) -> &'a [HistoryEntry] {
        if visible == 0 || self.entries.is_empty() {
            return &[];
        }
        // Overscroll pins the window to the oldest entries.
        let start = self.entries.len().saturating_sub(visible + self.scroll);
        let end = (start + visible).min(self.entries.len());
        &self.entries[start..end]
    }
}

impl<'a> Widget for HistoryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" 📜 Headlines History ({}) ", self.entries.len());
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner_height = area.height.saturating_sub(2) as usize;

        let lines: Vec<Line> = if self.entries.is_empty() {
            vec![Line::from(Span::styled(
                "No headlines yet.",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.window(inner_height)
                .iter()
                .map(|entry| {
                    Line::from(vec![
                        Span::styled(
                            format!("[{}] ", entry.stamp()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(entry.text.clone()),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
