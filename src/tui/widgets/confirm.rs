//! Confirmation modal — yes/no(/cancel) gate drawn over the desk.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::state::{ConfirmKind, ConfirmPrompt};

pub struct ConfirmWidget<'a> {
    prompt: &'a ConfirmPrompt,
}

impl<'a> ConfirmWidget<'a> {
    pub fn new(prompt: &'a ConfirmPrompt) -> Self {
        Self { prompt }
    }

    fn title(&self) -> &'static str {
        match self.prompt.kind {
            ConfirmKind::ClearHistory => " Clear History ",
            ConfirmKind::Exit => " Exit Application ",
        }
    }

    fn choices(&self) -> &'static str {
        match self.prompt.kind {
            ConfirmKind::ClearHistory => "[y]es    [n]o",
            ConfirmKind::Exit => "[y]es    [n]o    [Esc] cancel",
        }
    }
}

/// Centered popup rect of the given size, clamped to the frame.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl<'a> Widget for ConfirmWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 56, 7);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title())
            .style(Style::default().fg(Color::Yellow));

        let lines = vec![
            Line::from(""),
            Line::from(Span::raw(self.prompt.question.clone())),
            Line::from(""),
            Line::from(Span::styled(
                self.choices(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
