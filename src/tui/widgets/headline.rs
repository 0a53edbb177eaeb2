//! Headline panel — the most recently generated headline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::schema::headline::Headline;

pub struct HeadlineWidget<'a> {
    current: Option<&'a Headline>,
}

impl<'a> HeadlineWidget<'a> {
    pub fn new(current: Option<&'a Headline>) -> Self {
        Self { current }
    }
}

impl<'a> Widget for HeadlineWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Latest Satirical Headline ");

        let content = match self.current {
            Some(headline) => Line::from(Span::styled(
                headline.text.clone(),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "Press 'g' to generate your first satirical headline.",
                Style::default().fg(Color::DarkGray),
            )),
        };

        Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
