//! Status bar — session stats, auto-generate state, key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget {
    stats: String,
    auto_enabled: bool,
    interval_secs: f64,
    confirm_open: bool,
}

impl StatusBarWidget {
    pub fn new(stats: String, auto_enabled: bool, interval_secs: f64, confirm_open: bool) -> Self {
        Self {
            stats,
            auto_enabled,
            interval_secs,
            confirm_open,
        }
    }

    fn auto_indicator(&self) -> (String, Color) {
        if self.auto_enabled {
            (format!(" AUTO {:.1}s ", self.interval_secs), Color::Green)
        } else {
            (format!(" auto off ({:.1}s) ", self.interval_secs), Color::DarkGray)
        }
    }

    fn hints(&self) -> &'static str {
        if self.confirm_open {
            "y:confirm  n:deny  Esc:cancel"
        } else {
            "g:generate  a:auto  +/-:interval  c:clear  j/k:scroll  q:quit"
        }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (auto_text, auto_color) = self.auto_indicator();
        let auto_span = Span::styled(
            auto_text.clone(),
            Style::default()
                .fg(Color::Black)
                .bg(auto_color)
                .add_modifier(Modifier::BOLD),
        );
        let stats_span = Span::styled(
            format!(" {} ", self.stats),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );

        let left_line = Line::from(vec![auto_span, stats_span]);
        let left_width = (auto_text.len() + self.stats.len() + 2) as u16;
        buf.set_line(area.x, area.y, &left_line, left_width.min(area.width));

        // Key hints, right-aligned
        let hints = self.hints();
        let hints_width = hints.len() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if hints_x > area.x + left_width {
            let hints_line = Line::from(Span::styled(
                hints,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(hints_x, area.y, &hints_line, hints_width + 1);
        }
    }
}
