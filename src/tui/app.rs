//! Desk application — event loop and key handling.
//!
//! Architecture:
//! ```text
//! DeskApp (select! loop)               timer task (tokio::spawn)
//!   ├─ crossterm EventStream            └─ AutoTick ──> events_rx
//!   └─ events_rx (DeskEvent)
//! ```
//! The foreground loop is the only owner of the generator, the history
//! log, and the display state; the timer task only signals. Both manual
//! and automatic generation therefore run through the same
//! `HeadlineGenerator::generate` on this task, and the counter and
//! history are always observed atomically by the renderer.

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io;
use tokio::sync::mpsc;
use tracing::info;

use crate::core::generator::HeadlineGenerator;
use crate::core::scheduler::{AutoGenerator, AutoHandle, DeskEvent, INTERVAL_STEP_SECS};
use crate::tui::state::{ConfirmKind, ConfirmPrompt, DeskState};
use crate::tui::widgets::{
    ConfirmWidget, HeaderWidget, HeadlineWidget, HistoryWidget, StatusBarWidget,
};

/// The terminal newsroom desk. Owns all session state; nothing global.
pub struct DeskApp {
    generator: HeadlineGenerator,
    auto: AutoHandle,
    events_rx: mpsc::UnboundedReceiver<DeskEvent>,
    state: DeskState,
}

impl DeskApp {
    /// Build the desk and spawn its timer task. Must be called from
    /// within a tokio runtime.
    pub fn new(generator: HeadlineGenerator) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let auto = AutoGenerator::spawn(events_tx);
        Self {
            generator,
            auto,
            events_rx,
            state: DeskState::default(),
        }
    }

    /// Run the desk until the user exits. Restores the terminal on the
    /// way out, including across panics.
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }
                Some(event) = self.events_rx.recv() => {
                    self.handle_desk_event(event);
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("desk closed");
        Ok(())
    }

    /// The session tally, printed after the terminal is restored.
    pub fn stats_line(&self) -> String {
        self.generator.stats_line()
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(HeaderWidget, panes[0]);
        frame.render_widget(HeadlineWidget::new(self.state.current.as_ref()), panes[1]);
        frame.render_widget(
            HistoryWidget::new(
                self.generator.history().entries(),
                self.state.history_scroll,
            ),
            panes[2],
        );
        frame.render_widget(
            StatusBarWidget::new(
                self.generator.stats_line(),
                self.auto.is_enabled(),
                self.auto.interval_secs(),
                self.state.confirm.is_some(),
            ),
            panes[3],
        );

        if let Some(ref prompt) = self.state.confirm {
            frame.render_widget(ConfirmWidget::new(prompt), frame.area());
        }
    }

    fn handle_terminal_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.state.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.request_exit();
            }
            return;
        }
        match key.code {
            KeyCode::Char('g') | KeyCode::Enter => self.generate(),
            KeyCode::Char('a') => {
                self.auto.toggle();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.auto.adjust_interval(INTERVAL_STEP_SECS);
            }
            KeyCode::Char('-') => {
                self.auto.adjust_interval(-INTERVAL_STEP_SECS);
            }
            KeyCode::Char('c') => self.request_clear(),
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.scroll_up(1, self.generator.history().len());
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(1),
            KeyCode::PageUp => {
                self.state.scroll_up(10, self.generator.history().len());
            }
            KeyCode::PageDown => self.state.scroll_down(10),
            KeyCode::Char('q') | KeyCode::Esc => self.request_exit(),
            _ => {}
        }
    }

    fn handle_desk_event(&mut self, event: DeskEvent) {
        match event {
            // A tick queued just before the user disabled auto mode is
            // dropped here, so disable never produces an extra headline.
            DeskEvent::AutoTick => {
                if self.auto.is_enabled() {
                    self.generate();
                }
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.state.confirm.as_ref() else {
            return;
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let kind = prompt.kind;
                self.state.confirm = None;
                match kind {
                    ConfirmKind::ClearHistory => {
                        self.generator.clear_history();
                        self.state.follow_tail();
                        info!("history cleared");
                    }
                    ConfirmKind::Exit => self.state.should_quit = true,
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state.confirm = None;
            }
            _ => {}
        }
    }

    fn generate(&mut self) {
        let headline = self.generator.generate();
        self.state.current = Some(headline);
        self.state.follow_tail();
    }

    fn request_clear(&mut self) {
        self.state.confirm = Some(ConfirmPrompt {
            kind: ConfirmKind::ClearHistory,
            question: format!(
                "Clear all {} headlines from history?",
                self.generator.history().len()
            ),
        });
    }

    /// Exit with nothing generated needs no consent; a non-empty
    /// session gets a yes/no/cancel prompt first.
    fn request_exit(&mut self) {
        if self.generator.count() == 0 {
            self.state.should_quit = true;
            return;
        }
        self.state.confirm = Some(ConfirmPrompt {
            kind: ConfirmKind::Exit,
            question: format!(
                "You've generated {} headlines this session. Exit?",
                self.generator.count()
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> DeskApp {
        let generator = HeadlineGenerator::builder().seed(42).build().unwrap();
        DeskApp::new(generator)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn exit_with_zero_count_skips_prompt() {
        let mut app = test_app();
        app.handle_terminal_event(press(KeyCode::Char('q')));
        assert!(app.state.should_quit);
        assert!(app.state.confirm.is_none());
    }

    #[tokio::test]
    async fn exit_with_headlines_requires_confirmation() {
        let mut app = test_app();
        app.handle_terminal_event(press(KeyCode::Char('g')));
        app.handle_terminal_event(press(KeyCode::Char('q')));
        assert!(!app.state.should_quit);
        let prompt = app.state.confirm.as_ref().unwrap();
        assert_eq!(prompt.kind, ConfirmKind::Exit);

        app.handle_terminal_event(press(KeyCode::Char('y')));
        assert!(app.state.should_quit);
    }

    #[tokio::test]
    async fn exit_prompt_can_be_cancelled() {
        let mut app = test_app();
        app.handle_terminal_event(press(KeyCode::Char('g')));
        app.handle_terminal_event(press(KeyCode::Char('q')));
        app.handle_terminal_event(press(KeyCode::Esc));
        assert!(!app.state.should_quit);
        assert!(app.state.confirm.is_none());
        assert_eq!(app.generator.count(), 1);
    }

    #[tokio::test]
    async fn clear_requires_affirmative_answer() {
        let mut app = test_app();
        app.handle_terminal_event(press(KeyCode::Char('g')));
        app.handle_terminal_event(press(KeyCode::Char('c')));
        assert_eq!(
            app.state.confirm.as_ref().unwrap().kind,
            ConfirmKind::ClearHistory
        );

        // Denied: history survives.
        app.handle_terminal_event(press(KeyCode::Char('n')));
        assert_eq!(app.generator.history().len(), 1);

        // Confirmed: history cleared, counter untouched.
        app.handle_terminal_event(press(KeyCode::Char('c')));
        app.handle_terminal_event(press(KeyCode::Char('y')));
        assert_eq!(app.generator.history().len(), 0);
        assert_eq!(app.generator.count(), 1);
    }

    #[tokio::test]
    async fn generate_key_updates_current_headline() {
        let mut app = test_app();
        assert!(app.state.current.is_none());
        app.handle_terminal_event(press(KeyCode::Enter));
        assert!(app.state.current.is_some());
        assert_eq!(app.generator.count(), 1);
    }

    #[tokio::test]
    async fn stale_tick_is_dropped_when_auto_disabled() {
        let mut app = test_app();
        app.handle_desk_event(DeskEvent::AutoTick);
        assert_eq!(app.generator.count(), 0);

        app.auto.enable();
        app.handle_desk_event(DeskEvent::AutoTick);
        assert_eq!(app.generator.count(), 1);
    }

    #[tokio::test]
    async fn ctrl_c_requests_exit() {
        let mut app = test_app();
        app.handle_terminal_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.state.should_quit);
    }

    #[tokio::test]
    async fn scroll_keys_move_history_window() {
        let mut app = test_app();
        for _ in 0..5 {
            app.handle_terminal_event(press(KeyCode::Char('g')));
        }
        app.handle_terminal_event(press(KeyCode::Char('k')));
        app.handle_terminal_event(press(KeyCode::Char('k')));
        assert_eq!(app.state.history_scroll, 2);

        app.handle_terminal_event(press(KeyCode::Char('j')));
        assert_eq!(app.state.history_scroll, 1);

        // A fresh generation snaps back to the tail.
        app.handle_terminal_event(press(KeyCode::Char('g')));
        assert_eq!(app.state.history_scroll, 0);
    }
}
