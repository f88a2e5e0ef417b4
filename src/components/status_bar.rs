//! Status bar
//!
//! Bottom two rows: the active mode with key hints, and the most recent
//! system message. Tracks the mode from the action stream instead of
//! borrowing state from the page.

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::action::Action;
use crate::components::Component;
use crate::mode::Mode;
use crate::tui::Frame;

pub struct StatusBar {
    mode: Mode,
    message: Option<String>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            message: None,
        }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            Mode::Visualization => "q: quit | tab: view | h/l: panel | 1-4: panel",
            Mode::Notebook => "q: quit | tab: view | j/k: scroll | gg/G: top/bottom",
        }
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SelectView(view) => self.mode = Mode::from(view),
            Action::NextView => self.mode = self.mode.next(),
            Action::SystemMessage(message) => self.message = Some(message),
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let status = Line::from(vec![
            Span::styled(
                concat!("risktui ", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::Gray).italic(),
            ),
            Span::raw("  "),
            Span::styled(self.hints(), Style::default().fg(Color::DarkGray)),
        ]);
        let status_line = Paragraph::new(status).style(Style::default().bg(Color::Black));
        f.render_widget(status_line, layout[1]);

        let message_line = Paragraph::new(self.message.clone().unwrap_or_default());
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}
