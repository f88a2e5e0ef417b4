//! Notebook view
//!
//! Scrollable description of the modelling pipeline: an introduction, the
//! list of notebook sections, the repository location and the full Python
//! listing. The scroll offset is the only state; content is fixed.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::action::Action;
use crate::data::notebook::{
    NOTEBOOK_CONTENTS, NOTEBOOK_INTRO, NOTEBOOK_LOCATION, NOTEBOOK_TITLE, PIPELINE_LISTING,
};
use crate::model::scroll::{Message, Scroll};
use crate::text;
use crate::tui::Frame;

#[derive(Default)]
pub struct Notebook {
    scroll: Scroll,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn handle(&mut self, action: &Action) {
        let message = match action {
            Action::ScrollUp => Message::ScrolledUp,
            Action::ScrollDown => Message::ScrolledDown,
            Action::ScrollToTop => Message::ScrolledToTop,
            Action::ScrollToBottom => Message::ScrolledToBottom,
            _ => return,
        };
        self.scroll.update(message);
    }

    fn content(width: usize, code_style: Style) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = Vec::new();

        for wrapped in text::wrap_text(NOTEBOOK_INTRO, width).lines() {
            lines.push(Line::from(wrapped.to_owned()));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "Contents",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for entry in NOTEBOOK_CONTENTS {
            lines.push(Line::from(format!("  - {entry}")));
        }
        lines.push(Line::default());

        for wrapped in text::wrap_text(NOTEBOOK_LOCATION, width).lines() {
            lines.push(Line::from(wrapped.to_owned()));
        }
        lines.push(Line::default());

        for code_line in PIPELINE_LISTING.lines() {
            lines.push(Line::from(Span::styled(code_line.to_owned(), code_style)));
        }

        lines
    }

    pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect, code_style: Style) {
        let block = Block::default().title(NOTEBOOK_TITLE).borders(Borders::ALL);
        let inner = block.inner(area);

        let lines = Self::content(inner.width as usize, code_style);
        self.scroll.update(Message::BoundsChanged {
            content_height: lines.len() as u16,
            viewport_height: inner.height,
        });

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll.offset(), 0));
        f.render_widget(paragraph, area);
    }
}
