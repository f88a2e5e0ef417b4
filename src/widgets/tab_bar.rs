//! Tab bar widget
//!
//! Renders one row of tab titles with the active tab highlighted. Used
//! twice: for the page-level views and for the dashboard panels.

use ratatui::prelude::*;
use ratatui::widgets::Widget;

#[derive(Clone)]
pub struct TabBarWidget {
    titles: Vec<String>,
    selected: usize,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new(titles: Vec<String>, selected: usize) -> Self {
        Self {
            titles,
            selected,
            style: Style::default().bg(Color::Black),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = ratatui::widgets::Tabs::new(self.titles)
            .select(self.selected)
            .style(self.style)
            .highlight_style(self.highlight_style);

        tabs.render(area, buf);
    }
}
