//! Feature importance widget
//!
//! Horizontal bar chart of the top 10 features: `importance` maps to bar
//! length, `name` to the category axis. Rows render in table order; the
//! input is already sorted descending and must not be re-sorted here.

use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget};

use crate::data::metrics::FeatureImportance;

pub struct FeatureBarsWidget<'a> {
    features: &'a [FeatureImportance],
}

impl<'a> FeatureBarsWidget<'a> {
    pub fn new(features: &'a [FeatureImportance]) -> Self {
        Self { features }
    }
}

impl Widget for FeatureBarsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars: Vec<Bar> = self
            .features
            .iter()
            .map(|feature| {
                Bar::default()
                    .value((feature.importance * 100.0).round() as u64)
                    .label(Line::from(feature.name))
                    .text_value(format!("{:.2}", feature.importance))
            })
            .collect();

        BarChart::default()
            .block(
                Block::default()
                    .title("Top 10 Feature Importance")
                    .borders(Borders::ALL),
            )
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Blue))
            .value_style(Style::default().fg(Color::Black).bg(Color::Blue))
            .render(area, buf);
    }
}
