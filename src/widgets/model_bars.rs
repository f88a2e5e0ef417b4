//! Model comparison widget
//!
//! Horizontal bar chart of AUC per candidate model. AUC is scaled to
//! percent for bar length; the printed value keeps the original scale.

use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget};

use crate::data::metrics::ModelPerformance;

pub struct ModelBarsWidget<'a> {
    models: &'a [ModelPerformance],
}

impl<'a> ModelBarsWidget<'a> {
    pub fn new(models: &'a [ModelPerformance]) -> Self {
        Self { models }
    }
}

impl Widget for ModelBarsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars: Vec<Bar> = self
            .models
            .iter()
            .map(|model| {
                Bar::default()
                    .value((model.auc * 100.0).round() as u64)
                    .label(Line::from(model.name))
                    .text_value(format!("{:.2}", model.auc))
            })
            .collect();

        BarChart::default()
            .block(
                Block::default()
                    .title("Model Comparison (AUC)")
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
