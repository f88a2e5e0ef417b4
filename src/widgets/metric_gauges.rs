//! Final model metric gauges
//!
//! One line gauge per headline metric of the selected model, mirroring
//! the percent readouts of the original dashboard.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, LineGauge, Widget};

use crate::data::metrics::ModelPerformance;

pub struct MetricGaugesWidget<'a> {
    model: &'a ModelPerformance,
    f1_percent: u16,
}

impl<'a> MetricGaugesWidget<'a> {
    pub fn new(model: &'a ModelPerformance, f1_percent: u16) -> Self {
        Self { model, f1_percent }
    }

    fn metrics(&self) -> [(&'static str, f64); 4] {
        [
            ("Accuracy", self.model.accuracy),
            ("Precision", self.model.precision),
            ("Recall", self.model.recall),
            ("F1 Score", f64::from(self.f1_percent) / 100.0),
        ]
    }
}

impl Widget for MetricGaugesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default()
            .title(format!("Final Model Metrics ({})", self.model.name))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let metrics = self.metrics();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); metrics.len()])
            .split(inner);

        for ((name, value), row) in metrics.into_iter().zip(rows.iter()) {
            if row.height == 0 {
                continue;
            }
            LineGauge::default()
                .label(format!("{name:<9} {:>3.0}%", value * 100.0))
                .filled_style(Style::default().fg(Color::Blue))
                .unfilled_style(Style::default().fg(Color::DarkGray))
                .ratio(value)
                .render(*row, buf);
        }
    }
}
