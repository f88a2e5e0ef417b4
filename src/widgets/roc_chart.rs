//! ROC curve widget
//!
//! Line chart of true-positive rate against false-positive rate for the
//! final model, with the chance diagonal as a reference.

use ratatui::prelude::*;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};

use crate::data::metrics::RocPoint;

const DIAGONAL: [(f64, f64); 2] = [(0.0, 0.0), (1.0, 1.0)];

pub struct RocChartWidget<'a> {
    title: &'a str,
    points: &'a [RocPoint],
}

impl<'a> RocChartWidget<'a> {
    pub fn new(title: &'a str, points: &'a [RocPoint]) -> Self {
        Self { title, points }
    }
}

impl Widget for RocChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let data: Vec<(f64, f64)> = self.points.iter().map(|p| p.as_tuple()).collect();

        let datasets = vec![
            Dataset::default()
                .name("Chance")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&DIAGONAL),
            Dataset::default()
                .name("ROC")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Blue))
                .data(&data),
        ];

        Chart::new(datasets)
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .title("False Positive Rate")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 1.0])
                    .labels(["0.0", "0.5", "1.0"]),
            )
            .y_axis(
                Axis::default()
                    .title("True Positive Rate")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 1.0])
                    .labels(["0.0", "0.5", "1.0"]),
            )
            .render(area, buf);
    }
}
