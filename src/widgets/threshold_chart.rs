//! Threshold optimization widgets
//!
//! A line chart of precision, recall and F1 against the classification
//! threshold, and a companion table listing the sampled steps with the
//! recommended cutoff highlighted.

use ratatui::prelude::*;
use ratatui::widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Row, Table, Widget};

use crate::data::metrics::{ThresholdMetrics, OPTIMAL_THRESHOLD};

pub struct ThresholdChartWidget<'a> {
    rows: &'a [ThresholdMetrics],
}

impl<'a> ThresholdChartWidget<'a> {
    pub fn new(rows: &'a [ThresholdMetrics]) -> Self {
        Self { rows }
    }
}

impl Widget for ThresholdChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let precision: Vec<(f64, f64)> =
            self.rows.iter().map(|r| (r.threshold, r.precision)).collect();
        let recall: Vec<(f64, f64)> = self.rows.iter().map(|r| (r.threshold, r.recall)).collect();
        let f1: Vec<(f64, f64)> = self.rows.iter().map(|r| (r.threshold, r.f1)).collect();

        let datasets = vec![
            Dataset::default()
                .name("Precision")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Blue))
                .data(&precision),
            Dataset::default()
                .name("Recall")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&recall),
            Dataset::default()
                .name("F1")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&f1),
        ];

        Chart::new(datasets)
            .block(
                Block::default()
                    .title("Threshold Impact on Model Metrics")
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title("Threshold")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 1.0])
                    .labels(["0.0", "0.5", "1.0"]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 1.0])
                    .labels(["0.0", "0.5", "1.0"]),
            )
            .render(area, buf);
    }
}

pub struct ThresholdTableWidget<'a> {
    rows: &'a [ThresholdMetrics],
}

impl<'a> ThresholdTableWidget<'a> {
    pub fn new(rows: &'a [ThresholdMetrics]) -> Self {
        Self { rows }
    }

    fn is_optimal(row: &ThresholdMetrics) -> bool {
        (row.threshold - OPTIMAL_THRESHOLD).abs() < 1e-9
    }
}

impl Widget for ThresholdTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(["Threshold", "Precision", "Recall", "F1"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().map(|row| {
            let cells = [
                Cell::from(format!("{:.1}", row.threshold)),
                Cell::from(format!("{:.2}", row.precision)),
                Cell::from(format!("{:.2}", row.recall)),
                Cell::from(format!("{:.2}", row.f1)),
            ];
            let table_row = Row::new(cells);
            if Self::is_optimal(row) {
                table_row.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                table_row
            }
        });

        Widget::render(
            Table::new(
                rows,
                [
                    Constraint::Length(9),
                    Constraint::Length(9),
                    Constraint::Length(9),
                    Constraint::Length(9),
                ],
            )
            .header(header)
            .block(Block::default().title("Sampled Steps").borders(Borders::ALL)),
            area,
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metrics::THRESHOLD_IMPACT;

    fn buffer_content(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_chart_shows_title() {
        let widget = ThresholdChartWidget::new(&THRESHOLD_IMPACT);
        let area = Rect::new(0, 0, 60, 20);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);

        let content = buffer_content(&buffer);
        assert!(content.contains("Threshold Impact on Model Metrics"));
        assert!(content.contains("Threshold"));
    }

    #[test]
    fn test_table_lists_all_nine_steps() {
        let widget = ThresholdTableWidget::new(&THRESHOLD_IMPACT);
        // header + 9 rows + borders
        let area = Rect::new(0, 0, 44, 13);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);

        let content = buffer_content(&buffer);
        for row in &THRESHOLD_IMPACT {
            let threshold = format!("{:.1}", row.threshold);
            assert!(content.contains(&threshold), "missing step {threshold}");
        }
    }

    #[test]
    fn test_optimal_row_detection() {
        let optimal: Vec<&ThresholdMetrics> = THRESHOLD_IMPACT
            .iter()
            .filter(|row| ThresholdTableWidget::is_optimal(row))
            .collect();
        assert_eq!(optimal.len(), 1);
        assert_eq!(optimal[0].threshold, 0.4);
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let chart = ThresholdChartWidget::new(&THRESHOLD_IMPACT);
        let table = ThresholdTableWidget::new(&THRESHOLD_IMPACT);
        let area = Rect::new(0, 0, 6, 2);
        let mut buffer = Buffer::empty(area);

        chart.render(area, &mut buffer);
        table.render(area, &mut buffer);
    }
}
