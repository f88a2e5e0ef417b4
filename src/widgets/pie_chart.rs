//! Pie chart widget
//!
//! Draws a filled pie on a braille canvas by sweeping radial strokes per
//! slice, with a one-line-per-slice legend underneath. Slice angles are
//! proportional to slice values.

use std::f64::consts::TAU;

use ratatui::prelude::*;
use ratatui::widgets::{
    canvas::{Canvas, Line as CanvasLine},
    Block, Borders, Widget,
};

use crate::data::metrics::DistributionSlice;

use super::PALETTE;

pub struct PieChartWidget<'a> {
    title: &'a str,
    slices: &'a [DistributionSlice],
}

impl<'a> PieChartWidget<'a> {
    pub fn new(title: &'a str, slices: &'a [DistributionSlice]) -> Self {
        Self { title, slices }
    }
}

impl Widget for PieChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().title(self.title).borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let total: u64 = self.slices.iter().map(|s| s.value).sum();
        if inner.height == 0 || inner.width == 0 || total == 0 {
            return;
        }

        let legend_height = (self.slices.len() as u16).min(inner.height);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),
                Constraint::Length(legend_height),
            ])
            .split(inner);

        let canvas = Canvas::default()
            .x_bounds([-1.1, 1.1])
            .y_bounds([-1.1, 1.1])
            .marker(symbols::Marker::Braille)
            .paint(|ctx| {
                let mut start = 0.0_f64;
                for (i, slice) in self.slices.iter().enumerate() {
                    let color = PALETTE[i % PALETTE.len()];
                    let sweep = slice.value as f64 / total as f64 * TAU;
                    if sweep <= 0.0 {
                        continue;
                    }
                    // One stroke every ~0.01 rad keeps the disc solid at
                    // braille resolution
                    let steps = ((sweep / 0.01).ceil() as usize).max(1);
                    for step in 0..=steps {
                        let angle = start + sweep * step as f64 / steps as f64;
                        ctx.draw(&CanvasLine {
                            x1: 0.0,
                            y1: 0.0,
                            x2: angle.cos(),
                            y2: angle.sin(),
                            color,
                        });
                    }
                    start += sweep;
                }
            });
        canvas.render(layout[0], buf);

        let legend_area = layout[1];
        for (i, slice) in self.slices.iter().enumerate() {
            if i as u16 >= legend_area.height {
                break;
            }
            let percent = slice.value * 100 / total;
            let line = Line::from(vec![
                Span::styled("■ ", Style::default().fg(PALETTE[i % PALETTE.len()])),
                Span::raw(format!("{}: {}%", slice.name, percent)),
            ]);
            buf.set_line(
                legend_area.x,
                legend_area.y + i as u16,
                &line,
                legend_area.width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metrics::DEFAULT_DISTRIBUTION;

    fn buffer_content(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_shows_title_and_legend() {
        let widget = PieChartWidget::new("Default Distribution", &DEFAULT_DISTRIBUTION);
        let area = Rect::new(0, 0, 40, 20);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);

        let content = buffer_content(&buffer);
        assert!(content.contains("Default Distribution"));
        assert!(content.contains("Default: 20%"));
        assert!(content.contains("No Default: 80%"));
    }

    #[test]
    fn test_legend_percentages_sum_to_100() {
        let total: u64 = DEFAULT_DISTRIBUTION.iter().map(|s| s.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let widget = PieChartWidget::new("Default Distribution", &DEFAULT_DISTRIBUTION);
        let area = Rect::new(0, 0, 5, 3);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
    }

    #[test]
    fn test_render_zero_area_does_not_panic() {
        let widget = PieChartWidget::new("Default Distribution", &DEFAULT_DISTRIBUTION);
        let area = Rect::new(0, 0, 0, 0);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
    }

    #[test]
    fn test_render_empty_slices_does_not_panic() {
        let slices: [DistributionSlice; 0] = [];
        let widget = PieChartWidget::new("Empty", &slices);
        let area = Rect::new(0, 0, 20, 10);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
    }
}
