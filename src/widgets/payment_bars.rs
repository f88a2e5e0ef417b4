//! Payment status distribution widget
//!
//! Vertical bar chart of the four lateness buckets. Bucket shares are
//! percentages, so bar heights are directly comparable.

use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget};

use crate::data::metrics::PaymentStatusBucket;

pub struct PaymentBarsWidget<'a> {
    buckets: &'a [PaymentStatusBucket],
}

impl<'a> PaymentBarsWidget<'a> {
    pub fn new(buckets: &'a [PaymentStatusBucket]) -> Self {
        Self { buckets }
    }

    /// Compact bucket label that fits under a terminal bar
    fn short_label(status: &str) -> &str {
        match status {
            "On Time (-1)" => "On Time",
            "1 Month Late (1)" => "1 Month",
            "2 Months Late (2)" => "2 Months",
            "3+ Months Late (3+)" => "3+ Months",
            other => other,
        }
    }
}

impl Widget for PaymentBarsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars: Vec<Bar> = self
            .buckets
            .iter()
            .map(|bucket| {
                Bar::default()
                    .value(bucket.count)
                    .label(Line::from(Self::short_label(bucket.status)))
                    .text_value(format!("{}%", bucket.count))
            })
            .collect();

        BarChart::default()
            .block(
                Block::default()
                    .title("Payment Status Distribution")
                    .borders(Borders::ALL),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(9)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Blue))
            .value_style(Style::default().fg(Color::Black).bg(Color::Blue))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metrics::PAYMENT_STATUS_DISTRIBUTION;

    fn buffer_content(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_shows_all_buckets() {
        let widget = PaymentBarsWidget::new(&PAYMENT_STATUS_DISTRIBUTION);
        let area = Rect::new(0, 0, 60, 20);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);

        let content = buffer_content(&buffer);
        assert!(content.contains("Payment Status Distribution"));
        assert!(content.contains("On Time"));
        assert!(content.contains("1 Month"));
        assert!(content.contains("2 Months"));
        assert!(content.contains("3+ Months"));
    }

    #[test]
    fn test_short_labels_cover_all_buckets() {
        for bucket in &PAYMENT_STATUS_DISTRIBUTION {
            let label = PaymentBarsWidget::short_label(bucket.status);
            assert_ne!(label, bucket.status);
        }
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let widget = PaymentBarsWidget::new(&PAYMENT_STATUS_DISTRIBUTION);
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
    }
}
