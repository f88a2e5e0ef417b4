//! Dashboard view
//!
//! Renders the panel tab bar and exactly one panel body below it. All four
//! panels draw from the static tables in [`crate::data`], so the dashboard
//! itself holds no state; the active panel is owned by the page.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::data::metrics::{
    final_model, DEFAULT_DISTRIBUTION, FEATURE_IMPORTANCE, FINAL_MODEL_F1_PERCENT,
    MODEL_PERFORMANCE, PAYMENT_STATUS_DISTRIBUTION, PROJECT_SUMMARY, ROC_CURVE, THRESHOLD_IMPACT,
    THRESHOLD_NOTE,
};
use crate::model::tabs::PanelTab;
use crate::tui::Frame;
use crate::widgets::feature_bars::FeatureBarsWidget;
use crate::widgets::metric_gauges::MetricGaugesWidget;
use crate::widgets::model_bars::ModelBarsWidget;
use crate::widgets::payment_bars::PaymentBarsWidget;
use crate::widgets::pie_chart::PieChartWidget;
use crate::widgets::roc_chart::RocChartWidget;
use crate::widgets::tab_bar::TabBarWidget;
use crate::widgets::threshold_chart::{ThresholdChartWidget, ThresholdTableWidget};

#[derive(Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        panel: PanelTab,
        tab_style: Style,
        tab_active: Style,
    ) {
        let [tabs_area, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let tab_bar = TabBarWidget::new(PanelTab::titles(), panel.index())
            .style(tab_style)
            .highlight_style(tab_active);
        f.render_widget(tab_bar, tabs_area);

        match panel {
            PanelTab::Overview => self.draw_overview(f, body),
            PanelTab::Performance => self.draw_performance(f, body),
            PanelTab::Features => self.draw_features(f, body),
            PanelTab::Thresholds => self.draw_thresholds(f, body),
        }
    }

    fn draw_overview(&self, f: &mut Frame<'_>, area: Rect) {
        let [charts, summary] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(5)]).areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(charts);

        f.render_widget(
            PieChartWidget::new("Default Distribution", &DEFAULT_DISTRIBUTION),
            left,
        );
        f.render_widget(PaymentBarsWidget::new(&PAYMENT_STATUS_DISTRIBUTION), right);

        let text: Vec<Line> = PROJECT_SUMMARY.iter().map(|line| Line::from(*line)).collect();
        let paragraph = Paragraph::new(text)
            .block(Block::default().title("Project Summary").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, summary);
    }

    fn draw_performance(&self, f: &mut Frame<'_>, area: Rect) {
        let [charts, gauges] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(6)]).areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(charts);

        f.render_widget(ModelBarsWidget::new(&MODEL_PERFORMANCE), left);
        f.render_widget(
            RocChartWidget::new("ROC Curve (Random Forest)", &ROC_CURVE),
            right,
        );
        f.render_widget(
            MetricGaugesWidget::new(final_model(), FINAL_MODEL_F1_PERCENT),
            gauges,
        );
    }

    fn draw_features(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(FeatureBarsWidget::new(&FEATURE_IMPORTANCE), area);
    }

    fn draw_thresholds(&self, f: &mut Frame<'_>, area: Rect) {
        let [charts, note] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(4)]).areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(charts);

        f.render_widget(ThresholdChartWidget::new(&THRESHOLD_IMPACT), left);
        f.render_widget(ThresholdTableWidget::new(&THRESHOLD_IMPACT), right);

        let paragraph = Paragraph::new(THRESHOLD_NOTE)
            .block(Block::default().title("Recommendation").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, note);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn render(panel: PanelTab) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| {
                Dashboard::new().draw(f, f.area(), panel, Style::default(), Style::default());
            })
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_overview_panel() {
        let content = render(PanelTab::Overview);
        assert!(content.contains("Default Distribution"));
        assert!(content.contains("Payment Status Distribution"));
        assert!(content.contains("Project Summary"));
        // other panel bodies stay hidden
        assert!(!content.contains("ROC Curve"));
        assert!(!content.contains("Top 10 Feature Importance"));
    }

    #[test]
    fn test_performance_panel() {
        let content = render(PanelTab::Performance);
        assert!(content.contains("Model Comparison (AUC)"));
        assert!(content.contains("ROC Curve (Random Forest)"));
        assert!(content.contains("Final Model Metrics (Random Forest)"));
        assert!(!content.contains("Project Summary"));
    }

    #[test]
    fn test_features_panel() {
        let content = render(PanelTab::Features);
        assert!(content.contains("Top 10 Feature Importance"));
        assert!(content.contains("max_delay"));
        assert!(!content.contains("Model Comparison"));
    }

    #[test]
    fn test_thresholds_panel() {
        let content = render(PanelTab::Thresholds);
        assert!(content.contains("Threshold Impact on Model Metrics"));
        assert!(content.contains("Recommendation"));
        assert!(!content.contains("Default Distribution"));
    }

    #[test]
    fn test_panel_tab_bar_always_present() {
        for panel in [
            PanelTab::Overview,
            PanelTab::Performance,
            PanelTab::Features,
            PanelTab::Thresholds,
        ] {
            let content = render(panel);
            assert!(content.contains("Overview"));
            assert!(content.contains("Threshold Optimization"));
        }
    }
}
