//! Page shell
//!
//! Owns the navigation state and the two views. Draws the header, the
//! page-level tab bar and the active view, leaving the bottom two rows for
//! the status bar.

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::{Component, Dashboard, Notebook};
use crate::config::Config;
use crate::mode::Mode;
use crate::model::tabs::{Message, NavState, ViewTab};
use crate::tui::Frame;
use crate::widgets::tab_bar::TabBarWidget;

pub const HEADER: &str = "Payment Default Prediction Analysis";

pub struct Page {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    nav: NavState,
    dashboard: Dashboard,
    notebook: Notebook,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            config: Config::default(),
            nav: NavState::default(),
            dashboard: Dashboard::new(),
            notebook: Notebook::new(),
        }
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    fn style(&self, key: &str) -> Style {
        let mode = Mode::from(self.nav.view());
        self.config
            .styles
            .get(&mode)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }
}

impl Component for Page {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let followup = match action {
            Action::SelectView(view) => {
                self.nav.update(Message::ViewSelected(view));
                Some(Action::SystemMessage(format!("[View] {}", self.nav.view())))
            }
            Action::NextView => {
                self.nav.update(Message::NextViewSelected);
                Some(Action::SystemMessage(format!("[View] {}", self.nav.view())))
            }
            Action::SelectPanel(panel) => {
                self.nav.update(Message::PanelSelected(panel));
                Some(Action::SystemMessage(format!(
                    "[Panel] {}",
                    self.nav.panel()
                )))
            }
            Action::NextPanel => {
                self.nav.update(Message::NextPanelSelected);
                Some(Action::SystemMessage(format!(
                    "[Panel] {}",
                    self.nav.panel()
                )))
            }
            Action::PreviousPanel => {
                self.nav.update(Message::PreviousPanelSelected);
                Some(Action::SystemMessage(format!(
                    "[Panel] {}",
                    self.nav.panel()
                )))
            }
            Action::ScrollUp
            | Action::ScrollDown
            | Action::ScrollToTop
            | Action::ScrollToBottom => {
                if self.nav.view() == ViewTab::Notebook {
                    self.notebook.handle(&action);
                }
                None
            }
            _ => None,
        };

        Ok(followup)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [header_area, tabs_area, body, _status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);

        let header = Paragraph::new(HEADER)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(header, header_area);

        let tab_bar = TabBarWidget::new(ViewTab::titles(), self.nav.view().index())
            .style(self.style("tab_bar"))
            .highlight_style(self.style("tab_active"));
        f.render_widget(tab_bar, tabs_area);

        match self.nav.view() {
            ViewTab::Visualization => self.dashboard.draw(
                f,
                body,
                self.nav.panel(),
                self.style("tab_bar"),
                self.style("tab_active"),
            ),
            ViewTab::Notebook => {
                let code_style = self.style("code");
                self.notebook.draw(f, body, code_style);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::model::tabs::PanelTab;

    fn render(page: &mut Page) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| page.draw(f, f.area()).expect("draw"))
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
    fn test_initial_view_is_dashboard_overview() {
        let mut page = Page::new();
        let content = render(&mut page);
        assert!(content.contains(HEADER));
        assert!(content.contains("Visualization"));
        assert!(content.contains("Notebook"));
        assert!(content.contains("Default Distribution"));
        assert!(!content.contains("Python Notebook"));
    }

    #[test]
    fn test_select_view_reports_message() {
        let mut page = Page::new();
        let followup = page
            .update(Action::SelectView(ViewTab::Notebook))
            .expect("update");
        assert_eq!(
            followup,
            Some(Action::SystemMessage("[View] Notebook".into()))
        );

        let content = render(&mut page);
        assert!(content.contains("Python Notebook"));
        assert!(!content.contains("Default Distribution"));
    }

    #[test]
    fn test_panel_actions_report_message() {
        let mut page = Page::new();
        let followup = page.update(Action::NextPanel).expect("update");
        assert_eq!(
            followup,
            Some(Action::SystemMessage("[Panel] Model Performance".into()))
        );

        let followup = page.update(Action::PreviousPanel).expect("update");
        assert_eq!(
            followup,
            Some(Action::SystemMessage("[Panel] Overview".into()))
        );
    }

    #[test]
    fn test_panel_selection_survives_view_switch() {
        let mut page = Page::new();
        page.update(Action::SelectPanel(PanelTab::Features))
            .expect("update");
        page.update(Action::SelectView(ViewTab::Notebook))
            .expect("update");
        page.update(Action::SelectView(ViewTab::Visualization))
            .expect("update");

        let content = render(&mut page);
        assert!(content.contains("Top 10 Feature Importance"));
    }

    #[test]
    fn test_scroll_ignored_on_dashboard() {
        let mut page = Page::new();
        render(&mut page);
        page.update(Action::ScrollDown).expect("update");
        assert_eq!(page.notebook.scroll_offset(), 0);

        page.update(Action::SelectView(ViewTab::Notebook))
            .expect("update");
        render(&mut page);
        page.update(Action::ScrollDown).expect("update");
        assert_eq!(page.notebook.scroll_offset(), 1);
    }
}
