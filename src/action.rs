use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::tabs::{PanelTab, ViewTab};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Key(KeyEvent),
    SelectView(ViewTab),
    NextView,
    SelectPanel(PanelTab),
    NextPanel,
    PreviousPanel,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    SystemMessage(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_unit_variant() {
        let action: Action = serde_json::from_str("\"Quit\"").expect("valid action");
        assert_eq!(action, Action::Quit);
    }

    #[test]
    fn test_deserialize_payload_variant() {
        let action: Action =
            serde_json::from_str("{\"SelectPanel\":\"Overview\"}").expect("valid action");
        assert_eq!(action, Action::SelectPanel(PanelTab::Overview));

        let action: Action =
            serde_json::from_str("{\"SelectView\":\"Notebook\"}").expect("valid action");
        assert_eq!(action, Action::SelectView(ViewTab::Notebook));
    }
}
