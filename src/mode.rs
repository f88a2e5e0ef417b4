use serde::{Deserialize, Serialize};

use crate::model::tabs::ViewTab;

/// Keybinding scope, tracking which page-level view is active
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Visualization,
    Notebook,
}

impl Mode {
    pub fn next(self) -> Self {
        match self {
            Mode::Visualization => Mode::Notebook,
            Mode::Notebook => Mode::Visualization,
        }
    }
}

impl From<ViewTab> for Mode {
    fn from(view: ViewTab) -> Self {
        match view {
            ViewTab::Visualization => Mode::Visualization,
            ViewTab::Notebook => Mode::Notebook,
        }
    }
}
