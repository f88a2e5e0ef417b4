//! Navigation state
//!
//! Two closed tab sets: the page-level view (Visualization / Notebook) and
//! the dashboard panel (Overview / Model Performance / Feature Analysis /
//! Threshold Optimization). Both sets are total: every value maps to a
//! rendered body, so switching can never fail.
//!
//! The panel selection is independent of the view selection; leaving the
//! dashboard for the notebook and coming back restores the same panel.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

/// Page-level tab
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
    FromRepr,
)]
pub enum ViewTab {
    #[default]
    #[strum(to_string = "Visualization")]
    Visualization,
    #[strum(to_string = "Notebook")]
    Notebook,
}

impl ViewTab {
    pub fn next(self) -> Self {
        match self {
            ViewTab::Visualization => ViewTab::Notebook,
            ViewTab::Notebook => ViewTab::Visualization,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn titles() -> Vec<String> {
        Self::iter().map(|tab| tab.to_string()).collect()
    }
}

/// Dashboard panel tab
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
    FromRepr,
)]
pub enum PanelTab {
    #[default]
    #[strum(to_string = "Overview")]
    Overview,
    #[strum(to_string = "Model Performance")]
    Performance,
    #[strum(to_string = "Feature Analysis")]
    Features,
    #[strum(to_string = "Threshold Optimization")]
    Thresholds,
}

impl PanelTab {
    pub fn next(self) -> Self {
        let index = (self as usize + 1) % Self::iter().count();
        Self::from_repr(index).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        let count = Self::iter().count();
        let index = (self as usize + count - 1) % count;
        Self::from_repr(index).unwrap_or_default()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn titles() -> Vec<String> {
        Self::iter().map(|tab| tab.to_string()).collect()
    }
}

/// Messages that can change the navigation state
pub enum Message {
    /// A page-level view was selected directly
    ViewSelected(ViewTab),
    /// The next page-level view was selected (wraps around)
    NextViewSelected,
    /// A dashboard panel was selected directly
    PanelSelected(PanelTab),
    /// The next dashboard panel was selected (wraps around)
    NextPanelSelected,
    /// The previous dashboard panel was selected (wraps around)
    PreviousPanelSelected,
}

/// Active view and panel
///
/// This is the only mutable state in the application apart from the
/// notebook scroll offset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    view: ViewTab,
    panel: PanelTab,
}

impl NavState {
    pub fn view(&self) -> ViewTab {
        self.view
    }

    pub fn panel(&self) -> PanelTab {
        self.panel
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ViewSelected(view) => self.view = view,
            Message::NextViewSelected => self.view = self.view.next(),
            Message::PanelSelected(panel) => self.panel = panel,
            Message::NextPanelSelected => self.panel = self.panel.next(),
            Message::PreviousPanelSelected => self.panel = self.panel.previous(),
        }
    }
}
