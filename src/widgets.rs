//! Chart widgets
//!
//! Stateless renderers: each widget is a pure function from one static
//! table to a visual encoding. Inputs are compile-time constants, so the
//! widgets carry no error paths.

pub mod feature_bars;
pub mod metric_gauges;
pub mod model_bars;
pub mod payment_bars;
pub mod pie_chart;
pub mod roc_chart;
pub mod tab_bar;
pub mod threshold_chart;

use ratatui::style::Color;

/// Series palette, applied in slice/series order
pub const PALETTE: [Color; 5] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Red,
    Color::Magenta,
];
