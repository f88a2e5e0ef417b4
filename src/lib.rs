//! # Risktui - Payment Default Analytics TUI
//!
//! A terminal dashboard for exploring the results of a payment default
//! prediction model, built with Rust and Ratatui. Every metric shown is a
//! compile-time constant; the application performs no scoring, no I/O beyond
//! the terminal, and no persistence.
//!
//! ## Architecture Overview
//!
//! The crate follows the component/action event-loop pattern:
//!
//! - **Data** (`data`): static metric tables and notebook text
//! - **Model** (`model`): pure navigation and scroll state with
//!   message-driven updates
//! - **Action** (`action`): events that drive the application
//! - **Components** (`components`): UI composition over the data tables
//! - **Widgets** (`widgets`): stateless chart renderers
//!
//! ## Example Usage
//!
//! ```rust
//! use risktui::model::tabs::{Message, NavState, PanelTab, ViewTab};
//!
//! let mut nav = NavState::default();
//! nav.update(Message::PanelSelected(PanelTab::Features));
//! nav.update(Message::ViewSelected(ViewTab::Notebook));
//! nav.update(Message::ViewSelected(ViewTab::Visualization));
//!
//! // The dashboard remembers its own panel across page-level switches
//! assert_eq!(nav.panel(), PanelTab::Features);
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Static metric tables rendered by the dashboard
//! - [`model`] - Navigation and scroll state
//! - [`action`] - Action types for the event loop
//! - [`components`] - UI components
//! - [`widgets`] - Chart widgets
//! - [`config`] - Configuration management

#![deny(warnings)]
#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod data;
pub mod mode;
pub mod model;
pub mod text;
pub mod tui;
pub mod utils;
pub mod widgets;

pub use action::Action;
pub use app::App;
pub use mode::Mode;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
