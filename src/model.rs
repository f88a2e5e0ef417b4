//! Pure UI state models
//!
//! Message-driven state in the Elm style: each model exposes a past-tense
//! `Message` enum and a single `update` function through which all state
//! changes flow. Models know nothing about rendering.

pub mod scroll;
pub mod tabs;
