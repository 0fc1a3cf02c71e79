//! # User Interface Module
//!
//! Toolkit-independent state behind the demo overlay: the branch level and
//! angle sliders and the help labels. Drawing them is left to the frontend.

pub mod controls;

// Re-export main types
pub use controls::{Slider, TreeControls, HELP_LINES};
