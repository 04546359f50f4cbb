//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management
//! and pixels for framebuffer presentation. Window events are translated into
//! navigation actions for the interactive controller.

mod app;
pub mod errors;
pub mod keymap;

pub use app::run_gui;
pub use errors::GuiError;
