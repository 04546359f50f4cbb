//! Interactive controller for navigating a fractal.
//!
//! This module provides the application layer for interactive exploration:
//! it owns the viewport, turns navigation actions into viewport transforms,
//! and hands every redrawn frame to the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `NavigationAction` values from whatever polls the window
//! - **Output**: `InteractiveControllerPresenterPort` for displaying frames
//! - **Core**: Uses domain actions from `core/` for the actual computation

mod controller;
pub mod data;
pub mod errors;
pub mod ports;

pub use controller::{InteractiveController, Session};
pub use data::frame_data::FrameData;
pub use errors::interactive::InteractiveError;
pub use ports::presenter::InteractiveControllerPresenterPort;
