//! Input adapters for the Julia explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into domain requests.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
