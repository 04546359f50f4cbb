//! Command-line configuration shared by the headless and windowed binaries.

pub mod args;
pub mod settings;

pub use args::{Cli, FractalArg, PaletteArg};
pub use settings::{ConfigError, Settings};
