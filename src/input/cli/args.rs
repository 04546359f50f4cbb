use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::core::fractals::escape_time::kinds::RecurrenceKind;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::julia_config::{DEFAULT_CONSTANT, DEFAULT_MAX_ITERATIONS};
use crate::core::navigation::params::GOLDEN_RATIO;

pub const DEFAULT_WIDTH: u32 = 1400;
pub const DEFAULT_HEIGHT: u32 = 900;
pub const DEFAULT_OUTPUT: &str = "julia.ppm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FractalArg {
    #[default]
    Julia,
    JuliaCubic,
    Mandelbrot,
}

impl From<FractalArg> for RecurrenceKind {
    fn from(arg: FractalArg) -> Self {
        match arg {
            FractalArg::Julia => Self::JuliaQuadratic,
            FractalArg::JuliaCubic => Self::JuliaCubic,
            FractalArg::Mandelbrot => Self::Mandelbrot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaletteArg {
    #[default]
    Waves,
    Grayscale,
    Cornflower,
    Chaos,
    Violet,
}

impl From<PaletteArg> for JuliaColourMapKinds {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Waves => Self::Waves,
            PaletteArg::Grayscale => Self::Grayscale,
            PaletteArg::Cornflower => Self::Cornflower,
            PaletteArg::Chaos => Self::Chaos,
            PaletteArg::Violet => Self::Violet,
        }
    }
}

/// Julia set renderer and explorer.
///
/// `-h` sets the height, so help is only available as `--help`.
#[derive(Debug, Parser)]
#[command(name = "julia_explorer", version, disable_help_flag = true)]
pub struct Cli {
    /// Iteration budget per pixel
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iter: u32,

    /// Framebuffer height in pixels
    #[arg(short = 'h', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Framebuffer width in pixels
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Pan step as a percentage of the current span
    #[arg(short, long, default_value_t = 8.0, allow_negative_numbers = true)]
    pub smooth: f64,

    /// Zoom-out factor
    #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub unzoom: f64,

    /// Zoom-in factor
    #[arg(short, long, default_value_t = GOLDEN_RATIO, allow_negative_numbers = true)]
    pub zoom: f64,

    #[arg(long, default_value_t = -1.4, allow_negative_numbers = true)]
    pub xmin: f64,

    #[arg(long, default_value_t = 1.4, allow_negative_numbers = true)]
    pub xmax: f64,

    #[arg(long, default_value_t = -1.7, allow_negative_numbers = true)]
    pub ymin: f64,

    #[arg(long, default_value_t = 1.7, allow_negative_numbers = true)]
    pub ymax: f64,

    /// Recurrence to iterate
    #[arg(long, value_enum, default_value_t)]
    pub fractal: FractalArg,

    /// Colour palette
    #[arg(long, value_enum, default_value_t)]
    pub palette: PaletteArg,

    /// Output file for the headless renderer
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Real part of the Julia constant
    #[arg(value_name = "A", requires = "b", allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Imaginary part of the Julia constant
    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// The Julia constant given on the command line, or the default one.
    #[must_use]
    pub fn constant(&self) -> (f64, f64) {
        match (self.a, self.b) {
            (Some(a), Some(b)) => (a, b),
            _ => (DEFAULT_CONSTANT.real, DEFAULT_CONSTANT.imag),
        }
    }
}
