use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::navigation::params::{NavigationError, NavigationParams};
use crate::input::cli::args::Cli;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    Size(PixelRectError),
    Viewport(ViewportError),
    Navigation(NavigationError),
    ZeroIterations,
    InvalidConstant { real: f64, imag: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(err) => write!(f, "invalid window size: {}", err),
            Self::Viewport(err) => write!(f, "invalid initial viewport: {}", err),
            Self::Navigation(err) => write!(f, "invalid navigation settings: {}", err),
            Self::ZeroIterations => write!(f, "iteration budget must be at least 1"),
            Self::InvalidConstant { real, imag } => {
                write!(f, "constant {} + {}i must be finite", real, imag)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Size(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Navigation(err) => Some(err),
            Self::ZeroIterations | Self::InvalidConstant { .. } => None,
        }
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::Size(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<NavigationError> for ConfigError {
    fn from(err: NavigationError) -> Self {
        Self::Navigation(err)
    }
}

/// Validated startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pixel_rect: PixelRect,
    pub julia: JuliaConfig,
    pub navigation: NavigationParams,
    pub output: PathBuf,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let pixel_rect = PixelRect::new(self.width, self.height)?;
        let region = Viewport::new(self.xmin, self.xmax, self.ymin, self.ymax)?;
        let navigation = NavigationParams::new(self.zoom, self.unzoom, self.smooth)?;

        if self.iter == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        let (real, imag) = self.constant();
        if !real.is_finite() || !imag.is_finite() {
            return Err(ConfigError::InvalidConstant { real, imag });
        }

        Ok(Settings {
            pixel_rect,
            julia: JuliaConfig {
                region,
                constant: Complex::new(real, imag),
                max_iterations: self.iter,
                recurrence: self.fractal.into(),
                colour_map_kind: self.palette.into(),
            },
            navigation,
            output: self.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::kinds::RecurrenceKind;
    use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
    use clap::Parser;

    fn settings(args: &[&str]) -> Result<Settings, ConfigError> {
        Cli::try_parse_from(std::iter::once("julia_explorer").chain(args.iter().copied()))
            .unwrap()
            .into_settings()
    }

    #[test]
    fn test_default_settings() {
        let settings = settings(&[]).unwrap();

        assert_eq!(settings.pixel_rect, PixelRect::new(1400, 900).unwrap());
        assert_eq!(settings.julia, JuliaConfig::default());
        assert_eq!(settings.navigation, NavigationParams::default());
        assert_eq!(settings.output, PathBuf::from("julia.ppm"));
    }

    #[test]
    fn test_settings_carry_overrides() {
        let settings = settings(&[
            "-w", "64", "-h", "48", "-i", "50", "--fractal", "mandelbrot", "--palette",
            "chaos", "--", "-0.8", "0.156",
        ])
        .unwrap();

        assert_eq!(settings.pixel_rect, PixelRect::new(64, 48).unwrap());
        assert_eq!(settings.julia.max_iterations, 50);
        assert_eq!(settings.julia.constant, Complex::new(-0.8, 0.156));
        assert_eq!(settings.julia.recurrence, RecurrenceKind::Mandelbrot);
        assert_eq!(settings.julia.colour_map_kind, JuliaColourMapKinds::Chaos);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = settings(&["-w", "0"]).unwrap_err();

        assert!(matches!(err, ConfigError::Size(_)));
    }

    #[test]
    fn test_unordered_viewport_rejected() {
        let err = settings(&["--xmin", "1", "--xmax", "-1"]).unwrap_err();

        assert!(matches!(err, ConfigError::Viewport(_)));
    }

    #[test]
    fn test_non_positive_zoom_rejected() {
        assert_eq!(
            settings(&["-z", "0"]).unwrap_err(),
            ConfigError::Navigation(NavigationError::InvalidZoomFactor(0.0))
        );
        assert_eq!(
            settings(&["-u", "-2"]).unwrap_err(),
            ConfigError::Navigation(NavigationError::InvalidUnzoomFactor(-2.0))
        );
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert_eq!(
            settings(&["-i", "0"]).unwrap_err(),
            ConfigError::ZeroIterations
        );
    }

    #[test]
    fn test_non_finite_constant_rejected() {
        let err = settings(&["inf", "0"]).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidConstant { .. }));
        assert!(err.to_string().contains("finite"));
    }
}
