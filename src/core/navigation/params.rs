use std::error::Error;
use std::fmt;

/// φ, the default zoom-in coefficient.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NavigationError {
    InvalidZoomFactor(f64),
    InvalidUnzoomFactor(f64),
    InvalidPanPercent(f64),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor(value) => {
                write!(f, "zoom factor must be finite and positive, got {}", value)
            }
            Self::InvalidUnzoomFactor(value) => {
                write!(f, "unzoom factor must be finite and positive, got {}", value)
            }
            Self::InvalidPanPercent(value) => {
                write!(f, "pan percentage must be finite, got {}", value)
            }
        }
    }
}

impl Error for NavigationError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationParams {
    zoom_factor: f64,
    unzoom_factor: f64,
    pan_percent: f64,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            zoom_factor: GOLDEN_RATIO,
            unzoom_factor: 2.0,
            pan_percent: 8.0,
        }
    }
}

impl NavigationParams {
    pub fn new(
        zoom_factor: f64,
        unzoom_factor: f64,
        pan_percent: f64,
    ) -> Result<Self, NavigationError> {
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            return Err(NavigationError::InvalidZoomFactor(zoom_factor));
        }

        if !unzoom_factor.is_finite() || unzoom_factor <= 0.0 {
            return Err(NavigationError::InvalidUnzoomFactor(unzoom_factor));
        }

        if !pan_percent.is_finite() {
            return Err(NavigationError::InvalidPanPercent(pan_percent));
        }

        Ok(Self {
            zoom_factor,
            unzoom_factor,
            pan_percent,
        })
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn unzoom_factor(&self) -> f64 {
        self.unzoom_factor
    }

    #[must_use]
    pub fn pan_percent(&self) -> f64 {
        self.pan_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = NavigationParams::default();

        assert!((params.zoom_factor() - (5f64.sqrt() + 1.0) / 2.0).abs() < 1e-15);
        assert_eq!(params.unzoom_factor(), 2.0);
        assert_eq!(params.pan_percent(), 8.0);
        assert_eq!(NavigationParams::new(GOLDEN_RATIO, 2.0, 8.0), Ok(params));
    }

    #[test]
    fn zoom_factors_must_be_positive() {
        assert_eq!(
            NavigationParams::new(0.0, 2.0, 8.0),
            Err(NavigationError::InvalidZoomFactor(0.0))
        );
        assert_eq!(
            NavigationParams::new(1.5, -2.0, 8.0),
            Err(NavigationError::InvalidUnzoomFactor(-2.0))
        );
        assert!(NavigationParams::new(f64::INFINITY, 2.0, 8.0).is_err());
        assert!(NavigationParams::new(1.5, f64::NAN, 8.0).is_err());
    }

    #[test]
    fn pan_percent_must_be_finite() {
        assert!(NavigationParams::new(1.5, 2.0, f64::NAN).is_err());
        assert!(NavigationParams::new(1.5, 2.0, -8.0).is_ok());
    }
}
