use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
    ZoomStalled {
        factor: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite with xmin < xmax and ymin < ymax: x [{}, {}], y [{}, {}]",
                    xmin, xmax, ymin, ymax
                )
            }
            Self::ZoomStalled { factor } => {
                write!(
                    f,
                    "zooming in by {} no longer shrinks the viewport at f64 precision",
                    factor
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the framebuffer.
///
/// `xmin < xmax` and `ymin < ymax` hold for every value of this type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            xmin: -1.4,
            xmax: 1.4,
            ymin: -1.7,
            ymax: 1.7,
        }
    }
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ViewportError> {
        let finite = [xmin, xmax, ymin, ymax].iter().all(|v| v.is_finite());

        // NaN fails both comparisons, so it is rejected here too.
        if !finite || !(xmin < xmax) || !(ymin < ymax) {
            return Err(ViewportError::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.xmax + self.xmin) / 2.0,
            imag: (self.ymax + self.ymin) / 2.0,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x [{}, {}] y [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}
