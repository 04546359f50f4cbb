use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel rect",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel onto the complex plane.
///
/// The left and top edges of the framebuffer land exactly on `xmin` and
/// `ymin`; the right and bottom edges stop one pixel short of `xmax` and
/// `ymax`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let real = (pixel_position.x as f64 / pixel_rect.width() as f64) * viewport.width()
        + viewport.xmin();
    let imag = (pixel_position.y as f64 / pixel_rect.height() as f64) * viewport.height()
        + viewport.ymin();

    Ok(Complex { real, imag })
}

/// Inverse of [`pixel_to_complex_coords`], returning fractional pixel coordinates.
#[must_use]
pub fn complex_to_pixel_coords(
    point: Complex,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> (f64, f64) {
    let x = (point.real - viewport.xmin()) / viewport.width() * pixel_rect.width() as f64;
    let y = (point.imag - viewport.ymin()) / viewport.height() * pixel_rect.height() as f64;

    (x, y)
}
