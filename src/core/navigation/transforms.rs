//! Viewport transforms for each navigation action.
//!
//! Every transform rebuilds the viewport through [`Viewport::new`], so a
//! result that would collapse, invert or overflow a span comes back as an
//! error rather than as an invalid viewport.

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::navigation::action::PanDirection;

/// Shrinks the viewport by `factor` and centres it on `anchor`.
///
/// With `factor > 1` both spans must strictly shrink. Once the bounds are a
/// few ulps apart rounding widens them back out, and the zoom is reported as
/// [`ViewportError::ZoomStalled`].
pub fn zoom_in(viewport: Viewport, anchor: Complex, factor: f64) -> Result<Viewport, ViewportError> {
    let half_width = viewport.width() / (2.0 * factor);
    let half_height = viewport.height() / (2.0 * factor);

    let zoomed = Viewport::new(
        anchor.real - half_width,
        anchor.real + half_width,
        anchor.imag - half_height,
        anchor.imag + half_height,
    )?;

    if factor > 1.0 && (zoomed.width() >= viewport.width() || zoomed.height() >= viewport.height())
    {
        return Err(ViewportError::ZoomStalled { factor });
    }

    Ok(zoomed)
}

/// Scales every bound's distance from `anchor` by `factor`, keeping `anchor` fixed.
pub fn zoom_out(viewport: Viewport, anchor: Complex, factor: f64) -> Result<Viewport, ViewportError> {
    Viewport::new(
        anchor.real - factor * (anchor.real - viewport.xmin()),
        anchor.real - factor * (anchor.real - viewport.xmax()),
        anchor.imag - factor * (anchor.imag - viewport.ymin()),
        anchor.imag - factor * (anchor.imag - viewport.ymax()),
    )
}

/// Shifts the viewport by `percent` of its span. `Up` moves towards `ymin`.
pub fn pan(viewport: Viewport, direction: PanDirection, percent: f64) -> Result<Viewport, ViewportError> {
    let dx = viewport.width() * (percent / 100.0);
    let dy = viewport.height() * (percent / 100.0);
    let (xmin, xmax, ymin, ymax) = (
        viewport.xmin(),
        viewport.xmax(),
        viewport.ymin(),
        viewport.ymax(),
    );

    match direction {
        PanDirection::Up => Viewport::new(xmin, xmax, ymin - dy, ymax - dy),
        PanDirection::Down => Viewport::new(xmin, xmax, ymin + dy, ymax + dy),
        PanDirection::Left => Viewport::new(xmin - dx, xmax - dx, ymin, ymax),
        PanDirection::Right => Viewport::new(xmin + dx, xmax + dx, ymin, ymax),
    }
}
