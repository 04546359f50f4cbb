use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::escape_time::escape_time;
use crate::core::fractals::escape_time::factory::recurrence_factory;
use crate::core::fractals::escape_time::kinds::RecurrenceKind;
use crate::core::fractals::escape_time::recurrence::Recurrence;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug)]
pub struct JuliaAlgorithm {
    pixel_rect: PixelRect,
    viewport: Viewport,
    constant: Complex,
    max_iterations: u32,
    rule: Box<dyn Recurrence>,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_complex_coords(pixel, self.pixel_rect, self.viewport)?;

        Ok(escape_time(
            self.rule.as_ref(),
            point,
            self.constant,
            self.max_iterations,
        ))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl JuliaAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        viewport: Viewport,
        constant: Complex,
        max_iterations: u32,
        recurrence: RecurrenceKind,
    ) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            viewport,
            constant,
            max_iterations,
            rule: recurrence_factory(recurrence),
        })
    }

    #[must_use]
    pub fn recurrence(&self) -> RecurrenceKind {
        self.rule.kind()
    }
}
