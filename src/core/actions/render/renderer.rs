use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    RectMismatch {
        algorithm: PixelRect,
        framebuffer: PixelRect,
    },
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RectMismatch {
                algorithm,
                framebuffer,
            } => write!(
                f,
                "algorithm covers {}x{} pixels but the framebuffer is {}x{}",
                algorithm.width(),
                algorithm.height(),
                framebuffer.width(),
                framebuffer.height()
            ),
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RectMismatch { .. } => None,
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Owns the framebuffer and redraws all of it on every pass.
#[derive(Debug)]
pub struct Renderer {
    framebuffer: PixelBuffer,
}

impl Renderer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            framebuffer: PixelBuffer::new(pixel_rect),
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.framebuffer.pixel_rect()
    }

    #[must_use]
    pub fn framebuffer(&self) -> &PixelBuffer {
        &self.framebuffer
    }

    /// Recomputes every pixel and replaces the framebuffer contents.
    ///
    /// On error the previous frame is left untouched.
    pub fn draw<Alg, CMap>(
        &mut self,
        algorithm: &Alg,
        colour_map: &CMap,
    ) -> Result<&PixelBuffer, RenderError>
    where
        Alg: FractalAlgorithm<Success = u32, Failure = PixelToComplexCoordsError> + ?Sized,
        CMap: ColourMap<u32> + ?Sized,
    {
        let pixel_rect = self.framebuffer.pixel_rect();

        if algorithm.pixel_rect() != pixel_rect {
            return Err(RenderError::RectMismatch {
                algorithm: algorithm.pixel_rect(),
                framebuffer: pixel_rect,
            });
        }

        let iterations = generate_fractal(algorithm)?;
        self.framebuffer = generate_pixel_buffer(&iterations, colour_map, pixel_rect)?;

        Ok(&self.framebuffer)
    }
}
