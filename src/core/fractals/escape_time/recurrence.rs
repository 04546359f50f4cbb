use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::kinds::RecurrenceKind;
use std::fmt;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// One escape-time recurrence rule.
pub trait Recurrence: fmt::Debug + Send + Sync {
    fn kind(&self) -> RecurrenceKind;

    /// Starting orbit value and constant for a point of the plane.
    fn seed(&self, point: Complex, constant: Complex) -> (Complex, Complex);

    fn step(&self, z: Complex, c: Complex) -> Complex;

    fn escaped(&self, z: Complex) -> bool {
        z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED
    }
}

/// `z² + c` with `z₀ = 0` and the tested point as `c`, evaluated in single precision.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuadraticSelf;

impl Recurrence for QuadraticSelf {
    fn kind(&self) -> RecurrenceKind {
        RecurrenceKind::Mandelbrot
    }

    fn seed(&self, point: Complex, _constant: Complex) -> (Complex, Complex) {
        let c = Complex {
            real: point.real as f32 as f64,
            imag: point.imag as f32 as f64,
        };

        (Complex::ZERO, c)
    }

    fn step(&self, z: Complex, c: Complex) -> Complex {
        let (x, y) = (z.real as f32, z.imag as f32);
        let (a, b) = (c.real as f32, c.imag as f32);

        Complex {
            real: (x * x - y * y + a) as f64,
            imag: (2.0 * x * y + b) as f64,
        }
    }

    fn escaped(&self, z: Complex) -> bool {
        let (x, y) = (z.real as f32, z.imag as f32);

        x * x + y * y >= ESCAPE_RADIUS_SQUARED as f32
    }
}

/// `z² + c` with the tested point as `z₀` and a fixed `c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaQuadratic;

impl Recurrence for JuliaQuadratic {
    fn kind(&self) -> RecurrenceKind {
        RecurrenceKind::JuliaQuadratic
    }

    fn seed(&self, point: Complex, constant: Complex) -> (Complex, Complex) {
        (point, constant)
    }

    fn step(&self, z: Complex, c: Complex) -> Complex {
        let (x, y) = (z.real, z.imag);

        Complex {
            real: x * x - y * y + c.real,
            imag: 2.0 * x * y + c.imag,
        }
    }
}

/// `z³ + c` with the tested point as `z₀` and a fixed `c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaCubic;

impl Recurrence for JuliaCubic {
    fn kind(&self) -> RecurrenceKind {
        RecurrenceKind::JuliaCubic
    }

    fn seed(&self, point: Complex, constant: Complex) -> (Complex, Complex) {
        (point, constant)
    }

    fn step(&self, z: Complex, c: Complex) -> Complex {
        let (x, y) = (z.real, z.imag);

        Complex {
            real: x * x * x - 3.0 * x * y * y + c.real,
            imag: 3.0 * x * x * y - y * y * y + c.imag,
        }
    }
}
