use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::recurrence::{
    JuliaCubic, JuliaQuadratic, QuadraticSelf, Recurrence,
};

/// Counts the iterations `rule` takes to carry `point` past the escape radius.
///
/// The count is the number of completed steps before the escape test first
/// succeeds. A point that never escapes within `max_iterations` steps yields
/// `0`, the same value as a point that is already outside before the first
/// step. A point escaping exactly on step `max_iterations` also yields `0`.
#[must_use]
pub fn escape_time<R: Recurrence + ?Sized>(
    rule: &R,
    point: Complex,
    constant: Complex,
    max_iterations: u32,
) -> u32 {
    let (mut z, c) = rule.seed(point, constant);

    for iteration in 0..max_iterations {
        if rule.escaped(z) {
            return iteration;
        }

        z = rule.step(z, c);
    }

    0
}

/// Mandelbrot membership test for `point`, in single precision.
#[must_use]
pub fn mandelbrot(point: Complex, max_iterations: u32) -> u32 {
    escape_time(&QuadraticSelf, point, Complex::ZERO, max_iterations)
}

#[must_use]
pub fn julia(point: Complex, constant: Complex, max_iterations: u32) -> u32 {
    escape_time(&JuliaQuadratic, point, constant, max_iterations)
}

#[must_use]
pub fn julia_cubic(point: Complex, constant: Complex, max_iterations: u32) -> u32 {
    escape_time(&JuliaCubic, point, constant, max_iterations)
}
