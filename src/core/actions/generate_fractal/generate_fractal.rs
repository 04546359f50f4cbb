use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates `algorithm` at every pixel of its rect, row by row.
pub fn generate_fractal<Alg: FractalAlgorithm + ?Sized>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    algorithm
        .pixel_rect()
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
