//! Pixel format conversion between the renderer's RGB frames and RGBA surfaces.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    RgbLength { len: usize },
    RgbaLength { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RgbLength { len } => {
                write!(f, "RGB length {} is not a multiple of 3", len)
            }
            Self::RgbaLength { expected, actual } => write!(
                f,
                "RGBA length {} does not match expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies RGB pixels (3 bytes each) into an RGBA surface (4 bytes each), opaque.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RgbLength { len: src.len() });
    }

    let expected = (src.len() / 3) * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::RgbaLength {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_known_values() {
        let src = [253, 254, 127, 0, 186, 28];
        let mut dst = [0; 8];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, [253, 254, 127, 255, 0, 186, 28, 255]);
    }

    #[test]
    fn test_copy_empty_buffers() {
        let mut dst: [u8; 0] = [];

        assert_eq!(copy_rgb_to_rgba(&[], &mut dst), Ok(()));
    }

    #[test]
    fn test_partial_rgb_pixel_rejected() {
        let mut dst = [0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::RgbLength { len: 4 })
        );
    }

    #[test]
    fn test_surface_size_mismatch_rejected_without_writing() {
        let mut dst = [7; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst),
            Err(PixelFormatError::RgbaLength {
                expected: 8,
                actual: 4
            })
        );
        assert_eq!(dst, [7; 4]);
    }
}
