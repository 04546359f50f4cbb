use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;

/// Colours one value per pixel into a fresh RGB buffer.
///
/// `input` must be in row-major order and hold exactly one value per pixel
/// of `pixel_rect`.
pub fn generate_pixel_buffer<T: Copy, CMap: ColourMap<T> + ?Sized>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for &value in input {
        let Colour { r, g, b } = mapper.map(value);

        buffer.extend_from_slice(&[r, g, b]);
    }

    PixelBuffer::from_data(pixel_rect, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u8> for StubColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(3, 2).unwrap();
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(&input, &StubColourMap {}, pixel_rect).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(2, 2).unwrap();

        let results = generate_pixel_buffer(&input, &StubColourMap {}, pixel_rect);

        assert_eq!(
            results,
            Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 18
            })
        );
    }
}
