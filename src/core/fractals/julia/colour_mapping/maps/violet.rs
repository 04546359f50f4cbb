use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;

/// Linear channel ramps from a violet base, wrapping modulo 256.
#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaViolet;

impl ColourMap<u32> for JuliaViolet {
    fn map(&self, iterations: u32) -> Colour {
        Colour {
            r: 206u32.wrapping_add(iterations.wrapping_mul(8)) as u8,
            g: 20u32.wrapping_add(iterations.wrapping_mul(2)) as u8,
            b: 226u32.wrapping_sub(iterations.wrapping_mul(4)) as u8,
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaViolet {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::Violet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_zero_iterations() {
        assert_eq!(JuliaViolet.map(0), Colour { r: 206, g: 20, b: 226 });
    }

    #[test]
    fn test_map_wraps_channels() {
        // 206 + 80 = 286 -> 30, 226 - 40 = 186
        assert_eq!(JuliaViolet.map(10), Colour { r: 30, g: 40, b: 186 });
        // 226 - 240 = -14 -> 242
        assert_eq!(JuliaViolet.map(60).b, 242);
    }
}
