use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::{JuliaColourMap, wave_channel};

/// Three out-of-phase sine waves, one per channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaWaves;

impl ColourMap<u32> for JuliaWaves {
    fn map(&self, iterations: u32) -> Colour {
        let c = iterations as f64;

        Colour {
            r: wave_channel((1.5 + c * 0.35).sin(), 127.0),
            g: wave_channel((c * 0.12).cos(), 127.0),
            b: wave_channel((c * 0.6).sin(), 127.0),
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaWaves {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::Waves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_zero_iterations() {
        assert_eq!(JuliaWaves.map(0), Colour { r: 253, g: 254, b: 127 });
    }

    #[test]
    fn test_map_known_values() {
        assert_eq!(JuliaWaves.map(1), Colour { r: 249, g: 253, b: 198 });
        assert_eq!(JuliaWaves.map(2), Colour { r: 229, g: 250, b: 245 });
        assert_eq!(JuliaWaves.map(9), Colour { r: 0, g: 186, b: 28 });
        assert_eq!(JuliaWaves.map(10), Colour { r: 5, g: 173, b: 91 });
    }

    #[test]
    fn test_map_is_pure() {
        for iterations in 0..=255 {
            assert_eq!(JuliaWaves.map(iterations), JuliaWaves.map(iterations));
        }
    }

    #[test]
    fn test_channels_never_exceed_254() {
        for iterations in 0..=10_000 {
            let colour = JuliaWaves.map(iterations);
            assert!(colour.r <= 254 && colour.g <= 254 && colour.b <= 254);
        }
    }
}
