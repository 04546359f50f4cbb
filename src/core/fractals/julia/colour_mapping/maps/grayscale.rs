use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;

/// The iteration count on every channel, wrapping past 255.
#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaGrayscale;

impl ColourMap<u32> for JuliaGrayscale {
    fn map(&self, iterations: u32) -> Colour {
        let level = iterations as u8;

        Colour {
            r: level,
            g: level,
            b: level,
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaGrayscale {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::Grayscale
    }
}
