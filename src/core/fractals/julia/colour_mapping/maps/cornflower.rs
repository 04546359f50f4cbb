use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::{JuliaColourMap, wave_channel};

#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaCornflower;

impl ColourMap<u32> for JuliaCornflower {
    fn map(&self, iterations: u32) -> Colour {
        let level = iterations as u8;

        Colour {
            r: level,
            g: level,
            b: wave_channel((iterations as f64 * 0.2).sin(), 17.0),
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaCornflower {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::Cornflower
    }
}
