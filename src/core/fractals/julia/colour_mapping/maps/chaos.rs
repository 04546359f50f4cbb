use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::{JuliaColourMap, wave_channel};

/// Waves driven by powers of the count; neighbouring counts get unrelated colours.
#[derive(Debug, Default, Clone, Copy)]
pub struct JuliaChaos;

impl ColourMap<u32> for JuliaChaos {
    fn map(&self, iterations: u32) -> Colour {
        let c = iterations as f64;
        let c2 = c * c;

        Colour {
            r: wave_channel((c2 * c2).cos(), 127.0),
            g: wave_channel(c2.sin(), 127.0),
            b: wave_channel((3.0 * c2 + 1.0).cos(), 127.0),
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaChaos {
    fn kind(&self) -> JuliaColourMapKinds {
        JuliaColourMapKinds::Chaos
    }
}
