use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;

pub trait JuliaColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> JuliaColourMapKinds;
}

impl ColourMap<u32> for Box<dyn JuliaColourMap> {
    fn map(&self, value: u32) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Scales a wave in `[-1, 1]` onto a channel, truncating like an 8-bit store.
pub(crate) fn wave_channel(wave: f64, amplitude: f64) -> u8 {
    ((1.0 + wave) * amplitude) as u8
}
