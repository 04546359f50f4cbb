use crate::core::fractals::julia::colour_mapping::{
    kinds::JuliaColourMapKinds,
    map::JuliaColourMap,
    maps::{
        chaos::JuliaChaos, cornflower::JuliaCornflower, grayscale::JuliaGrayscale,
        violet::JuliaViolet, waves::JuliaWaves,
    },
};

#[must_use]
pub fn julia_colour_map_factory(kind: JuliaColourMapKinds) -> Box<dyn JuliaColourMap> {
    match kind {
        JuliaColourMapKinds::Waves => Box::new(JuliaWaves),
        JuliaColourMapKinds::Grayscale => Box::new(JuliaGrayscale),
        JuliaColourMapKinds::Cornflower => Box::new(JuliaCornflower),
        JuliaColourMapKinds::Chaos => Box::new(JuliaChaos),
        JuliaColourMapKinds::Violet => Box::new(JuliaViolet),
    }
}
