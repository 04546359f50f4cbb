use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::kinds::RecurrenceKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::colour_mapping::factory::julia_colour_map_factory;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;
use crate::core::fractals::julia::errors::julia::JuliaError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 255;
pub const DEFAULT_CONSTANT: Complex = Complex::new(-0.34, 0.71);

/// Everything fixed for a session except the viewport's later movements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub region: Viewport,
    pub constant: Complex,
    pub max_iterations: u32,
    pub recurrence: RecurrenceKind,
    pub colour_map_kind: JuliaColourMapKinds,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            region: Viewport::default(),
            constant: DEFAULT_CONSTANT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            recurrence: RecurrenceKind::default(),
            colour_map_kind: JuliaColourMapKinds::default(),
        }
    }
}

impl JuliaConfig {
    /// Algorithm for rendering `viewport` into `pixel_rect` with this configuration.
    pub fn build_algorithm(
        &self,
        pixel_rect: PixelRect,
        viewport: Viewport,
    ) -> Result<JuliaAlgorithm, JuliaError> {
        JuliaAlgorithm::new(
            pixel_rect,
            viewport,
            self.constant,
            self.max_iterations,
            self.recurrence,
        )
    }

    #[must_use]
    pub fn build_colour_map(&self) -> Box<dyn JuliaColourMap> {
        julia_colour_map_factory(self.colour_map_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn default_config_values() {
        let config = JuliaConfig::default();

        assert_eq!(config.region, Viewport::new(-1.4, 1.4, -1.7, 1.7).unwrap());
        assert_eq!(config.constant, Complex::new(-0.34, 0.71));
        assert_eq!(config.max_iterations, 255);
        assert_eq!(config.recurrence, RecurrenceKind::JuliaQuadratic);
        assert_eq!(config.colour_map_kind, JuliaColourMapKinds::Waves);
    }

    #[test]
    fn build_algorithm_uses_config() {
        let config = JuliaConfig {
            recurrence: RecurrenceKind::JuliaCubic,
            ..JuliaConfig::default()
        };

        let algorithm = config
            .build_algorithm(PixelRect::new(8, 8).unwrap(), config.region)
            .unwrap();

        assert_eq!(algorithm.recurrence(), RecurrenceKind::JuliaCubic);
    }

    #[test]
    fn build_algorithm_rejects_zero_iterations() {
        let config = JuliaConfig {
            max_iterations: 0,
            ..JuliaConfig::default()
        };

        assert_eq!(
            config
                .build_algorithm(PixelRect::new(8, 8).unwrap(), config.region)
                .unwrap_err(),
            JuliaError::ZeroMaxIterations
        );
    }

    #[test]
    fn build_colour_map_uses_config() {
        let config = JuliaConfig {
            colour_map_kind: JuliaColourMapKinds::Violet,
            ..JuliaConfig::default()
        };

        assert_eq!(config.build_colour_map().display_name(), "Violet");
    }
}
