use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::renderer::Renderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::julia::julia_config::JuliaConfig;

/// Renders a single frame of the configured region and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    config: JuliaConfig,
    pixel_rect: PixelRect,
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(config: JuliaConfig, pixel_rect: PixelRect, presenter: P) -> Self {
        Self {
            config,
            pixel_rect,
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        info!(
            "rendering {} at {}x{}, c = {} + {}i, {} iterations, {} palette",
            self.config.recurrence,
            self.pixel_rect.width(),
            self.pixel_rect.height(),
            self.config.constant.real,
            self.config.constant.imag,
            self.config.max_iterations,
            self.config.colour_map_kind
        );
        info!("viewport {}", self.config.region);

        let algorithm = self
            .config
            .build_algorithm(self.pixel_rect, self.config.region)?;
        let colour_map = self.config.build_colour_map();
        let mut renderer = Renderer::new(self.pixel_rect);

        let start = Instant::now();
        renderer.draw(&algorithm, &colour_map)?;
        info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(renderer.framebuffer().clone());

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("wrote {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::julia::errors::julia::JuliaError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingFilePresenter {
        written: RefCell<Vec<(PathBuf, PixelBuffer)>>,
    }

    impl FilePresenterPort for RecordingFilePresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_write_before_generate_writes_nothing() {
        let controller = CliRenderController::new(
            JuliaConfig::default(),
            PixelRect::new(4, 4).unwrap(),
            RecordingFilePresenter::default(),
        );

        controller.write("unused.ppm").unwrap();

        assert!(controller.buffer().is_none());
        assert!(controller.presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_rendered_frame() {
        let mut controller = CliRenderController::new(
            JuliaConfig::default(),
            PixelRect::new(4, 4).unwrap(),
            RecordingFilePresenter::default(),
        );

        controller.generate().unwrap();
        controller.write("julia.ppm").unwrap();

        let written = controller.presenter.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("julia.ppm"));
        assert_eq!(written[0].1.buffer_size(), 48);
        assert_eq!(&written[0].1.buffer()[0..6], &[253, 254, 127, 249, 253, 198]);
    }

    #[test]
    fn test_generate_rejects_zero_iterations() {
        let config = JuliaConfig {
            max_iterations: 0,
            ..JuliaConfig::default()
        };
        let mut controller = CliRenderController::new(
            config,
            PixelRect::new(4, 4).unwrap(),
            RecordingFilePresenter::default(),
        );

        let err = controller.generate().unwrap_err();

        assert_eq!(
            err.downcast_ref::<JuliaError>(),
            Some(&JuliaError::ZeroMaxIterations)
        );
        assert!(controller.buffer().is_none());
    }
}
