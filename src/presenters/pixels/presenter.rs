use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_rect::PixelRect;
use crate::presenters::pixels::pixel_format::copy_rgb_to_rgba;
use log::{debug, error};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Presents frames on a `pixels` surface sized to the framebuffer.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    last_presented_generation: u64,
}

impl InteractiveControllerPresenterPort for PixelsPresenter {
    fn present(&mut self, frame: FrameData<'_>) {
        match copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut()) {
            Ok(()) => {
                debug!("presenting frame {}", frame.generation);
                self.last_presented_generation = frame.generation;
                self.window.request_redraw();
            }
            Err(err) => error!("dropping frame {}: {}", frame.generation, err),
        }
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, pixel_rect: PixelRect) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(pixel_rect.width(), pixel_rect.height(), surface_texture)?;

        Ok(Self {
            window,
            pixels,
            last_presented_generation: 0,
        })
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    /// Maps a window position to a framebuffer pixel, `None` outside the image.
    #[must_use]
    pub fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<(usize, usize)> {
        self.pixels.window_pos_to_pixel(position).ok()
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
