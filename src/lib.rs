mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::cli::CliRenderController;
pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, InteractiveError,
    Session,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use core::actions::render::renderer::{RenderError, Renderer};
pub use core::data::complex::Complex;
pub use core::data::pixel_buffer::PixelBuffer;
pub use core::data::pixel_rect::PixelRect;
pub use core::data::point::Point;
pub use core::data::viewport::Viewport;
pub use core::fractals::escape_time::escape_time::{julia, julia_cubic, mandelbrot};
pub use core::fractals::escape_time::kinds::RecurrenceKind;
pub use core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
pub use core::fractals::julia::julia_config::JuliaConfig;
pub use core::navigation::{NavigationAction, NavigationParams, PanDirection};
pub use input::cli::{Cli, ConfigError, Settings};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
