use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::interactive::InteractiveError;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render::renderer::Renderer;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::navigation::{NavigationAction, NavigationParams, pan, zoom_in, zoom_out};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use log::{debug, info, warn};
use std::time::Instant;

/// Whether the session continues after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Running,
    Quit,
}

/// Single-threaded navigation state machine.
///
/// Each action is applied to the viewport and followed by a full, blocking
/// redraw before `handle` returns, so actions never overlap.
pub struct InteractiveController<P: InteractiveControllerPresenterPort> {
    config: JuliaConfig,
    navigation: NavigationParams,
    viewport: Viewport,
    renderer: Renderer,
    colour_map: Box<dyn JuliaColourMap>,
    presenter: P,
    generation: u64,
}

impl<P: InteractiveControllerPresenterPort> InteractiveController<P> {
    pub fn new(
        config: JuliaConfig,
        navigation: NavigationParams,
        pixel_rect: PixelRect,
        presenter: P,
    ) -> Result<Self, InteractiveError> {
        // Rejects a zero iteration budget before the first draw.
        config.build_algorithm(pixel_rect, config.region)?;

        Ok(Self {
            config,
            navigation,
            viewport: config.region,
            renderer: Renderer::new(pixel_rect),
            colour_map: config.build_colour_map(),
            presenter,
            generation: 0,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Draws and presents the initial frame.
    pub fn start(&mut self) -> Result<(), InteractiveError> {
        info!(
            "{} with c = {} + {}i, {} iterations, {} palette, viewport {}",
            self.config.recurrence,
            self.config.constant.real,
            self.config.constant.imag,
            self.config.max_iterations,
            self.config.colour_map_kind,
            self.viewport
        );

        self.redraw()
    }

    /// Applies one action and, unless it quits, redraws the whole frame.
    pub fn handle(&mut self, action: NavigationAction) -> Result<Session, InteractiveError> {
        debug!("handling {:?}", action);

        let next = match action {
            NavigationAction::Quit => {
                info!("quit requested");
                return Ok(Session::Quit);
            }
            NavigationAction::ZoomIn => zoom_in(
                self.viewport,
                self.viewport.center(),
                self.navigation.zoom_factor(),
            ),
            NavigationAction::ZoomOut => zoom_out(
                self.viewport,
                self.viewport.center(),
                self.navigation.unzoom_factor(),
            ),
            NavigationAction::ZoomInAt(pixel) => match self.anchor_at(pixel) {
                Some(anchor) => zoom_in(self.viewport, anchor, self.navigation.zoom_factor()),
                None => return Ok(Session::Running),
            },
            NavigationAction::ZoomOutAt(pixel) => match self.anchor_at(pixel) {
                Some(anchor) => zoom_out(self.viewport, anchor, self.navigation.unzoom_factor()),
                None => return Ok(Session::Running),
            },
            NavigationAction::Pan(direction) => {
                pan(self.viewport, direction, self.navigation.pan_percent())
            }
        };

        self.apply(action, next)?;

        Ok(Session::Running)
    }

    fn anchor_at(&self, pixel: Point) -> Option<Complex> {
        match pixel_to_complex_coords(pixel, self.renderer.pixel_rect(), self.viewport) {
            Ok(anchor) => Some(anchor),
            Err(err) => {
                warn!("ignoring click: {}", err);
                None
            }
        }
    }

    fn apply(
        &mut self,
        action: NavigationAction,
        next: Result<Viewport, ViewportError>,
    ) -> Result<(), InteractiveError> {
        match next {
            Ok(viewport) if viewport == self.viewport => {
                warn!("{:?} leaves viewport {} unchanged", action, viewport);
                Ok(())
            }
            Ok(viewport) => {
                debug!("viewport {} -> {}", self.viewport, viewport);
                self.viewport = viewport;
                self.redraw()
            }
            Err(err) => {
                warn!("{:?} rejected, keeping viewport {}: {}", action, self.viewport, err);
                Ok(())
            }
        }
    }

    fn redraw(&mut self) -> Result<(), InteractiveError> {
        let algorithm = self
            .config
            .build_algorithm(self.renderer.pixel_rect(), self.viewport)?;

        let start = Instant::now();
        let pixel_buffer = self.renderer.draw(&algorithm, &self.colour_map)?;
        let render_duration = start.elapsed();

        self.generation += 1;
        info!(
            "frame {} rendered in {:?}",
            self.generation, render_duration
        );

        self.presenter.present(FrameData {
            generation: self.generation,
            pixel_buffer,
            viewport: self.viewport,
            render_duration,
        });

        Ok(())
    }
}
