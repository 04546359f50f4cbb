//! Main GUI application loop.

use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{InteractiveController, Session};
use crate::core::data::point::Point;
use crate::core::navigation::NavigationAction;
use crate::input::cli::settings::Settings;
use crate::input::gui::errors::GuiError;
use crate::input::gui::keymap::{action_for_click, action_for_key};
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Runs the windowed explorer until the user quits or closes the window.
pub fn run_gui(settings: Settings) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;
    let pixel_rect = settings.pixel_rect;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Julia Explorer")
            .with_inner_size(PhysicalSize::new(pixel_rect.width(), pixel_rect.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, pixel_rect)?;
    let mut controller =
        InteractiveController::new(settings.julia, settings.navigation, pixel_rect, presenter)?;
    controller.start()?;

    let mut cursor: Option<(f32, f32)> = None;
    let mut failure: Option<GuiError> = None;

    event_loop.run(|event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        let action = match event {
            WindowEvent::CloseRequested => Some(NavigationAction::Quit),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                action_for_key(&event.logical_key, event.physical_key)
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Some((position.x as f32, position.y as f32));
                None
            }
            WindowEvent::CursorLeft { .. } => {
                cursor = None;
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => cursor
                .and_then(|position| controller.presenter().window_pos_to_pixel(position))
                .and_then(|(x, y)| {
                    action_for_click(
                        button,
                        Point {
                            x: x as i32,
                            y: y as i32,
                        },
                    )
                }),
            WindowEvent::RedrawRequested => {
                if let Err(err) = controller.presenter().render() {
                    error!("render failed: {}", err);
                    failure = Some(err.into());
                    elwt.exit();
                }
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            match controller.handle(action) {
                Ok(Session::Running) => {}
                Ok(Session::Quit) => elwt.exit(),
                Err(err) => {
                    error!("{}", err);
                    failure = Some(err.into());
                    elwt.exit();
                }
            }
        }
    })?;

    info!(
        "session ended after {} frames, {} presented last",
        controller.generation(),
        controller.presenter().last_presented_generation()
    );

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
