//! Translation of key presses and mouse clicks into navigation actions.

use winit::event::MouseButton;
use winit::keyboard::{Key, KeyCode, NamedKey, PhysicalKey};

use crate::core::data::point::Point;
use crate::core::navigation::{NavigationAction, PanDirection};

pub fn action_for_key(logical_key: &Key, physical_key: PhysicalKey) -> Option<NavigationAction> {
    match physical_key {
        PhysicalKey::Code(KeyCode::NumpadAdd) => return Some(NavigationAction::ZoomIn),
        PhysicalKey::Code(KeyCode::NumpadSubtract) => return Some(NavigationAction::ZoomOut),
        _ => {}
    }

    match logical_key {
        Key::Named(NamedKey::ArrowUp) => Some(NavigationAction::Pan(PanDirection::Up)),
        Key::Named(NamedKey::ArrowDown) => Some(NavigationAction::Pan(PanDirection::Down)),
        Key::Named(NamedKey::ArrowLeft) => Some(NavigationAction::Pan(PanDirection::Left)),
        Key::Named(NamedKey::ArrowRight) => Some(NavigationAction::Pan(PanDirection::Right)),
        Key::Character(text) => match text.as_str() {
            "=" | "+" => Some(NavigationAction::ZoomIn),
            "-" => Some(NavigationAction::ZoomOut),
            "q" | "Q" => Some(NavigationAction::Quit),
            _ => None,
        },
        _ => None,
    }
}

pub fn action_for_click(button: MouseButton, pixel: Point) -> Option<NavigationAction> {
    match button {
        MouseButton::Left => Some(NavigationAction::ZoomInAt(pixel)),
        MouseButton::Right => Some(NavigationAction::ZoomOutAt(pixel)),
        _ => None,
    }
}
