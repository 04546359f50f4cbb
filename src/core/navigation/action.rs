use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete input understood by the navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Zoom in around the centre of the viewport.
    ZoomIn,
    /// Zoom out around the centre of the viewport.
    ZoomOut,
    /// Zoom in around the plane point under a pixel.
    ZoomInAt(Point),
    /// Zoom out around the plane point under a pixel.
    ZoomOutAt(Point),
    Pan(PanDirection),
    Quit,
}
