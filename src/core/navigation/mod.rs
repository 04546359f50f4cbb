pub mod action;
pub mod params;
pub mod transforms;

pub use action::{NavigationAction, PanDirection};
pub use params::{NavigationError, NavigationParams};
pub use transforms::{pan, zoom_in, zoom_out};
