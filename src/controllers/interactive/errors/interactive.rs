use crate::core::actions::render::renderer::RenderError;
use crate::core::fractals::julia::errors::julia::JuliaError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum InteractiveError {
    Julia(JuliaError),
    Render(RenderError),
}

impl fmt::Display for InteractiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Julia(err) => write!(f, "invalid fractal settings: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for InteractiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Julia(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<JuliaError> for InteractiveError {
    fn from(err: JuliaError) -> Self {
        Self::Julia(err)
    }
}

impl From<RenderError> for InteractiveError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
