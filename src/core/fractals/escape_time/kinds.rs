/// The closed set of recurrence rules the engine can iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecurrenceKind {
    #[default]
    JuliaQuadratic,
    JuliaCubic,
    Mandelbrot,
}

impl RecurrenceKind {
    pub const ALL: &'static [Self] = &[Self::JuliaQuadratic, Self::JuliaCubic, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JuliaQuadratic => "Julia z² + c",
            Self::JuliaCubic => "Julia z³ + c",
            Self::Mandelbrot => "Mandelbrot",
        }
    }
}

impl std::fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
