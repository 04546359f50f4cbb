#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JuliaColourMapKinds {
    #[default]
    Waves,
    Grayscale,
    Cornflower,
    Chaos,
    Violet,
}

impl JuliaColourMapKinds {
    pub const ALL: &'static [Self] = &[
        Self::Waves,
        Self::Grayscale,
        Self::Cornflower,
        Self::Chaos,
        Self::Violet,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Waves => "Waves",
            Self::Grayscale => "Grayscale",
            Self::Cornflower => "Cornflower",
            Self::Chaos => "Chaos",
            Self::Violet => "Violet",
        }
    }
}

impl std::fmt::Display for JuliaColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
