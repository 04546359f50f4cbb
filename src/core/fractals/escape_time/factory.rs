use crate::core::fractals::escape_time::kinds::RecurrenceKind;
use crate::core::fractals::escape_time::recurrence::{
    JuliaCubic, JuliaQuadratic, QuadraticSelf, Recurrence,
};

#[must_use]
pub fn recurrence_factory(kind: RecurrenceKind) -> Box<dyn Recurrence> {
    match kind {
        RecurrenceKind::JuliaQuadratic => Box::new(JuliaQuadratic),
        RecurrenceKind::JuliaCubic => Box::new(JuliaCubic),
        RecurrenceKind::Mandelbrot => Box::new(QuadraticSelf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(RecurrenceKind::ALL.first(), Some(&RecurrenceKind::default()));
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in RecurrenceKind::ALL {
            assert_eq!(recurrence_factory(kind).kind(), kind);
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = RecurrenceKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
