//! Octave mark necessity
//!
//! Braille music writes a note's octave only when the reader could not
//! infer it from the previous pitched note: steps and thirds never need
//! one, fourths and fifths need one when they cross into another octave,
//! and wider intervals always do.

use crate::models::Pitch;

/// Whether `current` needs an octave mark after `reference`
pub fn octave_mark_needed(current: &Pitch, reference: &Pitch) -> bool {
    let delta = (current.absolute_diatonic_index() - reference.absolute_diatonic_index()).abs();
    match delta {
        0..=2 => false,
        3 | 4 => current.octave != reference.octave,
        _ => true,
    }
}

/// Running octave context of a voice
///
/// `Unset` forces a mark on the next pitched note. It is the state at the
/// start of the score and after a line break, inserted words or a time
/// signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OctaveContext {
    #[default]
    Unset,
    Set,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Alteration, DiatonicStep};

    fn pitch(step: DiatonicStep, octave: u8) -> Pitch {
        Pitch::new(step, Alteration::Natural, octave)
    }

    #[test]
    fn test_second_needs_no_mark() {
        assert!(!octave_mark_needed(&pitch(DiatonicStep::D, 4), &pitch(DiatonicStep::C, 4)));
    }

    #[test]
    fn test_third_across_octave_needs_no_mark() {
        // B3 to D4 is a third
        assert!(!octave_mark_needed(&pitch(DiatonicStep::D, 4), &pitch(DiatonicStep::B, 3)));
    }

    #[test]
    fn test_fifth_within_octave_needs_no_mark() {
        assert!(!octave_mark_needed(&pitch(DiatonicStep::G, 4), &pitch(DiatonicStep::C, 4)));
    }

    #[test]
    fn test_fifth_across_octave_needs_mark() {
        assert!(octave_mark_needed(&pitch(DiatonicStep::C, 5), &pitch(DiatonicStep::F, 4)));
        assert!(octave_mark_needed(&pitch(DiatonicStep::F, 4), &pitch(DiatonicStep::C, 5)));
    }

    #[test]
    fn test_sixth_always_needs_mark() {
        assert!(octave_mark_needed(&pitch(DiatonicStep::A, 4), &pitch(DiatonicStep::C, 4)));
    }

    #[test]
    fn test_alterations_do_not_count() {
        let reference = Pitch::new(DiatonicStep::C, Alteration::Sharp, 4);
        let current = Pitch::new(DiatonicStep::E, Alteration::Flat, 4);
        assert!(!octave_mark_needed(&current, &reference));
    }
}
