//! Pitch, accidental and duration vocabulary of the MSR tree
//!
//! These are the enumerations the braille mapping tables are keyed by.
//! Every enumeration exposes `ALL` so that tables can be checked for
//! totality by iterating over their input domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter-named pitch class, ignoring accidental and octave
///
/// The discriminant is the diatonic ordinal used by the octave-mark
/// heuristic (C = 0 .. B = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiatonicStep {
    C = 0,
    D = 1,
    E = 2,
    F = 3,
    G = 4,
    A = 5,
    B = 6,
}

impl DiatonicStep {
    pub const ALL: [DiatonicStep; 7] = [
        DiatonicStep::C,
        DiatonicStep::D,
        DiatonicStep::E,
        DiatonicStep::F,
        DiatonicStep::G,
        DiatonicStep::A,
        DiatonicStep::B,
    ];

    /// Ordinal within the octave (C = 0 .. B = 6)
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn letter(self) -> char {
        match self {
            DiatonicStep::C => 'C',
            DiatonicStep::D => 'D',
            DiatonicStep::E => 'E',
            DiatonicStep::F => 'F',
            DiatonicStep::G => 'G',
            DiatonicStep::A => 'A',
            DiatonicStep::B => 'B',
        }
    }
}

/// Chromatic alteration of a diatonic step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alteration {
    TripleFlat,
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
    TripleSharp,
}

impl Alteration {
    pub const ALL: [Alteration; 7] = [
        Alteration::TripleFlat,
        Alteration::DoubleFlat,
        Alteration::Flat,
        Alteration::Natural,
        Alteration::Sharp,
        Alteration::DoubleSharp,
        Alteration::TripleSharp,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Alteration::TripleFlat => "bbb",
            Alteration::DoubleFlat => "bb",
            Alteration::Flat => "b",
            Alteration::Natural => "",
            Alteration::Sharp => "#",
            Alteration::DoubleSharp => "##",
            Alteration::TripleSharp => "###",
        }
    }
}

/// A semitone pitch: letter name plus alteration, independent of octave
/// (e.g. sharp-C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemitonesPitch {
    pub step: DiatonicStep,
    pub alteration: Alteration,
}

impl SemitonesPitch {
    pub fn new(step: DiatonicStep, alteration: Alteration) -> Self {
        Self { step, alteration }
    }

    pub fn natural(step: DiatonicStep) -> Self {
        Self::new(step, Alteration::Natural)
    }
}

impl fmt::Display for SemitonesPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.step.letter(), self.alteration.symbol())
    }
}

/// An absolute pitch. Octave 4 starts at middle C, as in MusicXML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    pub step: DiatonicStep,
    pub alteration: Alteration,
    pub octave: u8,
}

impl Pitch {
    pub fn new(step: DiatonicStep, alteration: Alteration, octave: u8) -> Self {
        Self { step, alteration, octave }
    }

    /// Octave number × 7 + diatonic ordinal
    pub fn absolute_diatonic_index(&self) -> i32 {
        self.octave as i32 * 7 + self.step.ordinal()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.step.letter(), self.alteration.symbol(), self.octave)
    }
}

/// Accidental displayed in front of a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccidentalKind {
    None,
    Sharp,
    Natural,
    Flat,
    DoubleSharp,
    SharpSharp,
    FlatFlat,
    NaturalSharp,
    NaturalFlat,
    QuarterFlat,
    QuarterSharp,
    ThreeQuartersFlat,
    ThreeQuartersSharp,
    SharpDown,
    SharpUp,
    NaturalDown,
    NaturalUp,
    FlatDown,
    FlatUp,
    TripleSharp,
    TripleFlat,
    SlashQuarterSharp,
    SlashSharp,
    SlashFlat,
    DoubleSlashFlat,
    Sharp1,
    Sharp2,
    Sharp3,
    Sharp5,
    Flat1,
    Flat2,
    Flat3,
    Flat4,
    Sori,
    Koron,
    Other,
}

impl AccidentalKind {
    pub const COUNT: usize = 36;

    pub const ALL: [AccidentalKind; AccidentalKind::COUNT] = [
        AccidentalKind::None,
        AccidentalKind::Sharp,
        AccidentalKind::Natural,
        AccidentalKind::Flat,
        AccidentalKind::DoubleSharp,
        AccidentalKind::SharpSharp,
        AccidentalKind::FlatFlat,
        AccidentalKind::NaturalSharp,
        AccidentalKind::NaturalFlat,
        AccidentalKind::QuarterFlat,
        AccidentalKind::QuarterSharp,
        AccidentalKind::ThreeQuartersFlat,
        AccidentalKind::ThreeQuartersSharp,
        AccidentalKind::SharpDown,
        AccidentalKind::SharpUp,
        AccidentalKind::NaturalDown,
        AccidentalKind::NaturalUp,
        AccidentalKind::FlatDown,
        AccidentalKind::FlatUp,
        AccidentalKind::TripleSharp,
        AccidentalKind::TripleFlat,
        AccidentalKind::SlashQuarterSharp,
        AccidentalKind::SlashSharp,
        AccidentalKind::SlashFlat,
        AccidentalKind::DoubleSlashFlat,
        AccidentalKind::Sharp1,
        AccidentalKind::Sharp2,
        AccidentalKind::Sharp3,
        AccidentalKind::Sharp5,
        AccidentalKind::Flat1,
        AccidentalKind::Flat2,
        AccidentalKind::Flat3,
        AccidentalKind::Flat4,
        AccidentalKind::Sori,
        AccidentalKind::Koron,
        AccidentalKind::Other,
    ];
}

/// Graphic duration of a note, independent of dots and tuplets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationKind {
    NoDuration,
    N1024th,
    N512th,
    N256th,
    N128th,
    N64th,
    N32nd,
    N16th,
    Eighth,
    Quarter,
    Half,
    Whole,
    Breve,
    Longa,
    Maxima,
}

impl DurationKind {
    pub const COUNT: usize = 15;

    pub const ALL: [DurationKind; DurationKind::COUNT] = [
        DurationKind::NoDuration,
        DurationKind::N1024th,
        DurationKind::N512th,
        DurationKind::N256th,
        DurationKind::N128th,
        DurationKind::N64th,
        DurationKind::N32nd,
        DurationKind::N16th,
        DurationKind::Eighth,
        DurationKind::Quarter,
        DurationKind::Half,
        DurationKind::Whole,
        DurationKind::Breve,
        DurationKind::Longa,
        DurationKind::Maxima,
    ];
}

impl fmt::Display for DurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationKind::NoDuration => "noDuration",
            DurationKind::N1024th => "1024th",
            DurationKind::N512th => "512th",
            DurationKind::N256th => "256th",
            DurationKind::N128th => "128th",
            DurationKind::N64th => "64th",
            DurationKind::N32nd => "32nd",
            DurationKind::N16th => "16th",
            DurationKind::Eighth => "eighth",
            DurationKind::Quarter => "quarter",
            DurationKind::Half => "half",
            DurationKind::Whole => "whole",
            DurationKind::Breve => "breve",
            DurationKind::Longa => "longa",
            DurationKind::Maxima => "maxima",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_diatonic_index() {
        // Middle C
        assert_eq!(Pitch::new(DiatonicStep::C, Alteration::Natural, 4).absolute_diatonic_index(), 28);
        // B below middle C is one step lower
        assert_eq!(Pitch::new(DiatonicStep::B, Alteration::Natural, 3).absolute_diatonic_index(), 27);
        // Alteration does not move the diatonic index
        assert_eq!(Pitch::new(DiatonicStep::F, Alteration::Sharp, 4).absolute_diatonic_index(), 31);
    }

    #[test]
    fn test_all_arrays_are_in_discriminant_order() {
        for (i, kind) in AccidentalKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
        for (i, kind) in DurationKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
        for (i, step) in DiatonicStep::ALL.iter().enumerate() {
            assert_eq!(step.ordinal() as usize, i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SemitonesPitch::new(DiatonicStep::C, Alteration::Sharp).to_string(), "C#");
        assert_eq!(Pitch::new(DiatonicStep::E, Alteration::Flat, 5).to_string(), "Eb5");
    }
}
