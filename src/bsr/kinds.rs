//! Enumerated kinds carried by BSR elements
//!
//! Each kind has an explicit "none" variant standing for "no braille
//! equivalent", which is what the mapping tables return for input values
//! they cannot express.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClefKind {
    None,
    GTreble,
    FBass,
    CAlto,
    CTenor,
    CBaritone,
    GSoprano,
    FBaritone,
    FSubBass,
    GOttavaAlta,
    GOttavaBassa,
    ModifiedBassForRightHandPart,
    ModifiedTrebleForLeftHandPart,
}

impl fmt::Display for ClefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClefKind::None => "none",
            ClefKind::GTreble => "gTreble",
            ClefKind::FBass => "fBass",
            ClefKind::CAlto => "cAlto",
            ClefKind::CTenor => "cTenor",
            ClefKind::CBaritone => "cBaritone",
            ClefKind::GSoprano => "gSoprano",
            ClefKind::FBaritone => "fBaritone",
            ClefKind::FSubBass => "fSubBass",
            ClefKind::GOttavaAlta => "gOttavaAlta",
            ClefKind::GOttavaBassa => "gOttavaBassa",
            ClefKind::ModifiedBassForRightHandPart => "modifiedBassForRightHandPart",
            ClefKind::ModifiedTrebleForLeftHandPart => "modifiedTrebleForLeftHandPart",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarLineKind {
    None,
    Special,
    Unusual,
    FinalDouble,
    SectionalDouble,
}

impl fmt::Display for BarLineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BarLineKind::None => "none",
            BarLineKind::Special => "special",
            BarLineKind::Unusual => "unusual",
            BarLineKind::FinalDouble => "finalDouble",
            BarLineKind::SectionalDouble => "sectionalDouble",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    None,
    Naturals,
    Flats,
    Sharps,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::None => "none",
            KeyKind::Naturals => "naturals",
            KeyKind::Flats => "flats",
            KeyKind::Sharps => "sharps",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSignatureKind {
    None,
    Common,
    Cut,
    Numerical,
    Note,
    DottedNote,
    SingleNumber,
    SenzaMisura,
}

impl fmt::Display for TimeSignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeSignatureKind::None => "none",
            TimeSignatureKind::Common => "common",
            TimeSignatureKind::Cut => "cut",
            TimeSignatureKind::Numerical => "numerical",
            TimeSignatureKind::Note => "note",
            TimeSignatureKind::DottedNote => "dottedNote",
            TimeSignatureKind::SingleNumber => "singleNumber",
            TimeSignatureKind::SenzaMisura => "senzaMisura",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccidentalKind {
    None,
    Sharp,
    Natural,
    Flat,
    DoubleFlat,
    DoubleSharp,
    QuarterSharp,
    QuarterFlat,
    ThreeQuarterSharp,
    ThreeQuarterFlat,
}

impl fmt::Display for AccidentalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccidentalKind::None => "none",
            AccidentalKind::Sharp => "sharp",
            AccidentalKind::Natural => "natural",
            AccidentalKind::Flat => "flat",
            AccidentalKind::DoubleFlat => "doubleFlat",
            AccidentalKind::DoubleSharp => "doubleSharp",
            AccidentalKind::QuarterSharp => "quarterSharp",
            AccidentalKind::QuarterFlat => "quarterFlat",
            AccidentalKind::ThreeQuarterSharp => "threeQuarterSharp",
            AccidentalKind::ThreeQuarterFlat => "threeQuarterFlat",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OctaveKind {
    None,
    Below1,
    Octave1,
    Octave2,
    Octave3,
    Octave4,
    Octave5,
    Octave6,
    Octave7,
    Above7,
}

impl OctaveKind {
    /// Octave 4 starts at middle C
    pub fn from_octave_number(octave: u8) -> Self {
        match octave {
            0 => OctaveKind::Below1,
            1 => OctaveKind::Octave1,
            2 => OctaveKind::Octave2,
            3 => OctaveKind::Octave3,
            4 => OctaveKind::Octave4,
            5 => OctaveKind::Octave5,
            6 => OctaveKind::Octave6,
            7 => OctaveKind::Octave7,
            _ => OctaveKind::Above7,
        }
    }
}

impl fmt::Display for OctaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OctaveKind::None => "none",
            OctaveKind::Below1 => "below1",
            OctaveKind::Octave1 => "1",
            OctaveKind::Octave2 => "2",
            OctaveKind::Octave3 => "3",
            OctaveKind::Octave4 => "4",
            OctaveKind::Octave5 => "5",
            OctaveKind::Octave6 => "6",
            OctaveKind::Octave7 => "7",
            OctaveKind::Above7 => "above7",
        };
        f.write_str(name)
    }
}

/// Whether a note value belongs to the larger (breve..8th) or the
/// smaller (16th..256th) braille value group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteValueSizeKind {
    None,
    Larger,
    Smaller,
}

impl fmt::Display for NoteValueSizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteValueSizeKind::None => "none",
            NoteValueSizeKind::Larger => "larger",
            NoteValueSizeKind::Smaller => "smaller",
        };
        f.write_str(name)
    }
}

/// Rest or diatonic step crossed with duration
///
/// Variants are laid out row by row (rest, then C through B), each row
/// running from 256th up to breve. `NoteValueKind::column` relies on
/// this layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteValueKind {
    None,

    Rest256th,
    Rest128th,
    Rest64th,
    Rest32nd,
    Rest16th,
    Rest8th,
    RestQuarter,
    RestHalf,
    RestWhole,
    RestBreve,

    C256th,
    C128th,
    C64th,
    C32nd,
    C16th,
    C8th,
    CQuarter,
    CHalf,
    CWhole,
    CBreve,

    D256th,
    D128th,
    D64th,
    D32nd,
    D16th,
    D8th,
    DQuarter,
    DHalf,
    DWhole,
    DBreve,

    E256th,
    E128th,
    E64th,
    E32nd,
    E16th,
    E8th,
    EQuarter,
    EHalf,
    EWhole,
    EBreve,

    F256th,
    F128th,
    F64th,
    F32nd,
    F16th,
    F8th,
    FQuarter,
    FHalf,
    FWhole,
    FBreve,

    G256th,
    G128th,
    G64th,
    G32nd,
    G16th,
    G8th,
    GQuarter,
    GHalf,
    GWhole,
    GBreve,

    A256th,
    A128th,
    A64th,
    A32nd,
    A16th,
    A8th,
    AQuarter,
    AHalf,
    AWhole,
    ABreve,

    B256th,
    B128th,
    B64th,
    B32nd,
    B16th,
    B8th,
    BQuarter,
    BHalf,
    BWhole,
    BBreve,
}

impl NoteValueKind {
    /// Durations per row, 256th through breve
    pub const COLUMNS: usize = 10;

    /// Column within its row (0 = 256th .. 9 = breve), None for `None`
    pub fn column(self) -> Option<usize> {
        match self as usize {
            0 => None,
            d => Some((d - 1) % Self::COLUMNS),
        }
    }

    pub fn is_rest(self) -> bool {
        matches!(self as usize, 1..=10)
    }

    pub fn size_kind(self) -> NoteValueSizeKind {
        match self.column() {
            None => NoteValueSizeKind::None,
            // 8th and longer
            Some(column) if column >= 5 => NoteValueSizeKind::Larger,
            Some(_) => NoteValueSizeKind::Smaller,
        }
    }
}

impl fmt::Display for NoteValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = match *self as usize {
            0 => return f.write_str("none"),
            1..=10 => "rest",
            11..=20 => "c",
            21..=30 => "d",
            31..=40 => "e",
            41..=50 => "f",
            51..=60 => "g",
            61..=70 => "a",
            _ => "b",
        };
        let column = match self.column() {
            Some(0) => "256th",
            Some(1) => "128th",
            Some(2) => "64th",
            Some(3) => "32nd",
            Some(4) => "16th",
            Some(5) => "8th",
            Some(6) => "Quarter",
            Some(7) => "Half",
            Some(8) => "Whole",
            _ => "Breve",
        };
        write!(f, "{}{}", row, column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempoKind {
    WordsOnly,
    PerMinute,
    Equivalence,
    NotesRelationship,
}

impl fmt::Display for TempoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TempoKind::WordsOnly => "wordsOnly",
            TempoKind::PerMinute => "perMinute",
            TempoKind::Equivalence => "equivalence",
            TempoKind::NotesRelationship => "notesRelationship",
        };
        f.write_str(name)
    }
}
