//! Clefs, keys, time signatures, tempos, dynamics and texts of the MSR tree

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch::{Alteration, DiatonicStep, DurationKind, SemitonesPitch};

// ============================================================================
// Clefs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClefKind {
    NoClef,
    Treble,
    TrebleMinus15,
    TrebleMinus8,
    TreblePlus8,
    TreblePlus15,
    Bass,
    BassMinus15,
    BassMinus8,
    BassPlus8,
    BassPlus15,
    Varbaritone,
    Tablature4,
    Tablature5,
    Tablature6,
    Tablature7,
    Percussion,
    Jianpu,
    Soprano,
    MezzoSoprano,
    Alto,
    Tenor,
    Baritone,
    TrebleLine1,
}

impl ClefKind {
    pub const COUNT: usize = 24;

    pub const ALL: [ClefKind; ClefKind::COUNT] = [
        ClefKind::NoClef,
        ClefKind::Treble,
        ClefKind::TrebleMinus15,
        ClefKind::TrebleMinus8,
        ClefKind::TreblePlus8,
        ClefKind::TreblePlus15,
        ClefKind::Bass,
        ClefKind::BassMinus15,
        ClefKind::BassMinus8,
        ClefKind::BassPlus8,
        ClefKind::BassPlus15,
        ClefKind::Varbaritone,
        ClefKind::Tablature4,
        ClefKind::Tablature5,
        ClefKind::Tablature6,
        ClefKind::Tablature7,
        ClefKind::Percussion,
        ClefKind::Jianpu,
        ClefKind::Soprano,
        ClefKind::MezzoSoprano,
        ClefKind::Alto,
        ClefKind::Tenor,
        ClefKind::Baritone,
        ClefKind::TrebleLine1,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clef {
    pub input_line: u32,
    pub kind: ClefKind,
}

impl Clef {
    pub fn new(input_line: u32, kind: ClefKind) -> Self {
        Self { input_line, kind }
    }
}

// ============================================================================
// Keys
// ============================================================================

/// How a key signature is specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    /// Tonic plus mode (e.g. A minor)
    Traditional,
    /// Explicit list of altered steps
    HumdrumScot,
}

impl KeyKind {
    pub const ALL: [KeyKind; 2] = [KeyKind::Traditional, KeyKind::HumdrumScot];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    NoMode,
    Major,
    Minor,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    pub const ALL: [Mode; 10] = [
        Mode::NoMode,
        Mode::Major,
        Mode::Minor,
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::NoMode => "noMode",
            Mode::Major => "major",
            Mode::Minor => "minor",
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
        };
        f.write_str(name)
    }
}

/// One altered step of a Humdrum/Scot key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumdrumScotKeyItem {
    pub step: DiatonicStep,
    pub alteration: Alteration,
    pub octave: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub input_line: u32,
    pub kind: KeyKind,
    /// Only meaningful for traditional keys
    pub tonic: SemitonesPitch,
    pub mode: Mode,
    /// Only meaningful for Humdrum/Scot keys
    #[serde(default)]
    pub items: Vec<HumdrumScotKeyItem>,
}

impl Key {
    pub fn traditional(input_line: u32, tonic: SemitonesPitch, mode: Mode) -> Self {
        Self {
            input_line,
            kind: KeyKind::Traditional,
            tonic,
            mode,
            items: Vec::new(),
        }
    }

    pub fn humdrum_scot(input_line: u32, items: Vec<HumdrumScotKeyItem>) -> Self {
        Self {
            input_line,
            kind: KeyKind::HumdrumScot,
            tonic: SemitonesPitch::natural(DiatonicStep::C),
            mode: Mode::NoMode,
            items,
        }
    }
}

// ============================================================================
// Time signatures
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSignatureSymbol {
    None,
    Common,
    Cut,
    Note,
    DottedNote,
    SingleNumber,
    SenzaMisura,
}

impl TimeSignatureSymbol {
    pub const ALL: [TimeSignatureSymbol; 7] = [
        TimeSignatureSymbol::None,
        TimeSignatureSymbol::Common,
        TimeSignatureSymbol::Cut,
        TimeSignatureSymbol::Note,
        TimeSignatureSymbol::DottedNote,
        TimeSignatureSymbol::SingleNumber,
        TimeSignatureSymbol::SenzaMisura,
    ];
}

/// Beats numbers over one beat value, e.g. `3+2/8` has beats `[3, 2]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignatureItem {
    pub beats_numbers: Vec<u32>,
    pub beat_value: u32,
}

impl TimeSignatureItem {
    pub fn new(beats_numbers: Vec<u32>, beat_value: u32) -> Self {
        Self { beats_numbers, beat_value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSignature {
    pub input_line: u32,
    pub symbol: TimeSignatureSymbol,
    #[serde(default)]
    pub items: Vec<TimeSignatureItem>,
}

impl TimeSignature {
    pub fn new(input_line: u32, symbol: TimeSignatureSymbol, items: Vec<TimeSignatureItem>) -> Self {
        Self { input_line, symbol, items }
    }

    /// Plain `beats/beat_value` signature with no symbol
    pub fn simple(input_line: u32, beats: u32, beat_value: u32) -> Self {
        Self::new(
            input_line,
            TimeSignatureSymbol::None,
            vec![TimeSignatureItem::new(vec![beats], beat_value)],
        )
    }
}

// ============================================================================
// Tempos
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempoKind {
    WordsOnly,
    PerMinute,
    Equivalence,
    NotesRelationship,
}

impl TempoKind {
    pub const ALL: [TempoKind; 4] = [
        TempoKind::WordsOnly,
        TempoKind::PerMinute,
        TempoKind::Equivalence,
        TempoKind::NotesRelationship,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tempo {
    pub input_line: u32,
    pub kind: TempoKind,
    #[serde(default)]
    pub words: Vec<String>,
    pub beat_unit: DurationKind,
    #[serde(default)]
    pub beat_unit_dots: u8,
    /// Metronome text, such as `"120"` or `"100-120"`
    #[serde(default)]
    pub per_minute: String,
}

impl Tempo {
    pub fn per_minute(input_line: u32, beat_unit: DurationKind, per_minute: &str) -> Self {
        Self {
            input_line,
            kind: TempoKind::PerMinute,
            words: Vec::new(),
            beat_unit,
            beat_unit_dots: 0,
            per_minute: per_minute.to_string(),
        }
    }

    pub fn words_only(input_line: u32, words: &str) -> Self {
        Self {
            input_line,
            kind: TempoKind::WordsOnly,
            words: vec![words.to_string()],
            beat_unit: DurationKind::NoDuration,
            beat_unit_dots: 0,
            per_minute: String::new(),
        }
    }
}

// ============================================================================
// Dynamics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DynamicKind {
    F,
    FF,
    FFF,
    FFFF,
    FFFFF,
    FFFFFF,
    P,
    PP,
    PPP,
    PPPP,
    PPPPP,
    PPPPPP,
    MF,
    MP,
    FP,
    FZ,
    PF,
    RF,
    SF,
    RFZ,
    SFZ,
    SFP,
    SFPP,
    SFFZ,
    SFZP,
    N,
}

impl DynamicKind {
    pub const ALL: [DynamicKind; 26] = [
        DynamicKind::F,
        DynamicKind::FF,
        DynamicKind::FFF,
        DynamicKind::FFFF,
        DynamicKind::FFFFF,
        DynamicKind::FFFFFF,
        DynamicKind::P,
        DynamicKind::PP,
        DynamicKind::PPP,
        DynamicKind::PPPP,
        DynamicKind::PPPPP,
        DynamicKind::PPPPPP,
        DynamicKind::MF,
        DynamicKind::MP,
        DynamicKind::FP,
        DynamicKind::FZ,
        DynamicKind::PF,
        DynamicKind::RF,
        DynamicKind::SF,
        DynamicKind::RFZ,
        DynamicKind::SFZ,
        DynamicKind::SFP,
        DynamicKind::SFPP,
        DynamicKind::SFFZ,
        DynamicKind::SFZP,
        DynamicKind::N,
    ];
}

impl fmt::Display for DynamicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variant names are the marking letters in upper case
        f.write_str(&format!("{:?}", self).to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dynamic {
    pub input_line: u32,
    pub kind: DynamicKind,
}

impl Dynamic {
    pub fn new(input_line: u32, kind: DynamicKind) -> Self {
        Self { input_line, kind }
    }
}

// ============================================================================
// Texts attached to notes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Words {
    pub input_line: u32,
    pub contents: String,
}

impl Words {
    pub fn new(input_line: u32, contents: &str) -> Self {
        Self { input_line, contents: contents.to_string() }
    }
}

/// One lyric syllable; elided syllables carry several texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syllable {
    pub input_line: u32,
    pub texts: Vec<String>,
}

impl Syllable {
    pub fn new(input_line: u32, text: &str) -> Self {
        Self { input_line, texts: vec![text.to_string()] }
    }

    pub fn text(&self) -> String {
        self.texts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clef_all_in_discriminant_order() {
        for (i, kind) in ClefKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn test_dynamic_display() {
        assert_eq!(DynamicKind::SFZ.to_string(), "sfz");
        assert_eq!(DynamicKind::MP.to_string(), "mp");
    }

    #[test]
    fn test_syllable_text_joins_elisions() {
        let syllable = Syllable {
            input_line: 1,
            texts: vec!["la".to_string(), "a".to_string()],
        };
        assert_eq!(syllable.text(), "la a");
    }

    #[test]
    fn test_simple_time_signature() {
        let ts = TimeSignature::simple(3, 3, 4);
        assert_eq!(ts.symbol, TimeSignatureSymbol::None);
        assert_eq!(ts.items, vec![TimeSignatureItem::new(vec![3], 4)]);
    }
}
