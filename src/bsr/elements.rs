//! Leaf elements of the BSR tree

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kinds::{
    AccidentalKind, BarLineKind, ClefKind, KeyKind, NoteValueKind, NoteValueSizeKind, OctaveKind,
    TempoKind, TimeSignatureKind,
};
use crate::models::DynamicKind;

/// Run of blank cells
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Spaces {
    pub input_line: u32,
    pub count: u32,
}

impl Spaces {
    pub fn new(input_line: u32, count: u32) -> Self {
        Self { input_line, count }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Clef {
    pub input_line: u32,
    pub kind: ClefKind,
}

impl Clef {
    pub fn new(input_line: u32, kind: ClefKind) -> Self {
        Self { input_line, kind }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clef {}, line {}", self.kind, self.input_line)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BarLine {
    pub input_line: u32,
    pub kind: BarLineKind,
}

impl BarLine {
    pub fn new(input_line: u32, kind: BarLineKind) -> Self {
        Self { input_line, kind }
    }
}

impl fmt::Display for BarLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BarLine {}, line {}", self.kind, self.input_line)
    }
}

/// Key signature as a count of naturals, sharps or flats
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Key {
    pub input_line: u32,
    pub kind: KeyKind,
    pub alterations: u32,
}

impl Key {
    pub fn new(input_line: u32, kind: KeyKind, alterations: u32) -> Self {
        Self { input_line, kind, alterations }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key {} {}, line {}", self.kind, self.alterations, self.input_line)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeSignatureItem {
    pub beats_numbers: Vec<u32>,
    pub beat_value: u32,
}

impl TimeSignatureItem {
    pub fn new(beats_numbers: Vec<u32>, beat_value: u32) -> Self {
        Self { beats_numbers, beat_value }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimeSignature {
    pub input_line: u32,
    pub kind: TimeSignatureKind,
    pub items: Vec<TimeSignatureItem>,
}

impl TimeSignature {
    pub fn new(input_line: u32, kind: TimeSignatureKind) -> Self {
        Self { input_line, kind, items: Vec::new() }
    }

    pub fn append_item(&mut self, item: TimeSignatureItem) {
        self.items.push(item);
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSignature {}", self.kind)?;
        for item in &self.items {
            let beats: Vec<String> = item.beats_numbers.iter().map(u32::to_string).collect();
            write!(f, " {}/{}", beats.join("+"), item.beat_value)?;
        }
        write!(f, ", line {}", self.input_line)
    }
}

/// Metronome range; `min == max` for a single value
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerMinute {
    pub min: u32,
    pub max: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tempo {
    pub input_line: u32,
    pub kind: TempoKind,
    pub words: Vec<String>,
    pub beat_unit_value: NoteValueKind,
    pub beat_unit_dots: u8,
    pub per_minute: Option<PerMinute>,
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tempo {}", self.kind)?;
        if !self.words.is_empty() {
            write!(f, " \"{}\"", self.words.join(" "))?;
        }
        if let Some(per_minute) = self.per_minute {
            write!(f, " {}", self.beat_unit_value)?;
            for _ in 0..self.beat_unit_dots {
                f.write_str(".")?;
            }
            if per_minute.min == per_minute.max {
                write!(f, " = {}", per_minute.min)?;
            } else {
                write!(f, " = {}-{}", per_minute.min, per_minute.max)?;
            }
        }
        write!(f, ", line {}", self.input_line)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Words {
    pub input_line: u32,
    pub text: String,
}

impl Words {
    pub fn new(input_line: u32, text: &str) -> Self {
        Self { input_line, text: text.to_string() }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dynamic {
    pub input_line: u32,
    pub kind: DynamicKind,
}

impl Dynamic {
    pub fn new(input_line: u32, kind: DynamicKind) -> Self {
        Self { input_line, kind }
    }
}

/// Braille number, preceded by a numeric indicator when `sign_needed`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Number {
    pub input_line: u32,
    pub value: i32,
    pub sign_needed: bool,
}

impl Number {
    pub fn new(input_line: u32, value: i32, sign_needed: bool) -> Self {
        Self { input_line, value, sign_needed }
    }
}

/// A pitched note or a rest, with its octave-mark decision
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Note {
    pub input_line: u32,
    pub value: NoteValueKind,
    pub dots: u8,
    pub value_size_sign_needed: bool,
    pub octave: OctaveKind,
    pub octave_mark_needed: bool,
    pub accidental: AccidentalKind,
}

impl Note {
    pub fn size_kind(&self) -> NoteValueSizeKind {
        self.value.size_kind()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Note {}", self.value)?;
        for _ in 0..self.dots {
            f.write_str(".")?;
        }
        write!(f, " octave {}", self.octave)?;
        if self.octave_mark_needed {
            f.write_str(" (mark)")?;
        }
        if self.accidental != AccidentalKind::None {
            write!(f, " {}", self.accidental)?;
        }
        write!(f, ", line {}", self.input_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_signature_display() {
        let mut ts = TimeSignature::new(3, TimeSignatureKind::Numerical);
        ts.append_item(TimeSignatureItem::new(vec![3, 2], 8));
        assert_eq!(ts.to_string(), "TimeSignature numerical 3+2/8, line 3");
    }

    #[test]
    fn test_tempo_display_range() {
        let tempo = Tempo {
            input_line: 7,
            kind: TempoKind::PerMinute,
            words: Vec::new(),
            beat_unit_value: NoteValueKind::CQuarter,
            beat_unit_dots: 1,
            per_minute: Some(PerMinute { min: 100, max: 120 }),
        };
        assert_eq!(tempo.to_string(), "Tempo perMinute cQuarter. = 100-120, line 7");
    }

    #[test]
    fn test_note_display_mentions_mark() {
        let note = Note {
            input_line: 12,
            value: NoteValueKind::CQuarter,
            dots: 0,
            value_size_sign_needed: false,
            octave: OctaveKind::Octave4,
            octave_mark_needed: true,
            accidental: AccidentalKind::Sharp,
        };
        assert_eq!(note.to_string(), "Note cQuarter octave 4 (mark) sharp, line 12");
    }
}
