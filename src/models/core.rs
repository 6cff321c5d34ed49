//! Core MSR tree: score, part groups, parts, staves, voices, measures, notes
//!
//! The tree is built by an earlier pass and consumed read-only here.
//! Containers own their children in document order.

use serde::{Deserialize, Serialize};

use super::barlines::BarLine;
use super::notation::{Clef, Dynamic, Key, Syllable, Tempo, TimeSignature, Words};
use super::pitch::{AccidentalKind, DurationKind, Pitch};

/// Work and movement titles, used for the braille page heading
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Identification {
    #[serde(default)]
    pub work_title: Option<String>,
    #[serde(default)]
    pub movement_title: Option<String>,
    #[serde(default)]
    pub composer: Option<String>,
}

impl Identification {
    /// Work title, falling back to the movement title
    pub fn title(&self) -> Option<&str> {
        self.work_title
            .as_deref()
            .or(self.movement_title.as_deref())
            .filter(|title| !title.trim().is_empty())
    }
}

/// Root of the MSR tree
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Score {
    #[serde(default)]
    pub input_line: u32,
    #[serde(default)]
    pub identification: Identification,
    #[serde(default)]
    pub part_groups: Vec<PartGroup>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every part, depth-first through nested part groups
    pub fn parts(&self) -> Vec<&Part> {
        let mut parts = Vec::new();
        for group in &self.part_groups {
            group.collect_parts(&mut parts);
        }
        parts
    }

    /// Number of measures over all voices
    pub fn measure_count(&self) -> usize {
        self.parts()
            .iter()
            .flat_map(|part| part.staves.iter())
            .flat_map(|staff| staff.voices.iter())
            .map(|voice| voice.measures.len())
            .sum()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PartGroup {
    #[serde(default)]
    pub input_line: u32,
    #[serde(default)]
    pub elements: Vec<PartGroupElement>,
}

impl PartGroup {
    fn collect_parts<'a>(&'a self, parts: &mut Vec<&'a Part>) {
        for element in &self.elements {
            match element {
                PartGroupElement::PartGroup(group) => group.collect_parts(parts),
                PartGroupElement::Part(part) => parts.push(part),
            }
        }
    }
}

/// Part groups may nest
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum PartGroupElement {
    PartGroup(PartGroup),
    Part(Part),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub input_line: u32,
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub staves: Vec<Staff>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Staff {
    #[serde(default)]
    pub input_line: u32,
    pub number: u32,
    #[serde(default)]
    pub voices: Vec<Voice>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Voice {
    #[serde(default)]
    pub input_line: u32,
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Measure {
    #[serde(default)]
    pub input_line: u32,
    /// Measure number as printed, copied verbatim (e.g. "1", "12a", "X1")
    pub number: String,
    #[serde(default)]
    pub elements: Vec<MeasureElement>,
}

impl Measure {
    pub fn new(input_line: u32, number: &str) -> Self {
        Self {
            input_line,
            number: number.to_string(),
            elements: Vec::new(),
        }
    }
}

/// Everything a measure can contain, in document order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum MeasureElement {
    Clef(Clef),
    Key(Key),
    TimeSignature(TimeSignature),
    Tempo(Tempo),
    Note(Note),
    BarLine(BarLine),
    LineBreak(LineBreak),
    PageBreak(PageBreak),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineBreak {
    pub input_line: u32,
    /// Number of the measure following the break
    #[serde(default)]
    pub next_bar_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PageBreak {
    pub input_line: u32,
}

/// A pitched note or a rest
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Note {
    pub input_line: u32,
    /// None for rests
    pub pitch: Option<Pitch>,
    pub graphic_duration: DurationKind,
    #[serde(default)]
    pub dots: u8,
    #[serde(default = "default_accidental")]
    pub accidental: AccidentalKind,
    #[serde(default)]
    pub belongs_to_chord: bool,
    #[serde(default)]
    pub words: Vec<Words>,
    #[serde(default)]
    pub lyrics: Vec<Syllable>,
    #[serde(default)]
    pub dynamics: Vec<Dynamic>,
}

fn default_accidental() -> AccidentalKind {
    AccidentalKind::None
}

impl Note {
    pub fn pitched(input_line: u32, pitch: Pitch, graphic_duration: DurationKind) -> Self {
        Self {
            input_line,
            pitch: Some(pitch),
            graphic_duration,
            dots: 0,
            accidental: AccidentalKind::None,
            belongs_to_chord: false,
            words: Vec::new(),
            lyrics: Vec::new(),
            dynamics: Vec::new(),
        }
    }

    pub fn rest(input_line: u32, graphic_duration: DurationKind) -> Self {
        Self {
            input_line,
            pitch: None,
            graphic_duration,
            dots: 0,
            accidental: AccidentalKind::None,
            belongs_to_chord: false,
            words: Vec::new(),
            lyrics: Vec::new(),
            dynamics: Vec::new(),
        }
    }

    pub fn is_rest(&self) -> bool {
        self.pitch.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pitch::{Alteration, DiatonicStep};

    fn voice_with_measures(count: usize) -> Voice {
        Voice {
            input_line: 0,
            number: 1,
            name: String::new(),
            measures: (1..=count).map(|n| Measure::new(0, &n.to_string())).collect(),
        }
    }

    #[test]
    fn test_parts_are_collected_through_nested_groups() {
        let inner = PartGroup {
            input_line: 0,
            elements: vec![PartGroupElement::Part(Part { id: "P2".into(), ..Default::default() })],
        };
        let score = Score {
            part_groups: vec![PartGroup {
                input_line: 0,
                elements: vec![
                    PartGroupElement::Part(Part { id: "P1".into(), ..Default::default() }),
                    PartGroupElement::PartGroup(inner),
                ],
            }],
            ..Default::default()
        };

        let ids: Vec<&str> = score.parts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2"]);
    }

    #[test]
    fn test_measure_count_sums_voices() {
        let staff = Staff {
            input_line: 0,
            number: 1,
            voices: vec![voice_with_measures(3), voice_with_measures(2)],
        };
        let score = Score {
            part_groups: vec![PartGroup {
                input_line: 0,
                elements: vec![PartGroupElement::Part(Part {
                    id: "P1".into(),
                    staves: vec![staff],
                    ..Default::default()
                })],
            }],
            ..Default::default()
        };
        assert_eq!(score.measure_count(), 5);
    }

    #[test]
    fn test_title_falls_back_to_movement_title() {
        let identification = Identification {
            work_title: None,
            movement_title: Some("Allegro".into()),
            composer: None,
        };
        assert_eq!(identification.title(), Some("Allegro"));
        assert_eq!(Identification::default().title(), None);
    }

    #[test]
    fn test_rest_has_no_pitch() {
        let rest = Note::rest(4, DurationKind::Half);
        assert!(rest.is_rest());
        let note = Note::pitched(5, Pitch::new(DiatonicStep::A, Alteration::Natural, 4), DurationKind::Half);
        assert!(!note.is_rest());
    }
}
