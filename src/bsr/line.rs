//! BSR lines
//!
//! A line holds measures plus the line-level elements that braille places
//! between them (keys, time signatures, tempos). Consecutive line elements
//! are separated by one-cell `Spaces`: appending a measure, key, time
//! signature or tempo raises `a_space_is_needed`, and the next append
//! emits the space first.

use serde::{Deserialize, Serialize};

use super::elements::{Key, Spaces, Tempo, TimeSignature};
use super::measure::Measure;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum LineElement {
    Spaces(Spaces),
    Measure(Measure),
    Key(Key),
    TimeSignature(TimeSignature),
    Tempo(Tempo),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Line {
    pub input_line: u32,
    pub print_line_number: u32,
    pub braille_line_number: u32,
    pub cells_per_line: u32,
    pub elements: Vec<LineElement>,
    #[serde(skip)]
    a_space_is_needed: bool,
}

impl Line {
    pub fn new(input_line: u32, print_line_number: u32, cells_per_line: u32) -> Self {
        Self {
            input_line,
            print_line_number,
            braille_line_number: print_line_number,
            cells_per_line,
            elements: Vec::new(),
            a_space_is_needed: true,
        }
    }

    /// Same numbers and capacity, no elements
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::new(self.input_line, self.print_line_number, self.cells_per_line);
        clone.braille_line_number = self.braille_line_number;
        clone
    }

    pub fn a_space_is_needed(&self) -> bool {
        self.a_space_is_needed
    }

    /// Append, emitting the pending space first. Returns the element's index.
    fn append_element(&mut self, element: LineElement) -> usize {
        if self.a_space_is_needed {
            self.elements.push(LineElement::Spaces(Spaces::new(self.input_line, 1)));
            self.a_space_is_needed = false;
        }
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn append_measure(&mut self, measure: Measure) -> usize {
        let index = self.append_element(LineElement::Measure(measure));
        self.a_space_is_needed = true;
        index
    }

    pub fn append_key(&mut self, key: Key) -> usize {
        let index = self.append_element(LineElement::Key(key));
        self.a_space_is_needed = true;
        index
    }

    pub fn append_time_signature(&mut self, time_signature: TimeSignature) -> usize {
        let index = self.append_element(LineElement::TimeSignature(time_signature));
        self.a_space_is_needed = true;
        index
    }

    pub fn append_tempo(&mut self, tempo: Tempo) -> usize {
        let index = self.append_element(LineElement::Tempo(tempo));
        self.a_space_is_needed = true;
        index
    }

    /// Insert a time signature, followed by a one-cell space, in front of
    /// the element at `index`, usually the measure it belongs to.
    ///
    /// An index past the end appends it instead. Returns the index it landed
    /// at; elements that were at or after that index moved right by the
    /// number of elements added.
    pub fn insert_time_signature_before(&mut self, index: usize, time_signature: TimeSignature) -> usize {
        if index >= self.elements.len() {
            log::warn!(
                "Line {} has no element {}, appending time signature at line {} instead of inserting it",
                self.print_line_number,
                index,
                time_signature.input_line
            );
            return self.append_time_signature(time_signature);
        }
        self.elements.insert(index, LineElement::TimeSignature(time_signature));
        self.elements
            .insert(index + 1, LineElement::Spaces(Spaces::new(self.input_line, 1)));
        index
    }

    pub fn measure_mut(&mut self, index: usize) -> Option<&mut Measure> {
        match self.elements.get_mut(index) {
            Some(LineElement::Measure(measure)) => Some(measure),
            _ => None,
        }
    }

    pub fn measures(&self) -> impl Iterator<Item = &Measure> {
        self.elements.iter().filter_map(|element| match element {
            LineElement::Measure(measure) => Some(measure),
            _ => None,
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.elements.iter().filter_map(|element| match element {
            LineElement::Key(key) => Some(key),
            _ => None,
        })
    }

    pub fn time_signatures(&self) -> impl Iterator<Item = &TimeSignature> {
        self.elements.iter().filter_map(|element| match element {
            LineElement::TimeSignature(time_signature) => Some(time_signature),
            _ => None,
        })
    }

    pub fn tempos(&self) -> impl Iterator<Item = &Tempo> {
        self.elements.iter().filter_map(|element| match element {
            LineElement::Tempo(tempo) => Some(tempo),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsr::kinds::{KeyKind, TimeSignatureKind};

    fn kinds(line: &Line) -> Vec<&'static str> {
        line.elements
            .iter()
            .map(|element| match element {
                LineElement::Spaces(_) => "spaces",
                LineElement::Measure(_) => "measure",
                LineElement::Key(_) => "key",
                LineElement::TimeSignature(_) => "time",
                LineElement::Tempo(_) => "tempo",
            })
            .collect()
    }

    #[test]
    fn test_new_line_needs_a_space() {
        let mut line = Line::new(1, 1, 30);
        assert!(line.a_space_is_needed());
        let index = line.append_measure(Measure::new(1, "1"));
        assert_eq!(index, 1);
        assert_eq!(kinds(&line), vec!["spaces", "measure"]);
    }

    #[test]
    fn test_measures_are_separated_by_spaces() {
        let mut line = Line::new(1, 1, 30);
        line.append_measure(Measure::new(1, "1"));
        line.append_key(Key::new(2, KeyKind::Sharps, 2));
        line.append_measure(Measure::new(3, "2"));
        assert_eq!(
            kinds(&line),
            vec!["spaces", "measure", "spaces", "key", "spaces", "measure"]
        );
    }

    #[test]
    fn test_insert_before_measure_keeps_spacing() {
        let mut line = Line::new(1, 1, 30);
        line.append_measure(Measure::new(1, "1"));
        let second = line.append_measure(Measure::new(2, "2"));
        line.append_key(Key::new(3, KeyKind::Sharps, 2));

        let index = line.insert_time_signature_before(second, TimeSignature::new(4, TimeSignatureKind::Common));
        assert_eq!(index, 3);
        assert_eq!(
            kinds(&line),
            vec!["spaces", "measure", "spaces", "time", "spaces", "measure", "spaces", "key"]
        );
        assert!(line.measure_mut(5).is_some());
        // The trailing key still wants a space after it
        assert!(line.a_space_is_needed());
    }

    #[test]
    fn test_insert_into_empty_line_appends() {
        let mut line = Line::new(1, 1, 30);
        let index = line.insert_time_signature_before(0, TimeSignature::new(2, TimeSignatureKind::Cut));
        assert_eq!(index, 1);
        assert_eq!(kinds(&line), vec!["spaces", "time"]);
        assert!(line.a_space_is_needed());
    }

    #[test]
    fn test_newborn_clone() {
        let mut line = Line::new(4, 2, 40);
        line.braille_line_number = 3;
        line.append_measure(Measure::new(4, "7"));

        let clone = line.newborn_clone();
        assert_eq!(clone.print_line_number, 2);
        assert_eq!(clone.braille_line_number, 3);
        assert_eq!(clone.cells_per_line, 40);
        assert!(clone.elements.is_empty());
        assert!(clone.a_space_is_needed());
    }
}
