//! BSR measures: one bar's worth of cell elements

use serde::{Deserialize, Serialize};

use super::elements::{BarLine, Clef, Dynamic, Note, Number, Words};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum MeasureElement {
    Clef(Clef),
    BarLine(BarLine),
    Number(Number),
    Words(Words),
    Note(Note),
    Dynamic(Dynamic),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Measure {
    pub input_line: u32,
    /// Number as printed in the source, copied verbatim
    pub print_measure_number: String,
    pub braille_measure_number: String,
    pub elements: Vec<MeasureElement>,
}

impl Measure {
    pub fn new(input_line: u32, print_measure_number: &str) -> Self {
        Self {
            input_line,
            print_measure_number: print_measure_number.to_string(),
            braille_measure_number: print_measure_number.to_string(),
            elements: Vec::new(),
        }
    }

    /// Same numbers, no elements
    pub fn newborn_clone(&self) -> Self {
        Self {
            input_line: self.input_line,
            print_measure_number: self.print_measure_number.clone(),
            braille_measure_number: self.braille_measure_number.clone(),
            elements: Vec::new(),
        }
    }

    pub fn append_clef(&mut self, clef: Clef) {
        self.elements.push(MeasureElement::Clef(clef));
    }

    pub fn append_bar_line(&mut self, bar_line: BarLine) {
        self.elements.push(MeasureElement::BarLine(bar_line));
    }

    pub fn append_number(&mut self, number: Number) {
        self.elements.push(MeasureElement::Number(number));
    }

    pub fn append_words(&mut self, words: Words) {
        self.elements.push(MeasureElement::Words(words));
    }

    pub fn append_note(&mut self, note: Note) {
        self.elements.push(MeasureElement::Note(note));
    }

    pub fn append_dynamic(&mut self, dynamic: Dynamic) {
        self.elements.push(MeasureElement::Dynamic(dynamic));
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.elements.iter().filter_map(|element| match element {
            MeasureElement::Note(note) => Some(note),
            _ => None,
        })
    }
}
