//! BSR score: the root of the braille tree

use serde::Serialize;
use std::fmt::Write;

use super::line::LineElement;
use super::measure::MeasureElement;
use super::page::Page;
use crate::models;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TranscriptionNote {
    pub input_line: u32,
    pub text: String,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TranscriptionNotes {
    pub elements: Vec<TranscriptionNote>,
}

/// A braille score, borrowing the MSR score it was produced from
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Score<'a> {
    #[serde(skip)]
    pub source: &'a models::Score,
    pub transcription_notes: TranscriptionNotes,
    pub pages: Vec<Page>,
}

impl<'a> Score<'a> {
    pub fn new(source: &'a models::Score) -> Self {
        Self {
            source,
            transcription_notes: TranscriptionNotes::default(),
            pages: Vec::new(),
        }
    }

    /// Returns the index of the new page
    pub fn append_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    pub fn append_transcription_note(&mut self, note: TranscriptionNote) {
        self.transcription_notes.elements.push(note);
    }

    pub fn music_heading_count(&self) -> usize {
        self.pages.iter().filter(|page| page.music_heading.is_some()).count()
    }

    pub fn measure_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter())
            .map(|line| line.measures().count())
            .sum()
    }

    /// Compact indented dump, one element per line
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Score ({} pages)", self.pages.len());
        for note in &self.transcription_notes.elements {
            let _ = writeln!(out, "  TranscriptionNote \"{}\"", note.text);
        }
        for page in &self.pages {
            let _ = writeln!(
                out,
                "  Page {} (braille {}, {} lines/page)",
                page.print_page_number, page.braille_page_number, page.lines_per_page
            );
            if let Some(heading) = &page.page_heading {
                let _ = writeln!(out, "    PageHeading \"{}\"", heading.title);
            }
            if let Some(heading) = &page.music_heading {
                let _ = writeln!(out, "    MusicHeading");
                if let Some(key) = &heading.key {
                    let _ = writeln!(out, "      {}", key);
                }
                if let Some(time_signature) = &heading.time_signature {
                    let _ = writeln!(out, "      {}", time_signature);
                }
                if let Some(tempo) = &heading.tempo {
                    let _ = writeln!(out, "      {}", tempo);
                }
            }
            for line in &page.lines {
                let _ = writeln!(
                    out,
                    "    Line {} (braille {}, {} cells/line)",
                    line.print_line_number, line.braille_line_number, line.cells_per_line
                );
                for element in &line.elements {
                    match element {
                        LineElement::Spaces(spaces) => {
                            let _ = writeln!(out, "      Spaces {}", spaces.count);
                        }
                        LineElement::Key(key) => {
                            let _ = writeln!(out, "      {}", key);
                        }
                        LineElement::TimeSignature(time_signature) => {
                            let _ = writeln!(out, "      {}", time_signature);
                        }
                        LineElement::Tempo(tempo) => {
                            let _ = writeln!(out, "      {}", tempo);
                        }
                        LineElement::Measure(measure) => {
                            let _ = writeln!(out, "      Measure {}", measure.print_measure_number);
                            for element in &measure.elements {
                                let _ = match element {
                                    MeasureElement::Clef(clef) => writeln!(out, "        {}", clef),
                                    MeasureElement::BarLine(bar_line) => writeln!(out, "        {}", bar_line),
                                    MeasureElement::Number(number) => {
                                        writeln!(out, "        Number {}", number.value)
                                    }
                                    MeasureElement::Words(words) => {
                                        writeln!(out, "        Words \"{}\"", words.text)
                                    }
                                    MeasureElement::Note(note) => writeln!(out, "        {}", note),
                                    MeasureElement::Dynamic(dynamic) => {
                                        writeln!(out, "        Dynamic {}", dynamic.kind)
                                    }
                                };
                            }
                        }
                    }
                }
            }
            if let Some(foot_notes) = &page.foot_notes {
                for foot_note in &foot_notes.elements {
                    let _ = writeln!(out, "    FootNote \"{}\"", foot_note.text);
                }
            }
        }
        out
    }
}
