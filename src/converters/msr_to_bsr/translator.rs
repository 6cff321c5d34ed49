//! MSR to BSR translator
//!
//! A single forward walk over the MSR tree, in document order, that emits
//! braille pages, lines and measures as it goes.
//!
//! # Traversal state
//!
//! ```text
//! score ─► page 1 (music heading, page heading) ─► line 1
//!   part group* ─► part ─► staff ─► voice ─► measure ─► element
//!                                                 │
//!             line break ─► new line ──────────────┤
//!             page break ─► new page + new line ───┘
//! ```
//!
//! The current line and measure are kept as index paths into the score
//! being built, never as references into it. The octave reference note is
//! a borrow of the MSR note last visited.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ConversionError;
use super::octave::{octave_mark_needed, OctaveContext};
use super::settings::TranslationSettings;
use super::tables;
use crate::bsr;
use crate::diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
use crate::models as msr;

/// `"120"` or `"100-120"`, spaces allowed around the parts
static PER_MINUTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s*(?:-\s*(\d+)\s*)?$").expect("invalid regex pattern")
});

/// Translate an MSR score into a first, unfinalized BSR score
pub fn translate<'a>(
    score: &'a msr::Score,
    settings: &TranslationSettings,
    diagnostics: &mut Diagnostics,
) -> Result<bsr::Score<'a>, ConversionError> {
    settings.validate()?;

    let mut translator = Translator::new(score, settings, diagnostics);
    translator.visit_score(score);

    log::debug!(
        "Translated MSR score into {} page(s), {} measure(s)",
        translator.score.pages.len(),
        translator.score.measure_count()
    );
    Ok(translator.score)
}

/// Parse a metronome text into a braille per-minute range
pub fn parse_per_minute(text: &str) -> Option<bsr::PerMinute> {
    let captures = PER_MINUTE_REGEX.captures(text)?;
    let min: u32 = captures.get(1)?.as_str().parse().ok()?;
    let max = match captures.get(2) {
        Some(max) => max.as_str().parse().ok()?,
        None => min,
    };
    Some(bsr::PerMinute { min, max })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LinePath {
    page: usize,
    line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MeasurePath {
    page: usize,
    line: usize,
    element: usize,
}

struct Translator<'a, 's> {
    settings: &'s TranslationSettings,
    diagnostics: &'s mut Diagnostics,
    score: bsr::Score<'a>,

    print_page_number: u32,
    print_line_number: u32,
    current_line: LinePath,
    current_measure: Option<MeasurePath>,
    current_measure_number: Option<&'a str>,

    first_key_seen: bool,
    first_time_signature_seen: bool,

    octave_context: OctaveContext,
    reference_note: Option<&'a msr::Note>,
    note_value_size: bsr::NoteValueSizeKind,
}

impl<'a, 's> Translator<'a, 's> {
    fn new(source: &'a msr::Score, settings: &'s TranslationSettings, diagnostics: &'s mut Diagnostics) -> Self {
        Self {
            settings,
            diagnostics,
            score: bsr::Score::new(source),
            print_page_number: 1,
            print_line_number: 1,
            current_line: LinePath { page: 0, line: 0 },
            current_measure: None,
            current_measure_number: None,
            first_key_seen: false,
            first_time_signature_seen: false,
            octave_context: OctaveContext::Unset,
            reference_note: None,
            note_value_size: bsr::NoteValueSizeKind::Larger,
        }
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    fn visit_score(&mut self, score: &'a msr::Score) {
        log::debug!("Visiting MSR score, line {}", score.input_line);

        self.score.append_transcription_note(bsr::TranscriptionNote {
            input_line: score.input_line,
            text: format!("This Braille data created by {}", self.settings.service_name),
        });

        let mut page = bsr::Page::new(score.input_line, self.print_page_number, self.settings.lines_per_page);
        page.set_music_heading(bsr::MusicHeading::new(score.input_line));
        if let Some(title) = score.identification.title() {
            page.set_page_heading(bsr::PageHeading {
                input_line: score.input_line,
                title: title.to_string(),
                pagination: bsr::Pagination {
                    print_page_number: 1,
                    braille_page_number: 1,
                },
                page_heading_number: 1,
            });
        }
        let page_index = self.score.append_page(page);
        self.open_line(page_index, score.input_line);

        for part_group in &score.part_groups {
            self.visit_part_group(part_group);
        }
    }

    fn visit_part_group(&mut self, part_group: &'a msr::PartGroup) {
        log::debug!("Visiting part group, line {}", part_group.input_line);
        for element in &part_group.elements {
            match element {
                msr::PartGroupElement::PartGroup(nested) => self.visit_part_group(nested),
                msr::PartGroupElement::Part(part) => self.visit_part(part),
            }
        }
    }

    fn visit_part(&mut self, part: &'a msr::Part) {
        log::debug!("Visiting part \"{}\", line {}", part.id, part.input_line);
        for staff in &part.staves {
            log::debug!("Visiting staff {}, line {}", staff.number, staff.input_line);
            for voice in &staff.voices {
                self.visit_voice(voice);
            }
        }
    }

    fn visit_voice(&mut self, voice: &'a msr::Voice) {
        log::debug!("Visiting voice {} \"{}\", line {}", voice.number, voice.name, voice.input_line);

        self.reference_note = None;
        self.octave_context = OctaveContext::Unset;

        for measure in &voice.measures {
            self.visit_measure(measure);
        }
    }

    fn visit_measure(&mut self, measure: &'a msr::Measure) {
        log::debug!("Visiting measure {}, line {}", measure.number, measure.input_line);

        let path = self.current_line;
        let element_index = match self.current_line_mut() {
            Some(line) => line.append_measure(bsr::Measure::new(measure.input_line, &measure.number)),
            None => return,
        };
        self.current_measure = Some(MeasurePath {
            page: path.page,
            line: path.line,
            element: element_index,
        });
        self.current_measure_number = Some(measure.number.as_str());

        for element in &measure.elements {
            match element {
                msr::MeasureElement::Clef(clef) => self.visit_clef(clef),
                msr::MeasureElement::Key(key) => self.visit_key(key),
                msr::MeasureElement::TimeSignature(time_signature) => self.visit_time_signature(time_signature),
                msr::MeasureElement::Tempo(tempo) => self.visit_tempo(tempo),
                msr::MeasureElement::Note(note) => self.visit_note(note),
                msr::MeasureElement::BarLine(bar_line) => self.visit_bar_line(bar_line),
                msr::MeasureElement::LineBreak(line_break) => self.visit_line_break(line_break),
                msr::MeasureElement::PageBreak(page_break) => self.visit_page_break(page_break),
            }
        }
    }

    fn visit_line_break(&mut self, line_break: &msr::LineBreak) {
        log::debug!(
            "Visiting line break, next bar {:?}, line {}",
            line_break.next_bar_number,
            line_break.input_line
        );
        self.print_line_number += 1;
        let page = self.current_line.page;
        self.open_line(page, line_break.input_line);
    }

    fn visit_page_break(&mut self, page_break: &msr::PageBreak) {
        log::debug!("Visiting page break, line {}", page_break.input_line);

        self.print_page_number += 1;
        let page_index = self.score.append_page(bsr::Page::new(
            page_break.input_line,
            self.print_page_number,
            self.settings.lines_per_page,
        ));

        self.print_line_number += 1;
        self.open_line(page_index, page_break.input_line);
    }

    /// Append a fresh line to the given page and make it current.
    /// The next pitched note then carries an octave mark.
    fn open_line(&mut self, page_index: usize, input_line: u32) {
        let line = bsr::Line::new(input_line, self.print_line_number, self.settings.cells_per_line);
        if let Some(page) = self.score.pages.get_mut(page_index) {
            let line_index = page.append_line(line);
            self.current_line = LinePath {
                page: page_index,
                line: line_index,
            };
        }
        self.octave_context = OctaveContext::Unset;
        self.reference_note = None;
    }

    // ------------------------------------------------------------------
    // Line-level elements
    // ------------------------------------------------------------------

    fn visit_key(&mut self, key: &msr::Key) {
        let (kind, alterations) = match key.kind {
            msr::KeyKind::Traditional => tables::key_kind_and_alterations(key.tonic, key.mode),
            msr::KeyKind::HumdrumScot => {
                self.report(
                    key.input_line,
                    "unmapped_humdrum_scot_key",
                    format!("Humdrum/Scot key with {} item(s) has no braille mapping", key.items.len()),
                );
                return;
            }
        };
        if kind == bsr::KeyKind::None {
            self.report(
                key.input_line,
                "unsupported_key",
                format!("Key {} {} has no braille equivalent", key.tonic, key.mode),
            );
            return;
        }

        let bsr_key = bsr::Key::new(key.input_line, kind, alterations);
        let heading = if self.first_key_seen {
            None
        } else {
            self.music_heading_mut()
        };
        let leftover = bsr::place_key(heading, bsr_key);
        self.first_key_seen = true;

        if let Some(bsr_key) = leftover {
            if let Some(line) = self.current_line_mut() {
                line.append_key(bsr_key);
            }
        }
    }

    fn visit_time_signature(&mut self, time_signature: &msr::TimeSignature) {
        let mut kind = tables::time_signature_kind(time_signature.symbol);
        if kind == bsr::TimeSignatureKind::None {
            if time_signature.items.is_empty() {
                self.report(
                    time_signature.input_line,
                    "unsupported_time_signature",
                    format!("Time signature {:?} without items has no braille equivalent", time_signature.symbol),
                );
                return;
            }
            kind = bsr::TimeSignatureKind::Numerical;
        }

        let mut bsr_time_signature = bsr::TimeSignature::new(time_signature.input_line, kind);
        for item in &time_signature.items {
            for beats in &item.beats_numbers {
                bsr_time_signature.append_item(bsr::TimeSignatureItem::new(vec![*beats], item.beat_value));
            }
        }

        let heading = if self.first_time_signature_seen {
            None
        } else {
            self.music_heading_mut()
        };
        let leftover = bsr::place_time_signature(heading, bsr_time_signature);
        self.first_time_signature_seen = true;

        if let Some(bsr_time_signature) = leftover {
            // Belongs to the current measure, but braille writes it before
            // that measure on the line, ahead of any key change already
            // appended after it
            let path = self.current_line;
            let measure_on_line = self
                .current_measure
                .filter(|measure| measure.page == path.page && measure.line == path.line);
            if let Some(line) = self.current_line_mut() {
                let before = line.elements.len();
                let target = match measure_on_line {
                    Some(measure) => measure.element,
                    None => before.saturating_sub(1),
                };
                let index = line.insert_time_signature_before(target, bsr_time_signature);
                let added = line.elements.len() - before;
                if let Some(measure) = self.current_measure.as_mut() {
                    if measure_on_line.is_some() && measure.element >= index {
                        measure.element += added;
                    }
                }
            }
        }

        // Numeric indicator: the next note carries an octave mark
        self.octave_context = OctaveContext::Unset;
    }

    fn visit_tempo(&mut self, tempo: &msr::Tempo) {
        if self.settings.suppress_tempos {
            log::trace!("Tempo suppressed, line {}", tempo.input_line);
            return;
        }

        let kind = match tempo.kind {
            msr::TempoKind::WordsOnly => bsr::TempoKind::WordsOnly,
            msr::TempoKind::PerMinute => bsr::TempoKind::PerMinute,
            msr::TempoKind::Equivalence => bsr::TempoKind::Equivalence,
            msr::TempoKind::NotesRelationship => bsr::TempoKind::NotesRelationship,
        };
        let per_minute = match tempo.kind {
            msr::TempoKind::PerMinute => parse_per_minute(&tempo.per_minute),
            _ => None,
        };
        if tempo.kind == msr::TempoKind::PerMinute && per_minute.is_none() {
            self.report_with(
                tempo.input_line,
                DiagnosticSeverity::Info,
                "unreadable_per_minute",
                format!("Metronome value {:?} is not a number or range, tempo kept without it", tempo.per_minute),
            );
        }

        let bsr_tempo = bsr::Tempo {
            input_line: tempo.input_line,
            kind,
            words: tempo.words.clone(),
            beat_unit_value: tables::note_value_kind(Some(msr::DiatonicStep::C), tempo.beat_unit),
            beat_unit_dots: tempo.beat_unit_dots,
            per_minute,
        };
        if let Some(line) = self.current_line_mut() {
            line.append_tempo(bsr_tempo);
        }
    }

    // ------------------------------------------------------------------
    // Measure-level elements
    // ------------------------------------------------------------------

    fn visit_clef(&mut self, clef: &msr::Clef) {
        if !self.settings.include_clefs {
            log::trace!("Clef {:?} skipped, clefs not included, line {}", clef.kind, clef.input_line);
            return;
        }

        let kind = tables::clef_kind(clef.kind);
        if clef.kind == msr::ClefKind::NoClef {
            return;
        }
        if kind == bsr::ClefKind::None {
            self.report(
                clef.input_line,
                "unsupported_clef",
                format!("Clef {:?} has no braille equivalent", clef.kind),
            );
            return;
        }
        if let Some(measure) = self.current_measure_mut() {
            measure.append_clef(bsr::Clef::new(clef.input_line, kind));
        }
    }

    fn visit_bar_line(&mut self, bar_line: &msr::BarLine) {
        let kind = tables::bar_line_kind(bar_line.style);
        if kind == bsr::BarLineKind::None {
            self.report(
                bar_line.input_line,
                "unsupported_bar_line",
                format!("Bar line style {:?} has no braille equivalent", bar_line.style),
            );
            return;
        }
        if let Some(measure) = self.current_measure_mut() {
            measure.append_bar_line(bsr::BarLine::new(bar_line.input_line, kind));
        }
    }

    fn visit_note(&mut self, note: &'a msr::Note) {
        if !note.belongs_to_chord {
            self.emit_note_words(note);
        }

        let value = tables::note_value_kind(note.pitch.map(|pitch| pitch.step), note.graphic_duration);
        if value == bsr::NoteValueKind::None {
            self.report(
                note.input_line,
                "unsupported_note_value",
                format!("Duration {} has no braille note value", note.graphic_duration),
            );
        }

        let octave = match note.pitch {
            Some(pitch) => bsr::OctaveKind::from_octave_number(pitch.octave),
            None => bsr::OctaveKind::None,
        };

        let octave_mark_needed = match (note.pitch, self.octave_context) {
            (None, _) => false,
            (Some(_), OctaveContext::Unset) => true,
            (Some(pitch), OctaveContext::Set) => match self.reference_note.and_then(|reference| reference.pitch) {
                Some(reference) => octave_mark_needed(&pitch, &reference),
                None => false,
            },
        };
        if note.pitch.is_some() {
            self.octave_context = OctaveContext::Set;
            self.reference_note = Some(note);
        }

        let accidental = tables::accidental_kind(note.accidental);
        if accidental == bsr::AccidentalKind::None && note.accidental != msr::AccidentalKind::None {
            self.report(
                note.input_line,
                "unsupported_accidental",
                format!("Accidental {:?} has no braille equivalent", note.accidental),
            );
        }

        let size = value.size_kind();
        let size_changed = size != bsr::NoteValueSizeKind::None && size != self.note_value_size;
        if size_changed {
            self.note_value_size = size;
        }

        let bsr_note = bsr::Note {
            input_line: note.input_line,
            value,
            dots: note.dots,
            value_size_sign_needed: size_changed && self.settings.note_value_size_signs,
            octave,
            octave_mark_needed,
            accidental,
        };
        log::trace!("{}", bsr_note);

        if let Some(measure) = self.current_measure_mut() {
            measure.append_note(bsr_note);
            for dynamic in &note.dynamics {
                measure.append_dynamic(bsr::Dynamic::new(dynamic.input_line, dynamic.kind));
            }
        }
    }

    /// Words attached to a note, and its lyrics when asked for, go before it
    fn emit_note_words(&mut self, note: &msr::Note) {
        let mut texts: Vec<(u32, String)> = note
            .words
            .iter()
            .map(|words| (words.input_line, words.contents.clone()))
            .collect();
        if self.settings.add_words_from_lyrics {
            texts.extend(note.lyrics.iter().map(|syllable| (syllable.input_line, syllable.text())));
        }

        for (input_line, text) in texts {
            if let Some(measure) = self.current_measure_mut() {
                measure.append_words(bsr::Words::new(input_line, &text));
            }
            self.octave_context = OctaveContext::Unset;
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn current_line_mut(&mut self) -> Option<&mut bsr::Line> {
        let path = self.current_line;
        let line = self
            .score
            .pages
            .get_mut(path.page)
            .and_then(|page| page.lines.get_mut(path.line));
        if line.is_none() {
            log::warn!("No current line at {:?}", path);
        }
        line
    }

    fn current_measure_mut(&mut self) -> Option<&mut bsr::Measure> {
        let path = self.current_measure?;
        self.score
            .pages
            .get_mut(path.page)
            .and_then(|page| page.lines.get_mut(path.line))
            .and_then(|line| line.measure_mut(path.element))
    }

    /// The music heading lives on the first page
    fn music_heading_mut(&mut self) -> Option<&mut bsr::MusicHeading> {
        self.score
            .pages
            .first_mut()
            .and_then(|page| page.music_heading.as_mut())
    }

    fn report(&mut self, input_line: u32, kind: &str, message: String) {
        self.report_with(input_line, DiagnosticSeverity::Warning, kind, message);
    }

    fn report_with(&mut self, input_line: u32, severity: DiagnosticSeverity, kind: &str, message: String) {
        self.diagnostics.add(
            Diagnostic::new(input_line, severity, kind, message).in_measure(self.current_measure_number),
        );
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
