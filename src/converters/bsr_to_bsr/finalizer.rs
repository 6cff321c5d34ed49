//! BSR finalizer
//!
//! Rebuilds the translator's BSR tree into a new one. Pages, lines and
//! measures are re-created as newborn clones and refilled as the walk goes;
//! leaf elements are moved across unchanged. Spaces are not copied: the
//! new lines regenerate them as elements are appended.
//!
//! Keys, time signatures and tempos go through the same heading placement
//! rule as in the translator. The music heading is current only while its
//! own contents are visited, so anything met later on a line stays inline.

use crate::bsr;
use crate::converters::msr_to_bsr::ConversionError;

/// Finalize a translated BSR score
pub fn finalize(score: bsr::Score<'_>) -> Result<bsr::Score<'_>, ConversionError> {
    if score.pages.is_empty() {
        return Err(ConversionError::EmptyScore);
    }

    let bsr::Score {
        source,
        transcription_notes,
        pages,
    } = score;

    let mut finalizer = Finalizer {
        result: bsr::Score::new(source),
        current_line: None,
        music_heading_is_current: false,
    };

    for note in transcription_notes.elements {
        finalizer.result.append_transcription_note(note);
    }
    for page in pages {
        finalizer.visit_page(page);
    }

    log::debug!(
        "Finalized BSR score: {} page(s), {} measure(s)",
        finalizer.result.pages.len(),
        finalizer.result.measure_count()
    );
    Ok(finalizer.result)
}

struct Finalizer<'a> {
    result: bsr::Score<'a>,
    /// Index of the current line on the last page
    current_line: Option<usize>,
    music_heading_is_current: bool,
}

impl<'a> Finalizer<'a> {
    fn visit_page(&mut self, page: bsr::Page) {
        log::debug!("Finalizing page {}", page.print_page_number);

        self.result.append_page(page.newborn_clone());
        self.current_line = None;

        if let Some(page_heading) = page.page_heading {
            if let Some(current) = self.result.pages.last_mut() {
                current.set_page_heading(page_heading);
            }
        }
        if let Some(music_heading) = page.music_heading {
            self.visit_music_heading(music_heading);
        }
        for line in page.lines {
            self.visit_line(line);
        }
        if let Some(foot_notes) = page.foot_notes {
            if let Some(current) = self.result.pages.last_mut() {
                current.set_foot_notes(foot_notes);
            }
        }
    }

    fn visit_music_heading(&mut self, music_heading: bsr::MusicHeading) {
        if let Some(current) = self.result.pages.last_mut() {
            current.set_music_heading(music_heading.newborn_clone());
        }

        self.music_heading_is_current = true;
        if let Some(key) = music_heading.key {
            self.visit_key(key);
        }
        if let Some(time_signature) = music_heading.time_signature {
            self.visit_time_signature(time_signature);
        }
        if let Some(tempo) = music_heading.tempo {
            self.visit_tempo(tempo);
        }
        self.music_heading_is_current = false;
    }

    fn visit_line(&mut self, line: bsr::Line) {
        log::debug!("Finalizing line {}", line.print_line_number);

        let clone = line.newborn_clone();
        self.current_line = self.result.pages.last_mut().map(|page| page.append_line(clone));

        for element in line.elements {
            match element {
                bsr::LineElement::Spaces(_) => {}
                bsr::LineElement::Measure(measure) => self.visit_measure(measure),
                bsr::LineElement::Key(key) => self.visit_key(key),
                bsr::LineElement::TimeSignature(time_signature) => self.visit_time_signature(time_signature),
                bsr::LineElement::Tempo(tempo) => self.visit_tempo(tempo),
            }
        }
    }

    fn visit_measure(&mut self, measure: bsr::Measure) {
        let mut clone = measure.newborn_clone();
        for element in measure.elements {
            match element {
                bsr::MeasureElement::Clef(clef) => clone.append_clef(clef),
                bsr::MeasureElement::BarLine(bar_line) => clone.append_bar_line(bar_line),
                bsr::MeasureElement::Number(number) => clone.append_number(number),
                bsr::MeasureElement::Words(words) => clone.append_words(words),
                bsr::MeasureElement::Note(note) => clone.append_note(note),
                bsr::MeasureElement::Dynamic(dynamic) => clone.append_dynamic(dynamic),
            }
        }

        match self.current_line_mut() {
            Some(line) => {
                line.append_measure(clone);
            }
            None => log::warn!("No line for measure {}, dropped", clone.print_measure_number),
        }
    }

    fn visit_key(&mut self, key: bsr::Key) {
        let heading = self.current_music_heading_mut();
        if let Some(key) = bsr::place_key(heading, key) {
            match self.current_line_mut() {
                Some(line) => {
                    line.append_key(key);
                }
                None => log::warn!("No line for {}, dropped", key),
            }
        }
    }

    fn visit_time_signature(&mut self, time_signature: bsr::TimeSignature) {
        let heading = self.current_music_heading_mut();
        if let Some(time_signature) = bsr::place_time_signature(heading, time_signature) {
            match self.current_line_mut() {
                Some(line) => {
                    line.append_time_signature(time_signature);
                }
                None => log::warn!("No line for {}, dropped", time_signature),
            }
        }
    }

    fn visit_tempo(&mut self, tempo: bsr::Tempo) {
        let heading = self.current_music_heading_mut();
        if let Some(tempo) = bsr::place_tempo(heading, tempo) {
            match self.current_line_mut() {
                Some(line) => {
                    line.append_tempo(tempo);
                }
                None => log::warn!("No line for {}, dropped", tempo),
            }
        }
    }

    fn current_line_mut(&mut self) -> Option<&mut bsr::Line> {
        let index = self.current_line?;
        self.result
            .pages
            .last_mut()
            .and_then(|page| page.lines.get_mut(index))
    }

    fn current_music_heading_mut(&mut self) -> Option<&mut bsr::MusicHeading> {
        if !self.music_heading_is_current {
            return None;
        }
        self.result
            .pages
            .last_mut()
            .and_then(|page| page.music_heading.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;
    use pretty_assertions::assert_eq;

    fn quarter_c(input_line: u32) -> bsr::Note {
        bsr::Note {
            input_line,
            value: bsr::NoteValueKind::CQuarter,
            dots: 0,
            value_size_sign_needed: false,
            octave: bsr::OctaveKind::Octave4,
            octave_mark_needed: true,
            accidental: bsr::AccidentalKind::None,
        }
    }

    fn sample_score(source: &models::Score) -> bsr::Score<'_> {
        let mut score = bsr::Score::new(source);
        score.append_transcription_note(bsr::TranscriptionNote {
            input_line: 1,
            text: "This Braille data created by msr2bsr".to_string(),
        });

        let mut page = bsr::Page::new(1, 1, 27);
        page.braille_page_number = 3;
        let mut heading = bsr::MusicHeading::new(1);
        heading.key = Some(bsr::Key::new(2, bsr::KeyKind::Flats, 2));
        heading.time_signature = Some(bsr::TimeSignature::new(3, bsr::TimeSignatureKind::Common));
        page.set_music_heading(heading);
        page.set_foot_notes(bsr::FootNotes {
            input_line: 90,
            elements: vec![bsr::FootNote {
                input_line: 90,
                text: "ossia".to_string(),
            }],
        });

        let mut line = bsr::Line::new(1, 1, 30);
        let mut first = bsr::Measure::new(4, "1");
        first.append_number(bsr::Number::new(4, 1, true));
        first.append_note(quarter_c(5));
        line.append_measure(first);
        line.append_key(bsr::Key::new(6, bsr::KeyKind::Sharps, 1));
        let mut second = bsr::Measure::new(7, "2");
        second.append_note(quarter_c(8));
        let second_index = line.append_measure(second);
        line.insert_time_signature_before(second_index, bsr::TimeSignature::new(9, bsr::TimeSignatureKind::Cut));
        page.append_line(line);

        score.append_page(page);
        score
    }

    #[test]
    fn test_empty_score_is_an_error() {
        let source = models::Score::new();
        let err = finalize(bsr::Score::new(&source)).unwrap_err();
        assert_eq!(err, ConversionError::EmptyScore);
    }

    #[test]
    fn test_structure_and_numbers_are_preserved() {
        let source = models::Score::new();
        let finalized = finalize(sample_score(&source)).unwrap();

        assert_eq!(finalized.transcription_notes.elements.len(), 1);
        assert_eq!(finalized.pages.len(), 1);
        let page = &finalized.pages[0];
        assert_eq!(page.print_page_number, 1);
        assert_eq!(page.braille_page_number, 3);
        assert_eq!(page.lines_per_page, 27);
        assert_eq!(page.lines.len(), 1);
        assert_eq!(page.lines[0].cells_per_line, 30);

        let numbers: Vec<&str> = page.lines[0]
            .measures()
            .map(|m| m.print_measure_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["1", "2"]);
    }

    #[test]
    fn test_music_heading_is_rebuilt() {
        let source = models::Score::new();
        let finalized = finalize(sample_score(&source)).unwrap();

        let heading = finalized.pages[0].music_heading.as_ref().unwrap();
        assert_eq!(heading.key, Some(bsr::Key::new(2, bsr::KeyKind::Flats, 2)));
        assert_eq!(
            heading.time_signature.as_ref().map(|ts| ts.kind),
            Some(bsr::TimeSignatureKind::Common)
        );
        assert_eq!(finalized.music_heading_count(), 1);
    }

    #[test]
    fn test_inline_elements_stay_inline_and_in_order() {
        let source = models::Score::new();
        let finalized = finalize(sample_score(&source)).unwrap();

        let shape: Vec<String> = finalized.pages[0].lines[0]
            .elements
            .iter()
            .map(|element| match element {
                bsr::LineElement::Spaces(spaces) => format!("spaces{}", spaces.count),
                bsr::LineElement::Measure(m) => format!("measure{}", m.print_measure_number),
                bsr::LineElement::Key(_) => "key".to_string(),
                bsr::LineElement::TimeSignature(_) => "time".to_string(),
                bsr::LineElement::Tempo(_) => "tempo".to_string(),
            })
            .collect();
        assert_eq!(
            shape,
            vec![
                "spaces1", "measure1", "spaces1", "key", "spaces1", "time", "spaces1", "measure2"
            ]
        );
    }

    #[test]
    fn test_leaves_pass_through() {
        let source = models::Score::new();
        let finalized = finalize(sample_score(&source)).unwrap();

        let first = finalized.pages[0].lines[0].measures().next().unwrap();
        assert_eq!(
            first.elements,
            vec![
                bsr::MeasureElement::Number(bsr::Number::new(4, 1, true)),
                bsr::MeasureElement::Note(quarter_c(5)),
            ]
        );
        let foot_notes = finalized.pages[0].foot_notes.as_ref().unwrap();
        assert_eq!(foot_notes.elements[0].text, "ossia");
    }

    #[test]
    fn test_finalizing_twice_changes_nothing() {
        let source = models::Score::new();
        let once = finalize(sample_score(&source)).unwrap();
        let twice = finalize(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
