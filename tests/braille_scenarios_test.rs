// End-to-end scenarios through translation and finalization

use msr2bsr::bsr;
use msr2bsr::msr::{
    Alteration, Clef, ClefKind, DiatonicStep, DurationKind, Identification, Key, Measure,
    MeasureElement, Mode, Note, Part, PartGroup, PartGroupElement, Pitch, Score, SemitonesPitch,
    Staff, TimeSignature, Voice,
};
use msr2bsr::{convert_msr_to_bsr, TranslationSettings};
use pretty_assertions::assert_eq;

/// Helper to wrap measures into a one-part, one-voice score
fn make_score(measures: Vec<Measure>) -> Score {
    Score {
        input_line: 1,
        identification: Identification::default(),
        part_groups: vec![PartGroup {
            input_line: 1,
            elements: vec![PartGroupElement::Part(Part {
                input_line: 2,
                id: "P1".to_string(),
                name: "Music".to_string(),
                staves: vec![Staff {
                    input_line: 3,
                    number: 1,
                    voices: vec![Voice {
                        input_line: 4,
                        number: 1,
                        name: "P1_Staff_1_Voice_1".to_string(),
                        measures,
                    }],
                }],
            })],
        }],
    }
}

/// Helper to create a quarter note
fn quarter(step: DiatonicStep, octave: u8) -> MeasureElement {
    MeasureElement::Note(Note::pitched(
        20,
        Pitch::new(step, Alteration::Natural, octave),
        DurationKind::Quarter,
    ))
}

fn make_measure(number: &str, elements: Vec<MeasureElement>) -> Measure {
    Measure {
        input_line: 10,
        number: number.to_string(),
        elements,
    }
}

fn octave_marks(score: &bsr::Score<'_>) -> Vec<bool> {
    score
        .pages
        .iter()
        .flat_map(|page| page.lines.iter())
        .flat_map(|line| line.measures())
        .flat_map(|measure| measure.notes())
        .map(|note| note.octave_mark_needed)
        .collect()
}

#[test]
fn test_c_major_four_four_middle_c() {
    let score = make_score(vec![make_measure(
        "1",
        vec![
            MeasureElement::Key(Key::traditional(11, SemitonesPitch::natural(DiatonicStep::C), Mode::Major)),
            MeasureElement::TimeSignature(TimeSignature::simple(12, 4, 4)),
            quarter(DiatonicStep::C, 4),
        ],
    )]);

    let result = convert_msr_to_bsr(&score, None).expect("conversion should succeed");
    let bsr_score = &result.score;

    assert_eq!(bsr_score.pages.len(), 1);
    assert_eq!(bsr_score.music_heading_count(), 1);

    let heading = bsr_score.pages[0].music_heading.as_ref().unwrap();
    let key = heading.key.as_ref().unwrap();
    assert_eq!(key.kind, bsr::KeyKind::Naturals);
    assert_eq!(key.alterations, 0);
    let time_signature = heading.time_signature.as_ref().unwrap();
    assert_eq!(time_signature.kind, bsr::TimeSignatureKind::Numerical);
    assert_eq!(time_signature.items, vec![bsr::TimeSignatureItem::new(vec![4], 4)]);

    let page = &bsr_score.pages[0];
    assert_eq!(page.lines.len(), 1);
    let measures: Vec<&bsr::Measure> = page.lines[0].measures().collect();
    assert_eq!(measures.len(), 1);
    let notes: Vec<&bsr::Note> = measures[0].notes().collect();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].octave_mark_needed);
    assert_eq!(notes[0].value, bsr::NoteValueKind::CQuarter);

    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_major_second_needs_no_octave_mark() {
    let score = make_score(vec![make_measure(
        "1",
        vec![quarter(DiatonicStep::E, 4), quarter(DiatonicStep::F, 4)],
    )]);
    let result = convert_msr_to_bsr(&score, None).unwrap();
    assert_eq!(octave_marks(&result.score), vec![true, false]);
}

#[test]
fn test_fifth_crossing_octave_needs_mark() {
    // G4 up to D5 crosses the octave boundary at C5
    let crossing = make_score(vec![make_measure(
        "1",
        vec![quarter(DiatonicStep::G, 4), quarter(DiatonicStep::D, 5)],
    )]);
    let result = convert_msr_to_bsr(&crossing, None).unwrap();
    assert_eq!(octave_marks(&result.score), vec![true, true]);

    // C4 up to G4 stays within octave 4
    let within = make_score(vec![make_measure(
        "1",
        vec![quarter(DiatonicStep::C, 4), quarter(DiatonicStep::G, 4)],
    )]);
    let result = convert_msr_to_bsr(&within, None).unwrap();
    assert_eq!(octave_marks(&result.score), vec![true, false]);
}

#[test]
fn test_percussion_clef_is_dropped_with_one_diagnostic() {
    let score = make_score(vec![make_measure(
        "1",
        vec![MeasureElement::Clef(Clef::new(15, ClefKind::Percussion))],
    )]);
    let settings = TranslationSettings {
        include_clefs: true,
        ..Default::default()
    };
    let result = convert_msr_to_bsr(&score, Some(settings)).unwrap();

    let measure = result.score.pages[0].lines[0].measures().next().unwrap();
    assert!(measure
        .elements
        .iter()
        .all(|element| !matches!(element, bsr::MeasureElement::Clef(_))));
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics.items[0];
    assert_eq!(diagnostic.kind, "unsupported_clef");
    assert_eq!(diagnostic.input_line, 15);
    assert_eq!(diagnostic.measure_number.as_deref(), Some("1"));
}

#[test]
fn test_a_minor_maps_to_naturals() {
    let score = make_score(vec![make_measure(
        "1",
        vec![MeasureElement::Key(Key::traditional(
            11,
            SemitonesPitch::natural(DiatonicStep::A),
            Mode::Minor,
        ))],
    )]);
    let result = convert_msr_to_bsr(&score, None).unwrap();

    let key = result.score.pages[0]
        .music_heading
        .as_ref()
        .and_then(|heading| heading.key.as_ref())
        .unwrap();
    assert_eq!((key.kind, key.alterations), (bsr::KeyKind::Naturals, 0));
}

#[test]
fn test_key_change_mid_piece_stays_inline() {
    let score = make_score(vec![
        make_measure(
            "1",
            vec![
                MeasureElement::Key(Key::traditional(11, SemitonesPitch::natural(DiatonicStep::G), Mode::Major)),
                quarter(DiatonicStep::G, 4),
            ],
        ),
        make_measure(
            "2",
            vec![
                MeasureElement::Key(Key::traditional(
                    30,
                    SemitonesPitch::new(DiatonicStep::E, Alteration::Flat),
                    Mode::Major,
                )),
                MeasureElement::TimeSignature(TimeSignature::simple(31, 3, 4)),
                quarter(DiatonicStep::E, 4),
            ],
        ),
    ]);
    let result = convert_msr_to_bsr(&score, None).unwrap();
    let bsr_score = &result.score;

    // The first time signature seen is 3/4, so it is the heading's
    let heading = bsr_score.pages[0].music_heading.as_ref().unwrap();
    assert_eq!(heading.key, Some(bsr::Key::new(11, bsr::KeyKind::Sharps, 1)));
    assert!(heading.time_signature.is_some());

    let line = &bsr_score.pages[0].lines[0];
    assert_eq!(line.keys().collect::<Vec<_>>(), vec![&bsr::Key::new(30, bsr::KeyKind::Flats, 3)]);
    assert_eq!(line.time_signatures().count(), 0);
    assert_eq!(bsr_score.music_heading_count(), 1);
}

#[test]
fn test_page_heading_and_summary() {
    let mut score = make_score(vec![make_measure("1", vec![quarter(DiatonicStep::C, 4)])]);
    score.identification.movement_title = Some("Minuet".to_string());

    let result = convert_msr_to_bsr(&score, None).unwrap();
    let heading = result.score.pages[0].page_heading.as_ref().unwrap();
    assert_eq!(heading.title, "Minuet");

    let summary = result.score.summary();
    assert!(summary.contains("PageHeading \"Minuet\""));
    assert!(summary.contains("Note cQuarter octave 4 (mark)"));
}

#[test]
fn test_key_and_time_change_are_written_before_their_measure() {
    let score = make_score(vec![
        make_measure(
            "1",
            vec![
                MeasureElement::Key(Key::traditional(11, SemitonesPitch::natural(DiatonicStep::C), Mode::Major)),
                MeasureElement::TimeSignature(TimeSignature::simple(12, 4, 4)),
                quarter(DiatonicStep::C, 4),
            ],
        ),
        make_measure(
            "2",
            vec![
                MeasureElement::Key(Key::traditional(30, SemitonesPitch::natural(DiatonicStep::D), Mode::Major)),
                MeasureElement::TimeSignature(TimeSignature::simple(31, 3, 4)),
                quarter(DiatonicStep::D, 4),
            ],
        ),
    ]);
    let result = convert_msr_to_bsr(&score, None).unwrap();

    let shape: Vec<String> = result.score.pages[0].lines[0]
        .elements
        .iter()
        .map(|element| match element {
            bsr::LineElement::Spaces(spaces) => format!("spaces{}", spaces.count),
            bsr::LineElement::Measure(measure) => format!("measure{}", measure.print_measure_number),
            bsr::LineElement::Key(_) => "key".to_string(),
            bsr::LineElement::TimeSignature(_) => "time".to_string(),
            bsr::LineElement::Tempo(_) => "tempo".to_string(),
        })
        .collect();
    assert_eq!(
        shape,
        vec!["spaces1", "measure1", "spaces1", "time", "spaces1", "measure2", "spaces1", "key"]
    );
    assert!(result.diagnostics.is_empty());
}
