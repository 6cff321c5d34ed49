//! MSR to BSR mapping tables
//!
//! Each table is total over its MSR input enumeration: every input value
//! has a row, and values with no braille equivalent map to the BSR kind's
//! `None` variant. Array tables are indexed by the MSR discriminant, so
//! their rows must stay in declaration order (checked by the tests).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::bsr;
use crate::models::{
    AccidentalKind, Alteration, BarLineStyle, ClefKind, DiatonicStep, DurationKind, Mode,
    SemitonesPitch, TimeSignatureSymbol,
};

// ============================================================================
// Clefs
// ============================================================================

pub const CLEF_TABLE: [(ClefKind, bsr::ClefKind); ClefKind::COUNT] = [
    (ClefKind::NoClef, bsr::ClefKind::None),
    (ClefKind::Treble, bsr::ClefKind::GTreble),
    (ClefKind::TrebleMinus15, bsr::ClefKind::None),
    (ClefKind::TrebleMinus8, bsr::ClefKind::GOttavaBassa),
    (ClefKind::TreblePlus8, bsr::ClefKind::GOttavaAlta),
    (ClefKind::TreblePlus15, bsr::ClefKind::None),
    (ClefKind::Bass, bsr::ClefKind::FBass),
    (ClefKind::BassMinus15, bsr::ClefKind::None),
    (ClefKind::BassMinus8, bsr::ClefKind::None),
    (ClefKind::BassPlus8, bsr::ClefKind::None),
    (ClefKind::BassPlus15, bsr::ClefKind::None),
    (ClefKind::Varbaritone, bsr::ClefKind::None),
    (ClefKind::Tablature4, bsr::ClefKind::None),
    (ClefKind::Tablature5, bsr::ClefKind::None),
    (ClefKind::Tablature6, bsr::ClefKind::None),
    (ClefKind::Tablature7, bsr::ClefKind::None),
    (ClefKind::Percussion, bsr::ClefKind::None),
    (ClefKind::Jianpu, bsr::ClefKind::None),
    (ClefKind::Soprano, bsr::ClefKind::GSoprano),
    (ClefKind::MezzoSoprano, bsr::ClefKind::GSoprano),
    (ClefKind::Alto, bsr::ClefKind::CAlto),
    (ClefKind::Tenor, bsr::ClefKind::CTenor),
    (ClefKind::Baritone, bsr::ClefKind::CBaritone),
    (ClefKind::TrebleLine1, bsr::ClefKind::GSoprano),
];

pub fn clef_kind(kind: ClefKind) -> bsr::ClefKind {
    CLEF_TABLE[kind as usize].1
}

// ============================================================================
// Bar lines
// ============================================================================

pub const BAR_LINE_TABLE: [(BarLineStyle, bsr::BarLineKind); 11] = [
    (BarLineStyle::None, bsr::BarLineKind::None),
    (BarLineStyle::Regular, bsr::BarLineKind::None),
    (BarLineStyle::Dotted, bsr::BarLineKind::Special),
    (BarLineStyle::Dashed, bsr::BarLineKind::Special),
    (BarLineStyle::Heavy, bsr::BarLineKind::None),
    (BarLineStyle::LightLight, bsr::BarLineKind::SectionalDouble),
    (BarLineStyle::LightHeavy, bsr::BarLineKind::FinalDouble),
    (BarLineStyle::HeavyLight, bsr::BarLineKind::None),
    (BarLineStyle::HeavyHeavy, bsr::BarLineKind::None),
    (BarLineStyle::Tick, bsr::BarLineKind::None),
    (BarLineStyle::Short, bsr::BarLineKind::None),
];

pub fn bar_line_kind(style: BarLineStyle) -> bsr::BarLineKind {
    BAR_LINE_TABLE[style as usize].1
}

// ============================================================================
// Time signatures
// ============================================================================

pub const TIME_SIGNATURE_TABLE: [(TimeSignatureSymbol, bsr::TimeSignatureKind); 7] = [
    (TimeSignatureSymbol::None, bsr::TimeSignatureKind::None),
    (TimeSignatureSymbol::Common, bsr::TimeSignatureKind::Common),
    (TimeSignatureSymbol::Cut, bsr::TimeSignatureKind::Cut),
    (TimeSignatureSymbol::Note, bsr::TimeSignatureKind::Note),
    (TimeSignatureSymbol::DottedNote, bsr::TimeSignatureKind::DottedNote),
    (TimeSignatureSymbol::SingleNumber, bsr::TimeSignatureKind::SingleNumber),
    (TimeSignatureSymbol::SenzaMisura, bsr::TimeSignatureKind::SenzaMisura),
];

pub fn time_signature_kind(symbol: TimeSignatureSymbol) -> bsr::TimeSignatureKind {
    TIME_SIGNATURE_TABLE[symbol as usize].1
}

// ============================================================================
// Accidentals
// ============================================================================

pub const ACCIDENTAL_TABLE: [(AccidentalKind, bsr::AccidentalKind); AccidentalKind::COUNT] = [
    (AccidentalKind::None, bsr::AccidentalKind::None),
    (AccidentalKind::Sharp, bsr::AccidentalKind::Sharp),
    (AccidentalKind::Natural, bsr::AccidentalKind::Natural),
    (AccidentalKind::Flat, bsr::AccidentalKind::Flat),
    (AccidentalKind::DoubleSharp, bsr::AccidentalKind::DoubleSharp),
    (AccidentalKind::SharpSharp, bsr::AccidentalKind::None),
    (AccidentalKind::FlatFlat, bsr::AccidentalKind::DoubleFlat),
    (AccidentalKind::NaturalSharp, bsr::AccidentalKind::None),
    (AccidentalKind::NaturalFlat, bsr::AccidentalKind::None),
    // Shares the double flat cell; see DESIGN.md
    (AccidentalKind::QuarterFlat, bsr::AccidentalKind::DoubleFlat),
    (AccidentalKind::QuarterSharp, bsr::AccidentalKind::QuarterSharp),
    (AccidentalKind::ThreeQuartersFlat, bsr::AccidentalKind::ThreeQuarterFlat),
    (AccidentalKind::ThreeQuartersSharp, bsr::AccidentalKind::ThreeQuarterSharp),
    (AccidentalKind::SharpDown, bsr::AccidentalKind::None),
    (AccidentalKind::SharpUp, bsr::AccidentalKind::None),
    (AccidentalKind::NaturalDown, bsr::AccidentalKind::None),
    (AccidentalKind::NaturalUp, bsr::AccidentalKind::None),
    (AccidentalKind::FlatDown, bsr::AccidentalKind::None),
    (AccidentalKind::FlatUp, bsr::AccidentalKind::None),
    (AccidentalKind::TripleSharp, bsr::AccidentalKind::None),
    (AccidentalKind::TripleFlat, bsr::AccidentalKind::None),
    (AccidentalKind::SlashQuarterSharp, bsr::AccidentalKind::None),
    (AccidentalKind::SlashSharp, bsr::AccidentalKind::None),
    (AccidentalKind::SlashFlat, bsr::AccidentalKind::None),
    (AccidentalKind::DoubleSlashFlat, bsr::AccidentalKind::None),
    (AccidentalKind::Sharp1, bsr::AccidentalKind::None),
    (AccidentalKind::Sharp2, bsr::AccidentalKind::None),
    (AccidentalKind::Sharp3, bsr::AccidentalKind::None),
    (AccidentalKind::Sharp5, bsr::AccidentalKind::None),
    (AccidentalKind::Flat1, bsr::AccidentalKind::None),
    (AccidentalKind::Flat2, bsr::AccidentalKind::None),
    (AccidentalKind::Flat3, bsr::AccidentalKind::None),
    (AccidentalKind::Flat4, bsr::AccidentalKind::None),
    (AccidentalKind::Sori, bsr::AccidentalKind::None),
    (AccidentalKind::Koron, bsr::AccidentalKind::None),
    (AccidentalKind::Other, bsr::AccidentalKind::None),
];

pub fn accidental_kind(kind: AccidentalKind) -> bsr::AccidentalKind {
    ACCIDENTAL_TABLE[kind as usize].1
}

// ============================================================================
// Traditional keys
// ============================================================================

const fn tonic(step: DiatonicStep, alteration: Alteration) -> SemitonesPitch {
    SemitonesPitch { step, alteration }
}

/// (tonic, major signature, minor signature)
#[rustfmt::skip]
const KEY_ROWS: [(SemitonesPitch, (bsr::KeyKind, u32), (bsr::KeyKind, u32)); 13] = {
    use bsr::KeyKind::{Flats, Naturals, Sharps};
    use Alteration::{Flat, Natural, Sharp};
    use DiatonicStep::*;
    [
        (tonic(C, Natural), (Naturals, 0), (Flats, 3)),
        (tonic(C, Sharp),   (Sharps, 7),   (Sharps, 4)),
        (tonic(D, Flat),    (Flats, 5),    (Flats, 8)),
        (tonic(D, Natural), (Sharps, 2),   (Flats, 1)),
        (tonic(E, Flat),    (Flats, 3),    (Flats, 6)),
        (tonic(E, Natural), (Sharps, 4),   (Sharps, 1)),
        (tonic(F, Natural), (Flats, 1),    (Flats, 4)),
        (tonic(F, Sharp),   (Sharps, 6),   (Sharps, 3)),
        (tonic(G, Natural), (Sharps, 1),   (Flats, 2)),
        (tonic(A, Flat),    (Flats, 4),    (Flats, 7)),
        (tonic(A, Natural), (Sharps, 3),   (Naturals, 0)),
        (tonic(B, Flat),    (Flats, 2),    (Flats, 5)),
        (tonic(B, Natural), (Sharps, 5),   (Sharps, 2)),
    ]
};

static KEY_TABLE: Lazy<HashMap<(SemitonesPitch, Mode), (bsr::KeyKind, u32)>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(KEY_ROWS.len() * 2);
    for (tonic, major, minor) in KEY_ROWS {
        table.insert((tonic, Mode::Major), major);
        table.insert((tonic, Mode::Minor), minor);
    }
    table
});

/// Braille key kind and alteration count of a traditional key.
/// Church modes and tonics outside the table give `(None, 0)`.
pub fn key_kind_and_alterations(tonic: SemitonesPitch, mode: Mode) -> (bsr::KeyKind, u32) {
    KEY_TABLE
        .get(&(tonic, mode))
        .copied()
        .unwrap_or((bsr::KeyKind::None, 0))
}

/// Number of defined traditional keys
pub fn key_table_len() -> usize {
    KEY_TABLE.len()
}

// ============================================================================
// Note values
// ============================================================================

/// Column of each MSR duration in `NOTE_VALUE_TABLE`, None when braille
/// has no value for it
pub const DURATION_COLUMNS: [(DurationKind, Option<usize>); DurationKind::COUNT] = [
    (DurationKind::NoDuration, None),
    (DurationKind::N1024th, None),
    (DurationKind::N512th, None),
    (DurationKind::N256th, Some(0)),
    (DurationKind::N128th, Some(1)),
    (DurationKind::N64th, Some(2)),
    (DurationKind::N32nd, Some(3)),
    (DurationKind::N16th, Some(4)),
    (DurationKind::Eighth, Some(5)),
    (DurationKind::Quarter, Some(6)),
    (DurationKind::Half, Some(7)),
    (DurationKind::Whole, Some(8)),
    (DurationKind::Breve, Some(9)),
    (DurationKind::Longa, None),
    (DurationKind::Maxima, None),
];

/// Rows: rest, then C through B. Columns: 256th through breve.
#[rustfmt::skip]
pub const NOTE_VALUE_TABLE: [[bsr::NoteValueKind; bsr::NoteValueKind::COLUMNS]; 8] = {
    use bsr::NoteValueKind::*;
    [
        [Rest256th, Rest128th, Rest64th, Rest32nd, Rest16th, Rest8th, RestQuarter, RestHalf, RestWhole, RestBreve],
        [C256th, C128th, C64th, C32nd, C16th, C8th, CQuarter, CHalf, CWhole, CBreve],
        [D256th, D128th, D64th, D32nd, D16th, D8th, DQuarter, DHalf, DWhole, DBreve],
        [E256th, E128th, E64th, E32nd, E16th, E8th, EQuarter, EHalf, EWhole, EBreve],
        [F256th, F128th, F64th, F32nd, F16th, F8th, FQuarter, FHalf, FWhole, FBreve],
        [G256th, G128th, G64th, G32nd, G16th, G8th, GQuarter, GHalf, GWhole, GBreve],
        [A256th, A128th, A64th, A32nd, A16th, A8th, AQuarter, AHalf, AWhole, ABreve],
        [B256th, B128th, B64th, B32nd, B16th, B8th, BQuarter, BHalf, BWhole, BBreve],
    ]
};

/// Note value of a rest (`step` None) or a pitched note
pub fn note_value_kind(step: Option<DiatonicStep>, duration: DurationKind) -> bsr::NoteValueKind {
    let row = match step {
        None => 0,
        Some(step) => step.ordinal() as usize + 1,
    };
    match DURATION_COLUMNS[duration as usize].1 {
        Some(column) => NOTE_VALUE_TABLE[row][column],
        None => bsr::NoteValueKind::None,
    }
}
