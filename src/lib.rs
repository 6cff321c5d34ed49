//! MSR to BSR braille music lowering
//!
//! Turns a Music Score Representation tree (parts, staves, voices,
//! measures, notes) into a Braille Score Representation tree (pages,
//! lines, measures, cell elements) ready for a braille renderer.

pub mod bsr;
pub mod converters;
pub mod diagnostics;
pub mod models;

// Re-export commonly used types
pub use converters::{convert_msr_to_bsr, BrailleConversion, ConversionError, TranslationSettings};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use models as msr;
