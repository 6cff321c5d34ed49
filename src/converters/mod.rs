//! Braille converters
//!
//! Lowers an MSR tree into a finished BSR tree in two passes:
//! 1. **Translate** (`msr_to_bsr`): one walk over the MSR tree, building a
//!    first BSR tree and recording unsupported values as diagnostics
//! 2. **Finalize** (`bsr_to_bsr`): one walk over that BSR tree, rebuilding
//!    it and settling music heading placement
//!
//! # Basic Usage
//!
//! ```ignore
//! use msr2bsr::converters::convert_msr_to_bsr;
//!
//! let result = convert_msr_to_bsr(&msr_score, None)?;
//! println!("{}", result.score.summary());
//! for diagnostic in &result.diagnostics.items {
//!     eprintln!("{}: {}", diagnostic.kind, diagnostic.message);
//! }
//! ```

pub mod bsr_to_bsr;
pub mod msr_to_bsr;

use serde::Serialize;

use crate::bsr;
use crate::diagnostics::Diagnostics;
use crate::models as msr;

// Re-export main API
pub use bsr_to_bsr::finalize;
pub use msr_to_bsr::{translate, ConversionError, TranslationSettings};

/// Finished braille score plus everything that could not be expressed
#[derive(Serialize, Debug, Clone)]
pub struct BrailleConversion<'a> {
    pub score: bsr::Score<'a>,
    pub diagnostics: Diagnostics,
}

/// Convert an MSR score to a finalized BSR score.
///
/// # Arguments
///
/// * `score` - Complete MSR tree, borrowed for the lifetime of the result
/// * `settings` - Optional translation settings (uses defaults if None)
///
/// # Returns
///
/// * `Ok(BrailleConversion)` - Finalized score with its diagnostics
/// * `Err(ConversionError)` - Fatal error preventing output generation
pub fn convert_msr_to_bsr<'a>(
    score: &'a msr::Score,
    settings: Option<TranslationSettings>,
) -> Result<BrailleConversion<'a>, ConversionError> {
    let settings = settings.unwrap_or_default();
    let mut diagnostics = Diagnostics::new();

    let translated = translate(score, &settings, &mut diagnostics)?;
    let finalized = finalize(translated)?;

    if !diagnostics.is_empty() {
        log::info!(
            "Braille conversion finished with {} diagnostic(s)",
            diagnostics.len()
        );
    }

    Ok(BrailleConversion {
        score: finalized,
        diagnostics,
    })
}
