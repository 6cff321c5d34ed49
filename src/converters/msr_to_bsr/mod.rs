//! MSR to BSR translation
//!
//! Walks a Music Score Representation tree once, in document order, and
//! emits a first Braille Score Representation tree.
//!
//! # Architecture
//!
//! ```text
//! msr::Score ──► translator ──► bsr::Score (unfinalized)
//!                   │
//!                   ├── tables     (clef, bar line, key, time, accidental, note value)
//!                   ├── octave     (octave mark necessity)
//!                   └── Diagnostics (unsupported values)
//! ```
//!
//! # Modules
//!
//! - `settings` - Translation options and their JSON form
//! - `tables` - MSR to BSR mapping tables
//! - `octave` - Octave mark heuristic
//! - `translator` - The traversal itself
//! - `errors` - Fatal error types

pub mod errors;
pub mod octave;
pub mod settings;
pub mod tables;
pub mod translator;

pub use errors::ConversionError;
pub use octave::octave_mark_needed;
pub use settings::TranslationSettings;
pub use translator::{parse_per_minute, translate};
