//! BSR (Braille Score Representation) output tree
//!
//! ```text
//! Score
//!  ├─ TranscriptionNotes
//!  └─ Page*
//!      ├─ PageHeading?
//!      ├─ MusicHeading?   (key, time signature, tempo)
//!      ├─ Line*
//!      │   └─ Spaces | Measure | Key | TimeSignature | Tempo
//!      │                 └─ Clef | BarLine | Number | Words | Note | Dynamic
//!      └─ FootNotes?
//! ```
//!
//! Parents own their children in order; nothing points back up the tree.
//! The score borrows the MSR score it was produced from.

pub mod elements;
pub mod heading;
pub mod kinds;
pub mod line;
pub mod measure;
pub mod page;
pub mod score;

pub use elements::*;
pub use heading::{place_key, place_tempo, place_time_signature};
pub use kinds::*;
pub use line::{Line, LineElement};
pub use measure::{Measure, MeasureElement};
pub use page::{FootNote, FootNotes, MusicHeading, Page, PageHeading, Pagination};
pub use score::{Score, TranscriptionNote, TranscriptionNotes};
