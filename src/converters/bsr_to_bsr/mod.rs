//! BSR to BSR finalization
//!
//! Second pass over the braille tree: re-creates pages, lines and measures
//! and settles where keys, time signatures and tempos finally go.

pub mod finalizer;

pub use finalizer::finalize;
