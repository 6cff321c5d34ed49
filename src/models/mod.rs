//! MSR (Music Score Representation) input tree
//!
//! This module contains the part/staff/voice/measure/note tree
//! that the braille passes consume read-only.

pub mod barlines;
pub mod core;
pub mod notation;
pub mod pitch;

// Re-export commonly used types
pub use barlines::*;
pub use core::*;
pub use notation::*;
pub use pitch::*;
