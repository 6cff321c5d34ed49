//! Music heading placement
//!
//! Both passes decide where a key, time signature or tempo goes with these
//! functions: into the music heading when one is offered and its slot is
//! still free, otherwise back to the caller, who places it inline.

use super::elements::{Key, Tempo, TimeSignature};
use super::page::MusicHeading;

/// Returns the key when it must go inline
pub fn place_key(heading: Option<&mut MusicHeading>, key: Key) -> Option<Key> {
    match heading {
        Some(heading) if heading.key.is_none() => {
            log::debug!("Placing key '{}' in music heading", key);
            heading.key = Some(key);
            None
        }
        _ => Some(key),
    }
}

/// Returns the time signature when it must go inline
pub fn place_time_signature(
    heading: Option<&mut MusicHeading>,
    time_signature: TimeSignature,
) -> Option<TimeSignature> {
    match heading {
        Some(heading) if heading.time_signature.is_none() => {
            log::debug!("Placing time signature '{}' in music heading", time_signature);
            heading.time_signature = Some(time_signature);
            None
        }
        _ => Some(time_signature),
    }
}

/// Returns the tempo when it must go inline
pub fn place_tempo(heading: Option<&mut MusicHeading>, tempo: Tempo) -> Option<Tempo> {
    match heading {
        Some(heading) if heading.tempo.is_none() => {
            log::debug!("Placing tempo '{}' in music heading", tempo);
            heading.tempo = Some(tempo);
            None
        }
        _ => Some(tempo),
    }
}
