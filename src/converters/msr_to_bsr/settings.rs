//! Translation settings

use serde::{Deserialize, Serialize};

use super::errors::ConversionError;

/// Options steering the MSR to BSR translation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslationSettings {
    /// Braille cells per line
    pub cells_per_line: u32,
    /// Braille lines per page
    pub lines_per_page: u32,
    /// Clefs are only translated when set
    pub include_clefs: bool,
    pub suppress_tempos: bool,
    /// Emit lyric syllables as words before their note
    pub add_words_from_lyrics: bool,
    /// Flag notes whose value size differs from the previous note's
    pub note_value_size_signs: bool,
    /// Named in the transcription note
    pub service_name: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            cells_per_line: 30,
            lines_per_page: 27,
            include_clefs: false,
            suppress_tempos: false,
            add_words_from_lyrics: false,
            note_value_size_signs: false,
            service_name: "msr2bsr".to_string(),
        }
    }
}

impl TranslationSettings {
    /// Decode from JSON, missing fields taking their defaults
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        let settings: TranslationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.cells_per_line == 0 {
            return Err(ConversionError::InvalidSettings(
                "cellsPerLine must be at least 1".to_string(),
            ));
        }
        if self.lines_per_page == 0 {
            return Err(ConversionError::InvalidSettings(
                "linesPerPage must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
