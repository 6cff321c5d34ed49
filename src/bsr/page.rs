//! BSR pages and the headings and notes they carry

use serde::{Deserialize, Serialize};

use super::elements::{Key, Tempo, TimeSignature};
use super::line::Line;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub print_page_number: u32,
    pub braille_page_number: u32,
}

/// Title block at the top of a braille page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PageHeading {
    pub input_line: u32,
    pub title: String,
    pub pagination: Pagination,
    pub page_heading_number: u32,
}

/// Initial key, time signature and tempo, shown above the music instead
/// of inline
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MusicHeading {
    pub input_line: u32,
    pub key: Option<Key>,
    pub time_signature: Option<TimeSignature>,
    pub tempo: Option<Tempo>,
}

impl MusicHeading {
    pub fn new(input_line: u32) -> Self {
        Self { input_line, ..Default::default() }
    }

    pub fn newborn_clone(&self) -> Self {
        Self::new(self.input_line)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FootNote {
    pub input_line: u32,
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FootNotes {
    pub input_line: u32,
    pub elements: Vec<FootNote>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page {
    pub input_line: u32,
    pub print_page_number: u32,
    pub braille_page_number: u32,
    pub lines_per_page: u32,
    pub page_heading: Option<PageHeading>,
    pub music_heading: Option<MusicHeading>,
    pub lines: Vec<Line>,
    pub foot_notes: Option<FootNotes>,
}

impl Page {
    pub fn new(input_line: u32, print_page_number: u32, lines_per_page: u32) -> Self {
        Self {
            input_line,
            print_page_number,
            braille_page_number: print_page_number,
            lines_per_page,
            page_heading: None,
            music_heading: None,
            lines: Vec::new(),
            foot_notes: None,
        }
    }

    /// Same numbers and capacity, no headings, lines or foot notes
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::new(self.input_line, self.print_page_number, self.lines_per_page);
        clone.braille_page_number = self.braille_page_number;
        clone
    }

    /// Returns the index of the new line
    pub fn append_line(&mut self, line: Line) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    pub fn set_page_heading(&mut self, page_heading: PageHeading) {
        self.page_heading = Some(page_heading);
    }

    pub fn set_music_heading(&mut self, music_heading: MusicHeading) {
        self.music_heading = Some(music_heading);
    }

    pub fn set_foot_notes(&mut self, foot_notes: FootNotes) {
        self.foot_notes = Some(foot_notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newborn_clone_drops_children() {
        let mut page = Page::new(1, 2, 25);
        page.braille_page_number = 5;
        page.set_music_heading(MusicHeading::new(1));
        page.append_line(Line::new(1, 1, 30));

        let clone = page.newborn_clone();
        assert_eq!(clone.print_page_number, 2);
        assert_eq!(clone.braille_page_number, 5);
        assert_eq!(clone.lines_per_page, 25);
        assert!(clone.music_heading.is_none());
        assert!(clone.lines.is_empty());
    }
}
