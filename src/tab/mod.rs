// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! ASCII tablature.
//!
//! A tab block has one line per string, high e at the top. Each note
//! takes one column; the string it is played on shows the fret number
//! and every other string shows dashes of the same width, so columns
//! line up whatever the fret widths are.

use std::fmt;

use crate::music::{GuitarString, Note};

/// Separator between note columns
const COLUMN_GAP: &str = "--";

/// Render notes as a six-line tab block (no trailing newline)
pub fn render(notes: &[Note]) -> String {
    AsciiTab::new(notes).to_string()
}

/// Tab view over a sequence of notes
#[derive(Debug, Clone, Copy)]
pub struct AsciiTab<'a> {
    notes: &'a [Note],
}

impl<'a> AsciiTab<'a> {
    pub fn new(notes: &'a [Note]) -> Self {
        Self { notes }
    }

    /// The tab line for one string
    pub fn line(&self, string: GuitarString) -> String {
        let columns: Vec<String> = self
            .notes
            .iter()
            .map(|note| {
                let fret = note.fret().to_string();
                if note.string() == string {
                    fret
                } else {
                    "-".repeat(fret.len())
                }
            })
            .collect();

        format!("{}|-{}-", string, columns.join(COLUMN_GAP))
    }

    /// All six lines, top to bottom
    pub fn lines(&self) -> Vec<String> {
        GuitarString::TAB_ORDER
            .iter()
            .map(|&string| self.line(string))
            .collect()
    }
}

impl fmt::Display for AsciiTab<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GuitarString::{HighE, LowE, A, B, D, G};

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "e|--\nB|--\nG|--\nD|--\nA|--\nE|--");
    }

    #[test]
    fn test_render_aligns_wide_frets() {
        let notes = [
            Note::new(HighE, 13),
            Note::new(B, 4),
            Note::new(G, 6),
            Note::new(D, 2),
            Note::new(A, 11),
            Note::new(LowE, 0),
        ];

        let expected = [
            "e|-13-----------------",
            "B|-----4--------------",
            "G|--------6-----------",
            "D|-----------2--------",
            "A|--------------11----",
            "E|------------------0-",
        ]
        .join("\n");

        assert_eq!(render(&notes), expected);
    }

    #[test]
    fn test_all_lines_same_width() {
        let notes = [
            Note::new(D, 12),
            Note::new(D, 3),
            Note::new(LowE, 14),
            Note::new(G, 9),
        ];
        let tab = AsciiTab::new(&notes);
        let widths: Vec<usize> = tab.lines().iter().map(String::len).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_single_note() {
        let notes = [Note::new(G, 7)];
        let tab = AsciiTab::new(&notes);
        assert_eq!(tab.line(G), "G|-7-");
        assert_eq!(tab.line(HighE), "e|---");
    }

    #[test]
    fn test_lines_present_for_unused_strings() {
        let notes = [Note::new(B, 5), Note::new(B, 8)];
        let lines = AsciiTab::new(&notes).lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "B|-5--8-");
        assert_eq!(lines[5], "E|------");
    }
}
