// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretboard positions.
//!
//! A [`Note`] is a single position on the neck: a string and a fret.
//! Frets are normally pitch classes within one octave (0-11); only a
//! non-wrapping offset produces frets outside that range.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of semitones (and frets) in one octave
pub const NOTES_IN_OCTAVE: i32 = 12;

/// Fret number type. Signed because a non-wrapping offset may go negative.
pub type Fret = i32;

/// The six strings of a standard guitar, low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GuitarString {
    LowE,
    A,
    D,
    G,
    B,
    HighE,
}

impl GuitarString {
    /// All strings from low E to high e
    pub const ALL: [GuitarString; 6] = [
        GuitarString::LowE,
        GuitarString::A,
        GuitarString::D,
        GuitarString::G,
        GuitarString::B,
        GuitarString::HighE,
    ];

    /// Top-to-bottom line order of a tab block (high e first)
    pub const TAB_ORDER: [GuitarString; 6] = [
        GuitarString::HighE,
        GuitarString::B,
        GuitarString::G,
        GuitarString::D,
        GuitarString::A,
        GuitarString::LowE,
    ];

    /// Tab symbol for this string. Case distinguishes low `E` from high `e`.
    pub fn symbol(self) -> &'static str {
        match self {
            GuitarString::LowE => "E",
            GuitarString::A => "A",
            GuitarString::D => "D",
            GuitarString::G => "G",
            GuitarString::B => "B",
            GuitarString::HighE => "e",
        }
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single fretboard position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Note {
    string: GuitarString,
    fret: Fret,
}

impl Note {
    /// Create a note on a string at a fret
    pub const fn new(string: GuitarString, fret: Fret) -> Self {
        Self { string, fret }
    }

    /// The string this note is played on
    pub fn string(&self) -> GuitarString {
        self.string
    }

    /// The fret number
    pub fn fret(&self) -> Fret {
        self.fret
    }

    /// Move this note along its string by `amount` frets.
    ///
    /// With `wrap` the result is folded into 0-11. Without it the raw sum
    /// is kept, so it may climb past 11 (or drop below 0).
    pub fn offset(&self, amount: Fret, wrap: bool) -> Note {
        let fret = self.fret + amount;
        let fret = if wrap {
            fret.rem_euclid(NOTES_IN_OCTAVE)
        } else {
            fret
        };
        Note::new(self.string, fret)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.string, self.fret)
    }
}
