// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The twelve keys and the distance arithmetic between them.
//!
//! Keys are indexed from A (0) up to G# (11). The index order is the
//! order in which scale catalogs are materialized, so a key distance is
//! also a rotation through a catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShredError};

/// Key all scale families are authored in
pub const ORIGIN_KEY: Key = Key::A;

/// One of the twelve pitch classes, used as a scale key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    A,
    As, // A# / Bb
    B,
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
}

impl Key {
    /// All keys in index order, starting at A
    pub const ALL: [Key; 12] = [
        Key::A,
        Key::As,
        Key::B,
        Key::C,
        Key::Cs,
        Key::D,
        Key::Ds,
        Key::E,
        Key::F,
        Key::Fs,
        Key::G,
        Key::Gs,
    ];

    /// Fixed index of this key (A = 0 ... G# = 11)
    pub fn index(self) -> usize {
        match self {
            Key::A => 0,
            Key::As => 1,
            Key::B => 2,
            Key::C => 3,
            Key::Cs => 4,
            Key::D => 5,
            Key::Ds => 6,
            Key::E => 7,
            Key::F => 8,
            Key::Fs => 9,
            Key::G => 10,
            Key::Gs => 11,
        }
    }

    /// Key at an index, wrapping around the octave in both directions
    pub fn from_index(index: i32) -> Self {
        Key::ALL[index.rem_euclid(Key::ALL.len() as i32) as usize]
    }

    /// Canonical spelling
    pub fn name(self) -> &'static str {
        match self {
            Key::A => "A",
            Key::As => "A#",
            Key::B => "B",
            Key::C => "C",
            Key::Cs => "C#",
            Key::D => "D",
            Key::Ds => "D#",
            Key::E => "E",
            Key::F => "F",
            Key::Fs => "F#",
            Key::G => "G",
            Key::Gs => "G#",
        }
    }

    /// Enharmonic and spelled-out alternatives to the canonical name
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Key::A | Key::B | Key::C | Key::D | Key::E | Key::F | Key::G => &[],
            Key::As => &["Bb", "A sharp", "B flat"],
            Key::Cs => &["Db", "C sharp", "D flat"],
            Key::Ds => &["Eb", "D sharp", "E flat"],
            Key::Fs => &["Gb", "F sharp", "G flat"],
            Key::Gs => &["Ab", "G sharp", "A flat"],
        }
    }

    /// Canonical name followed by its aliases
    pub fn spellings(self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name()).chain(self.aliases().iter().copied())
    }

    /// Resolve any spelling, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> Result<Self> {
        let wanted = name.trim().to_lowercase();
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.spellings().any(|s| s.to_lowercase() == wanted))
            .ok_or_else(|| ShredError::InvalidKey {
                key: name.to_string(),
                valid: Key::valid_spellings(),
            })
    }

    /// Every accepted spelling, in key order
    pub fn valid_spellings() -> Vec<String> {
        Key::ALL
            .iter()
            .flat_map(|key| key.spellings())
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index (0-11) of a key given by any of its spellings
pub fn key_index(key_name: &str) -> Result<usize> {
    Key::parse(key_name).map(Key::index)
}

/// Semitones from `origin_key` up to `target_key`.
///
/// Not reduced modulo 12: the result ranges over -11..=11 and callers
/// wrap when they index.
pub fn key_distance(target_key: &str, origin_key: &str) -> Result<i32> {
    let target = key_index(target_key)? as i32;
    let origin = key_index(origin_key)? as i32;
    Ok(target - origin)
}
