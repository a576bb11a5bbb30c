// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale families and fingered scales.
//!
//! A [`Scale`] is a named set of fretboard positions in one key. Its
//! identity (display name and aliases) is derived from its
//! [`ScaleFamily`] and [`Key`], so a scale moved to a new key always
//! gets a name that matches.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::Key;
use super::note::Note;

/// Construction rule that scales are generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    MajorPentatonic,

    // Hand-built scale with no reference layout
    Custom,
}

impl ScaleFamily {
    /// Families a catalog knows how to enumerate in all twelve keys
    pub const ENUMERABLE: [ScaleFamily; 1] = [ScaleFamily::MajorPentatonic];

    /// Human-readable family name
    pub fn name(self) -> &'static str {
        match self {
            ScaleFamily::MajorPentatonic => "Major Pentatonic",
            ScaleFamily::Custom => "Custom",
        }
    }

    /// Whether a catalog can materialize every key of this family
    pub fn is_enumerable(self) -> bool {
        ScaleFamily::ENUMERABLE.contains(&self)
    }

    /// Display name of this family's scale in `key`
    pub fn display_name(self, key: Key) -> String {
        format!("{} {}", key, self.name())
    }

    /// Lookup spellings of this family's scale in `key`
    pub fn aliases(self, key: Key) -> Vec<String> {
        match self {
            ScaleFamily::MajorPentatonic => vec![
                format!("{} Major Pentatonic", key),
                format!("{}MajorPentatonic", key),
                format!("{} Maj Pen", key),
                format!("{}MajPen", key),
            ],
            ScaleFamily::Custom => vec![self.display_name(key)],
        }
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fingered scale in one key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scale {
    family: ScaleFamily,
    key: Key,
    name: String,
    aliases: Vec<String>,
    notes: Vec<Note>,
}

impl Scale {
    /// Create a scale of `family` in `key`; name and aliases follow the family
    pub fn new(family: ScaleFamily, key: Key, notes: Vec<Note>) -> Self {
        Self {
            family,
            key,
            name: family.display_name(key),
            aliases: family.aliases(key),
            notes,
        }
    }

    /// Create a one-off scale that no catalog enumerates
    pub fn custom(name: &str, key: Key, notes: Vec<Note>) -> Self {
        Self {
            family: ScaleFamily::Custom,
            key,
            name: name.to_string(),
            aliases: vec![name.to_string()],
            notes,
        }
    }

    /// Build the same fingering shifted by `semitones` and renamed for `key`.
    ///
    /// `wrap` is passed to every [`Note::offset`]. The receiver is left as is.
    pub fn derive(&self, semitones: i32, key: Key, wrap: bool) -> Scale {
        self.derive_with(semitones, key, |_| wrap)
    }

    /// Like [`Scale::derive`], with `wrap` decided per note
    pub fn derive_with<F>(&self, semitones: i32, key: Key, wrap: F) -> Scale
    where
        F: Fn(&Note) -> bool,
    {
        let notes = self
            .notes
            .iter()
            .map(|note| note.offset(semitones, wrap(note)))
            .collect();

        match self.family {
            ScaleFamily::Custom => Scale::custom(&self.family.display_name(key), key, notes),
            family => Scale::new(family, key, notes),
        }
    }

    /// The family this scale belongs to
    pub fn family(&self) -> ScaleFamily {
        self.family
    }

    /// The key of this scale
    pub fn key(&self) -> Key {
        self.key
    }

    /// Display name, e.g. "A Major Pentatonic"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lookup spellings
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Notes in rendering order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a position belongs to this scale
    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Case-insensitive alias match. `name` is expected to be trimmed.
    pub fn answers_to(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.aliases.iter().any(|alias| alias.to_lowercase() == wanted)
    }

    fn note_set(&self) -> HashSet<&Note> {
        self.notes.iter().collect()
    }
}

/// Equal when family and name match and the notes form the same set;
/// note order is irrelevant.
impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.name == other.name && self.note_set() == other.note_set()
    }
}

impl Eq for Scale {}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.notes.iter().map(Note::to_string).collect();
        write!(f, "{} {{{}}}", self.name, notes.join(", "))
    }
}
