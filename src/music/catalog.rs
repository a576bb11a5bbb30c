// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale catalog.
//!
//! Each enumerable family has one hand-authored reference fingering in
//! the origin key (A). The other eleven keys are derived from it by
//! offsetting every note, and the twelve results are kept in key order
//! so that tuning can rotate through them.

use tracing::{debug, trace};

use super::key::{Key, ORIGIN_KEY};
use super::note::{Fret, GuitarString, Note};
use super::scale::{Scale, ScaleFamily};

use GuitarString::{HighE, LowE, A, B, D, G};

/// A major pentatonic box at the fifth fret
const A_MAJOR_PENTATONIC: [Note; 17] = [
    Note::new(HighE, 5),
    Note::new(HighE, 6),
    Note::new(HighE, 8),
    Note::new(B, 5),
    Note::new(B, 6),
    Note::new(B, 8),
    Note::new(G, 5),
    Note::new(G, 7),
    Note::new(D, 5),
    Note::new(D, 7),
    Note::new(D, 8),
    Note::new(A, 5),
    Note::new(A, 7),
    Note::new(A, 8),
    Note::new(LowE, 5),
    Note::new(LowE, 6),
    Note::new(LowE, 8),
];

/// Strings that climb the neck instead of wrapping back to the nut, per
/// offset from the origin key. Only C#, D and D# have entries, and only
/// the D string climbs. This is a fixed table.
const NON_WRAPPING_STRINGS: [(Fret, &[GuitarString]); 3] = [(4, &[D]), (5, &[D]), (6, &[D])];

/// Strings that keep their raw fret when deriving at `offset`
pub fn non_wrapping_strings(offset: Fret) -> &'static [GuitarString] {
    NON_WRAPPING_STRINGS
        .iter()
        .find(|(o, _)| *o == offset)
        .map(|(_, strings)| *strings)
        .unwrap_or(&[])
}

/// Whether deriving at `offset` wraps frets on `string`
pub fn wraps_at(offset: Fret, string: GuitarString) -> bool {
    !non_wrapping_strings(offset).contains(&string)
}

/// Hand-authored reference scale of a family, in the origin key
pub fn reference_scale(family: ScaleFamily) -> Option<Scale> {
    match family {
        ScaleFamily::MajorPentatonic => Some(Scale::new(
            family,
            ORIGIN_KEY,
            A_MAJOR_PENTATONIC.to_vec(),
        )),
        ScaleFamily::Custom => None,
    }
}

/// Derive `reference` into `new_key` by moving every note `semitone_offset` frets
pub fn derive(reference: &Scale, semitone_offset: Fret, new_key: Key, wrap: bool) -> Scale {
    reference.derive(semitone_offset, new_key, wrap)
}

/// Like [`derive`], but notes on `keep_raw` strings are not wrapped
pub fn derive_except(
    reference: &Scale,
    semitone_offset: Fret,
    new_key: Key,
    keep_raw: &[GuitarString],
) -> Scale {
    reference.derive_with(semitone_offset, new_key, |note| !keep_raw.contains(&note.string()))
}

/// All twelve keys of a family in key order, starting with the reference.
///
/// Empty for families without a reference layout.
pub fn family_scales(family: ScaleFamily) -> Vec<Scale> {
    let Some(reference) = reference_scale(family) else {
        return Vec::new();
    };

    let origin = ORIGIN_KEY.index() as Fret;
    let mut scales = Vec::with_capacity(Key::ALL.len());
    for offset in 1..Key::ALL.len() as Fret {
        let key = Key::from_index(origin + offset);
        let keep_raw = non_wrapping_strings(offset);
        if !keep_raw.is_empty() {
            trace!(%key, offset, strings = ?keep_raw, "deriving with non-wrapping strings");
        }
        scales.push(derive_except(&reference, offset, key, keep_raw));
    }
    scales.insert(0, reference);
    scales
}

/// Every scale the program knows about, grouped by family in key order
#[derive(Debug, Clone)]
pub struct ScaleCatalog {
    scales: Vec<Scale>,
}

impl ScaleCatalog {
    /// Catalog of every enumerable family
    pub fn new() -> Self {
        Self::with_families(&ScaleFamily::ENUMERABLE)
    }

    /// Catalog restricted to the given families
    pub fn with_families(families: &[ScaleFamily]) -> Self {
        let scales: Vec<Scale> = families.iter().flat_map(|&f| family_scales(f)).collect();
        debug!(families = families.len(), scales = scales.len(), "built scale catalog");
        Self { scales }
    }

    /// All scales in catalog order
    pub fn all_scales(&self) -> &[Scale] {
        &self.scales
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// First scale with an alias matching `name`, ignoring case and
    /// surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&Scale> {
        let name = name.trim();
        self.scales.iter().find(|scale| scale.answers_to(name))
    }

    /// The catalog's twelve-key run for `scale`'s family.
    ///
    /// `None` when this catalog does not enumerate that family.
    pub fn find_all_of_same_family(&self, scale: &Scale) -> Option<Vec<&Scale>> {
        if !scale.family().is_enumerable() {
            return None;
        }
        let family: Vec<&Scale> = self
            .scales
            .iter()
            .filter(|s| s.family() == scale.family())
            .collect();
        if family.is_empty() {
            None
        } else {
            Some(family)
        }
    }
}

impl Default for ScaleCatalog {
    fn default() -> Self {
        Self::new()
    }
}
