// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory for shredgen.
//!
//! This module provides fretboard notes, the key table, scale families,
//! the scale catalog and key-based tuning.

pub mod catalog;
pub mod key;
pub mod note;
pub mod scale;
pub mod transpose;

pub use catalog::{
    derive, derive_except, family_scales, non_wrapping_strings, reference_scale, wraps_at,
    ScaleCatalog,
};
pub use key::{key_distance, key_index, Key, ORIGIN_KEY};
pub use note::{Fret, GuitarString, Note, NOTES_IN_OCTAVE};
pub use scale::{Scale, ScaleFamily};
pub use transpose::tune;
