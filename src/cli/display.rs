// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! User actions.
//!
//! Each action returns the text to print. Nothing here writes to stdout.

use crate::error::Result;
use crate::generators::{shred, IndexSource};
use crate::music::{tune, Scale, ScaleCatalog};
use crate::tab::AsciiTab;

use super::validate::{validate_length, validate_scale, validate_scale_name};

/// Every scale with its tab, separated by blank lines
pub fn all_scales(catalog: &ScaleCatalog) -> String {
    catalog
        .all_scales()
        .iter()
        .map(|scale| format!("{}\n{}", scale.name(), AsciiTab::new(scale.notes())))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One line per scale: name followed by its aliases
pub fn all_scale_names(catalog: &ScaleCatalog) -> String {
    catalog
        .all_scales()
        .iter()
        .map(|scale| format!("{} ({})", scale.name(), scale.aliases().join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up a scale by its already-normalized name
pub fn lookup<'a>(catalog: &'a ScaleCatalog, name: &str) -> Result<&'a Scale> {
    validate_scale_name(name)?;
    validate_scale(name, catalog.find_by_name(name))
}

/// A scale next to its tuned version
pub fn tuning(catalog: &ScaleCatalog, name: &str, tuning_key: &str) -> Result<String> {
    let original = lookup(catalog, name)?;
    let tuned = tune(catalog, original, tuning_key)?;

    Ok(format!(
        "Original Scale: {}\n{}\n\nTuned Scale: {}\n{}",
        original.name(),
        AsciiTab::new(original.notes()),
        tuned.name(),
        AsciiTab::new(tuned.notes()),
    ))
}

/// A random riff in the tuned scale, as tab
pub fn riff<S: IndexSource + ?Sized>(
    catalog: &ScaleCatalog,
    name: &str,
    tuning_key: &str,
    length: &str,
    source: &mut S,
) -> Result<String> {
    let original = lookup(catalog, name)?;
    let length = validate_length(length)?;
    let scale = tune(catalog, original, tuning_key)?;

    let notes = shred(scale, length, source);
    Ok(AsciiTab::new(&notes).to_string())
}
