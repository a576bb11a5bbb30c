// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tuning a scale to another key.
//!
//! No pitches are recomputed here. The catalog already holds every key
//! of a family in key order, so tuning is a rotation through that run.

use tracing::debug;

use super::catalog::ScaleCatalog;
use super::key::{key_distance, ORIGIN_KEY};
use super::scale::Scale;
use crate::error::{Result, ShredError};

/// Return the scale `tuning_key` semitones away from `scale` in its family.
///
/// The distance is measured from the origin key (A), so tuning to A is
/// the identity.
pub fn tune<'a>(catalog: &'a ScaleCatalog, scale: &'a Scale, tuning_key: &str) -> Result<&'a Scale> {
    let distance = key_distance(tuning_key, ORIGIN_KEY.name())?;
    if distance == 0 {
        debug!(scale = scale.name(), "tuning key is the origin key, nothing to do");
        return Ok(scale);
    }

    let not_found = || ShredError::ScaleFamilyNotFound(scale.name().to_string());

    let family = catalog.find_all_of_same_family(scale).ok_or_else(not_found)?;
    let position = family
        .iter()
        .position(|candidate| *candidate == scale)
        .ok_or_else(not_found)?;

    let index = (position as i32 + distance).rem_euclid(family.len() as i32) as usize;
    let tuned = family[index];
    debug!(from = scale.name(), to = tuned.name(), distance, "tuned scale");
    Ok(tuned)
}
