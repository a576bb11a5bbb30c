// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Input validation.
//!
//! Lookups in the library report "not found" as `None`; this layer is
//! where an absent value becomes a hard error.

use crate::error::{Result, ShredError};
use crate::music::Scale;

/// Trimmed, lower-cased scale name; empty when none was given
pub fn normalize_scale_name(name: Option<&str>) -> String {
    name.map(|n| n.trim().to_lowercase()).unwrap_or_default()
}

pub fn validate_scale_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ShredError::NoScaleSpecified);
    }
    Ok(())
}

/// Turn a failed lookup of `name` into [`ShredError::UnknownScale`]
pub fn validate_scale<'a>(name: &str, scale: Option<&'a Scale>) -> Result<&'a Scale> {
    scale.ok_or_else(|| ShredError::UnknownScale(name.to_string()))
}

/// Parse a riff length given as text. Must be a base-10 integer >= 1.
pub fn validate_length(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ShredError::LengthNotInteger(trimmed.to_string()))?;
    validate_length_value(value)
}

pub fn validate_length_value(value: i64) -> Result<usize> {
    if value < 1 {
        return Err(ShredError::LengthTooLow(value));
    }
    usize::try_from(value).map_err(|_| ShredError::LengthNotInteger(value.to_string()))
}
