// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! shredgen - guitar scale fingerings and random riffs as ASCII tab.
//!
//! - [`music`]: fretboard notes, keys, scale families, the scale catalog
//!   and tuning by rotation through a family's twelve keys
//! - [`tab`]: six-line ASCII tablature
//! - [`generators`]: random riffs drawn from a scale
//! - [`cli`], [`config`]: the command line surface and its defaults

pub mod cli;
pub mod config;
pub mod error;
pub mod generators;
pub mod music;
pub mod tab;

pub use error::{Result, ShredError};
pub use generators::{shred, FixedSource, IndexSource, RandomSource, RiffGenerator};
pub use music::{key_distance, key_index, tune, GuitarString, Key, Note, Scale, ScaleCatalog, ScaleFamily};
pub use tab::{render, AsciiTab};
