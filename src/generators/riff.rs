// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Riff generator.
//!
//! A riff is a run of notes drawn uniformly, with replacement, from the
//! positions of one scale.

use tracing::{debug, trace};

use super::{IndexSource, RandomSource};
use crate::music::{Note, Scale};

/// Draw `length` notes from `scale` using `source`, in draw order.
///
/// An empty scale yields an empty riff.
pub fn shred<S: IndexSource + ?Sized>(scale: &Scale, length: usize, source: &mut S) -> Vec<Note> {
    let notes = scale.notes();
    if notes.is_empty() {
        debug!(scale = scale.name(), "scale has no notes, riff is empty");
        return Vec::new();
    }

    let riff: Vec<Note> = (0..length)
        .map(|_| {
            let index = source.next_index(notes.len());
            trace!(index, note = %notes[index], "drew note");
            notes[index]
        })
        .collect();

    debug!(scale = scale.name(), length, "generated riff");
    riff
}

/// Riff generator that owns its index source
#[derive(Debug, Clone)]
pub struct RiffGenerator<S = RandomSource> {
    source: S,
}

impl RiffGenerator<RandomSource> {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        Self::with_source(RandomSource::from_entropy())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RandomSource::seeded(seed))
    }
}

impl Default for RiffGenerator<RandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IndexSource> RiffGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Draw a riff of `length` notes from `scale`
    pub fn shred(&mut self, scale: &Scale, length: usize) -> Vec<Note> {
        shred(scale, length, &mut self.source)
    }
}
