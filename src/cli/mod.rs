// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Command line surface.
//!
//! Parses arguments into an [`Action`] and runs it against a catalog,
//! returning the text to print or the error to report.

pub mod display;
pub mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;

use crate::config::ShredConfig;
use crate::error::Result;
use crate::generators::IndexSource;
use crate::music::ScaleCatalog;

use validate::normalize_scale_name;

#[derive(Debug, Parser)]
#[command(
    name = "shredgen",
    version,
    about = "Guitar scale fingerings and random riffs as ASCII tab"
)]
pub struct Cli {
    /// Scale to use, e.g. "A Major Pentatonic" or "amajpen"
    pub scale: Vec<String>,

    /// Show every scale as tab
    #[arg(short = 'a', long)]
    pub all_scales: bool,

    /// List every scale name with its aliases
    #[arg(short = 'n', long)]
    pub all_scale_names: bool,

    /// Show the scale and its tuned version instead of a riff
    #[arg(short = 't', long = "tune")]
    pub only_tune: bool,

    /// Key to tune the scale to (default from config, else A)
    #[arg(short = 'k', long)]
    pub tuning: Option<String>,

    /// Number of notes in the riff (default from config, else 12)
    #[arg(short, long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Seed for a reproducible riff
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML file with default settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the user asked for, with defaults filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AllScales,
    AllScaleNames,
    Tune {
        scale: String,
        tuning: String,
    },
    Shred {
        scale: String,
        tuning: String,
        length: String,
    },
}

impl Cli {
    /// Scale words joined with single spaces, if any were given
    pub fn scale_name(&self) -> Option<String> {
        if self.scale.is_empty() {
            None
        } else {
            Some(self.scale.join(" "))
        }
    }

    /// Pick the action; the first requested listing wins over tuning,
    /// and shredding is the fallback.
    pub fn action(&self, config: &ShredConfig) -> Action {
        let scale = normalize_scale_name(self.scale_name().as_deref());
        let tuning = self
            .tuning
            .clone()
            .unwrap_or_else(|| config.defaults.tuning.clone());

        if self.all_scales {
            Action::AllScales
        } else if self.all_scale_names {
            Action::AllScaleNames
        } else if self.only_tune {
            Action::Tune { scale, tuning }
        } else {
            let length = self
                .length
                .clone()
                .unwrap_or_else(|| config.defaults.length.to_string());
            Action::Shred {
                scale,
                tuning,
                length,
            }
        }
    }
}

/// Run an action and return its output
pub fn run<S: IndexSource + ?Sized>(
    action: &Action,
    catalog: &ScaleCatalog,
    source: &mut S,
) -> Result<String> {
    debug!(?action, "running action");
    match action {
        Action::AllScales => Ok(display::all_scales(catalog)),
        Action::AllScaleNames => Ok(display::all_scale_names(catalog)),
        Action::Tune { scale, tuning } => display::tuning(catalog, scale, tuning),
        Action::Shred {
            scale,
            tuning,
            length,
        } => display::riff(catalog, scale, tuning, length, source),
    }
}
