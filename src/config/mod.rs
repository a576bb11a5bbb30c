// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for shredgen.
//!
//! An optional YAML file supplies the defaults the command line falls
//! back to when `--length` or `--tuning` are not given.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::validate::validate_length_value;
use crate::error::ShredError;
use crate::music::key_index;

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShredConfig {
    /// Fallback values for omitted command line options
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl ShredConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Check the defaults the same way command line values are checked
    pub fn validate(&self) -> std::result::Result<(), ShredError> {
        key_index(&self.defaults.tuning)?;
        validate_length_value(self.defaults.length as i64)?;
        Ok(())
    }
}

/// Defaults for the command line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Number of notes in a riff
    #[serde(default = "default_length")]
    pub length: u32,
    /// Tuning key (any key spelling)
    #[serde(default = "default_tuning")]
    pub tuning: String,
}

fn default_length() -> u32 {
    12
}
fn default_tuning() -> String {
    "A".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            tuning: default_tuning(),
        }
    }
}
