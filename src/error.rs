// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for shredgen.
//!
//! Every failure the core can report is a value with a discrete exit
//! code. Nothing in the library prints; the binary turns these into a
//! message, a hint and a process exit code.

use thiserror::Error;

/// Exit code used for configuration and I/O failures
pub const EXIT_IO: i32 = 7;

/// Value-level failures raised by validation and tuning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShredError {
    #[error("no scale specified")]
    NoScaleSpecified,

    #[error("unknown scale: '{0}'")]
    UnknownScale(String),

    #[error("length must be an integer, got '{0}'")]
    LengthNotInteger(String),

    #[error("length must be at least 1, got {0}")]
    LengthTooLow(i64),

    #[error("invalid key '{key}', valid keys are: {}", .valid.join(", "))]
    InvalidKey { key: String, valid: Vec<String> },

    #[error("could not find the scale family of '{0}'")]
    ScaleFamilyNotFound(String),
}

impl ShredError {
    /// Process exit code for this error (0 is reserved for success)
    pub fn exit_code(&self) -> i32 {
        match self {
            ShredError::NoScaleSpecified => 1,
            ShredError::UnknownScale(_) => 2,
            ShredError::LengthNotInteger(_) => 3,
            ShredError::LengthTooLow(_) => 4,
            ShredError::InvalidKey { .. } => 5,
            ShredError::ScaleFamilyNotFound(_) => 6,
        }
    }

    /// Follow-up action to suggest after the message
    pub fn hint(&self) -> &'static str {
        match self {
            ShredError::NoScaleSpecified
            | ShredError::UnknownScale(_)
            | ShredError::ScaleFamilyNotFound(_) => {
                "run `shredgen --all-scale-names` to list the available scale names"
            }
            ShredError::LengthNotInteger(_) | ShredError::LengthTooLow(_) => {
                "the riff length must be a positive whole number, e.g. `--length 12`"
            }
            ShredError::InvalidKey { .. } => {
                "run `shredgen --all-scales` to see every key the scales are available in"
            }
        }
    }

    /// Text written to stderr: the message, then the hint
    pub fn report(&self) -> String {
        format!("error: {}\n{}", self, self.hint())
    }
}

pub type Result<T> = std::result::Result<T, ShredError>;
