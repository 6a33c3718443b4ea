//! Error types
//!
//! Physics itself is infallible; errors only arise at the edges: loading
//! settings and adding particles with bad parameters.

use std::io;

use thiserror::Error;

/// Errors from loading, saving or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read or write the settings file.
    #[error("Settings I/O failed: {0}")]
    Io(#[from] io::Error),
    /// Settings file is not valid JSON for `Settings`.
    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of its allowed range.
    #[error("Invalid settings: {0}")]
    Validation(String),
}

/// Errors from adding a particle.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SpawnError {
    /// Radius must be finite and strictly positive (mass = radius²).
    #[error("Particle radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}
