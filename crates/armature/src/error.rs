//! Error types for Armature operations.
//!
//! This module provides the main error type [`ArmatureError`]. Note that
//! structural problems in a scheme are not errors in this sense: the
//! validator returns them as data. [`ArmatureError::Validation`] only
//! appears when a caller asks for a layout of a scheme that failed
//! validation.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::validate::ValidationOutcome;

/// The main error type for Armature operations.
#[derive(Debug, Error)]
pub enum ArmatureError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to parse scheme request: {0}")]
    SchemeParse(String),

    #[error("Scheme failed validation with {} error(s)", .0.errors().len())]
    Validation(ValidationOutcome),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}
